// ============================================================================
// Input Module
// Operand parsing for command-line front ends
// ============================================================================
//
// Both helpers are pure and return a ParseError instead of terminating;
// exit-code policy belongs to the outermost CLI layer.

mod errors;
mod parse;

pub use errors::{ParseError, ParseResult};
pub use parse::{parse_float, parse_integer};
