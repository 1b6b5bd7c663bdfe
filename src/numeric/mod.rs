// ============================================================================
// Numeric Module
// Stateless arithmetic over i64 and f64
// ============================================================================
//
// This module provides:
// - Integer operations: add, subtract, modulo, factorial, gcd, lcm
// - Real operations: multiply, divide, power, absolute, square_root,
//   logarithm, sin_cos_tan
// - DomainError: fixed-message errors for undefined inputs
//
// Design principles:
// - Every function is pure and safe to call from any thread
// - Domain checks only where the real-valued operation is undefined
// - Integer overflow wraps; a zero integer divisor is left to the caller

mod errors;
mod integer;
mod real;

pub use errors::{DomainError, NumericResult};
pub use integer::{add, factorial, gcd, lcm, modulo, subtract};
pub use real::{absolute, divide, logarithm, multiply, power, sin_cos_tan, square_root};
