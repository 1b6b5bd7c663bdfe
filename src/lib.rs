// ============================================================================
// Calculator Core Library
// Elementary integer and floating-point operations with explicit domain errors
// ============================================================================

//! # Calculator Core
//!
//! Stateless arithmetic over `i64` and `f64`, plus the operand parsing a
//! command-line front end needs.
//!
//! ## Features
//!
//! - **Pure functions**: add, subtract, multiply, divide, modulo, power,
//!   absolute, square root, factorial, gcd, lcm, logarithm, sin/cos/tan
//! - **Fixed-message domain errors** instead of silent NaN sentinels
//! - **Strict operand parsing** that returns errors rather than exiting
//! - **Named dispatch** of an operation over textual operands
//!
//! ## Example
//!
//! ```rust
//! use calc_core::prelude::*;
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(factorial(5), Ok(120));
//! assert_eq!(
//!     divide(1.0, 0.0).unwrap_err().to_string(),
//!     "division by zero is not allowed"
//! );
//!
//! let x = parse_float("123.45").unwrap();
//! assert_eq!(x, 123.45);
//!
//! let value = evaluate_named("lcm", &["4", "6"]).unwrap();
//! assert_eq!(value, Value::Integer(12));
//! ```

pub mod engine;
pub mod input;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{
        evaluate, evaluate_named, CalcError, CalcResult, OperandKind, Operation, Value,
    };
    pub use crate::input::{parse_float, parse_integer, ParseError, ParseResult};
    pub use crate::numeric::{
        absolute, add, divide, factorial, gcd, lcm, logarithm, modulo, multiply, power,
        sin_cos_tan, square_root, subtract, DomainError, NumericResult,
    };
}
