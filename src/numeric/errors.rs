// ============================================================================
// Numeric Errors
// Domain errors for operations that are undefined on part of their input
// ============================================================================

use std::fmt;

/// Errors raised when an operation is mathematically undefined for its input.
///
/// The `Display` text of each variant is fixed and is part of the public
/// contract; callers may match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    /// Real division with a zero divisor
    DivisionByZero,
    /// Square root of a value below zero
    NegativeSquareRoot,
    /// Factorial of a negative integer
    NegativeFactorial,
    /// Logarithm with a non-positive argument, a non-positive base, or base 1
    InvalidLogarithm,
}

impl DomainError {
    /// The fixed, human-readable message for this error.
    pub const fn message(self) -> &'static str {
        match self {
            DomainError::DivisionByZero => "division by zero is not allowed",
            DomainError::NegativeSquareRoot => "square root of a negative number is not defined",
            DomainError::NegativeFactorial => "factorial is not defined for negative numbers",
            DomainError::InvalidLogarithm => "logarithm is not defined for these values",
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DomainError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, DomainError>;
