// ============================================================================
// Calculator Errors
// Failures surfaced when dispatching an operation on textual operands
// ============================================================================

use super::operation::Operation;
use crate::input::ParseError;
use crate::numeric::DomainError;
use std::fmt;

/// Errors returned by [`crate::engine::evaluate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The operation is undefined for the given operands
    Domain(DomainError),
    /// An operand could not be parsed; `position` is zero-based
    Parse { position: usize, source: ParseError },
    /// No operation is known by this name
    UnknownOperation(String),
    /// Wrong number of operands
    ArityMismatch {
        operation: Operation,
        expected: usize,
        got: usize,
    },
    /// An integer operation would divide by zero
    IntegerDivisionByZero { operation: Operation },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Domain(err) => write!(f, "{}", err),
            CalcError::Parse { position, source } => {
                write!(f, "operand {}: {}", position + 1, source)
            },
            CalcError::UnknownOperation(name) => write!(f, "unknown operation: {:?}", name),
            CalcError::ArityMismatch {
                operation,
                expected,
                got,
            } => write!(
                f,
                "{} takes {} operand(s), got {}",
                operation, expected, got
            ),
            CalcError::IntegerDivisionByZero { operation } => {
                write!(f, "{}: integer division by zero", operation)
            },
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Domain(err) => Some(err),
            CalcError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DomainError> for CalcError {
    fn from(err: DomainError) -> Self {
        CalcError::Domain(err)
    }
}

/// Result type alias for dispatched evaluation
pub type CalcResult<T> = Result<T, CalcError>;
