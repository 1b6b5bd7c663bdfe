// ============================================================================
// Parse Errors
// Failures converting operand text into numbers
// ============================================================================

use std::fmt;

/// Errors that can occur while converting text into a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input was empty (or, for floats, only whitespace)
    Empty,
    /// Input is not a numeral of the requested type
    Invalid { input: String },
    /// Numeral is well-formed but its magnitude does not fit the target type
    OutOfRange { input: String },
}

impl ParseError {
    /// The offending text, if any.
    pub fn input(&self) -> &str {
        match self {
            ParseError::Empty => "",
            ParseError::Invalid { input } | ParseError::OutOfRange { input } => input,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "parsing \"\": empty input"),
            ParseError::Invalid { input } => write!(f, "parsing {:?}: invalid syntax", input),
            ParseError::OutOfRange { input } => {
                write!(f, "parsing {:?}: value out of range", input)
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
