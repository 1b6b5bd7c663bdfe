// ============================================================================
// Operand Parsing
// Text-to-number conversion for command-line operands
// ============================================================================

use super::errors::{ParseError, ParseResult};
use std::num::IntErrorKind;

/// Parse an IEEE-754 double.
///
/// Surrounding whitespace is ignored. Decimal and scientific notation are
/// accepted, as are the case-insensitive literals `NaN`, `Inf` and
/// `Infinity` with an optional sign.
///
/// # Errors
/// - `Empty` if nothing but whitespace was given
/// - `Invalid` if the text is not a float numeral
/// - `OutOfRange` if a finite numeral overflows to infinity (e.g. `1e400`)
///
/// # Example
/// ```
/// use calc_core::input::parse_float;
///
/// assert_eq!(parse_float("  78.9 "), Ok(78.9));
/// assert!(parse_float("-Infinity").unwrap().is_infinite());
/// ```
pub fn parse_float(text: &str) -> ParseResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        tracing::debug!("float operand is empty");
        return Err(ParseError::Empty);
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        tracing::debug!(input = text, "float operand is not a numeral");
        ParseError::Invalid {
            input: text.to_string(),
        }
    })?;

    // Only an explicit infinity literal may produce an infinite value
    if value.is_infinite() && !trimmed.to_ascii_lowercase().contains("inf") {
        tracing::debug!(input = text, "float operand overflows f64");
        return Err(ParseError::OutOfRange {
            input: text.to_string(),
        });
    }

    Ok(value)
}

/// Parse a signed 64-bit integer.
///
/// Parsing is strict: surrounding whitespace, decimal points and exponents
/// are rejected. A leading `+` or `-` is allowed.
///
/// # Errors
/// - `Empty` for an empty string
/// - `Invalid` for any non-digit content
/// - `OutOfRange` if the magnitude does not fit in an `i64`
///
/// # Example
/// ```
/// use calc_core::input::{parse_integer, ParseError};
///
/// assert_eq!(parse_integer("-45"), Ok(-45));
/// assert!(matches!(
///     parse_integer("9223372036854775808"),
///     Err(ParseError::OutOfRange { .. })
/// ));
/// ```
pub fn parse_integer(text: &str) -> ParseResult<i64> {
    text.parse::<i64>().map_err(|err| {
        tracing::debug!(input = text, error = %err, "integer operand rejected");
        match err.kind() {
            IntErrorKind::Empty => ParseError::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange {
                input: text.to_string(),
            },
            _ => ParseError::Invalid {
                input: text.to_string(),
            },
        }
    })
}
