// ============================================================================
// Real Operations
// IEEE-754 double-precision functions with explicit domain checks
// ============================================================================

use super::errors::{DomainError, NumericResult};

/// IEEE-754 product. Infinities and NaN propagate.
#[inline]
pub fn multiply(num1: f64, num2: f64) -> f64 {
    num1 * num2
}

/// IEEE-754 quotient.
///
/// A non-zero divisor always yields the float quotient, which may be ±Inf.
///
/// # Errors
/// Returns `DivisionByZero` if `num2` is `0.0` or `-0.0`.
#[inline]
pub fn divide(num1: f64, num2: f64) -> NumericResult<f64> {
    if num2 == 0.0 {
        tracing::debug!(num1, "division rejected zero divisor");
        return Err(DomainError::DivisionByZero);
    }
    Ok(num1 / num2)
}

/// `base` raised to `exponent`.
///
/// `0^0 == 1`; a negative base with a fractional exponent is NaN.
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Magnitude of `num`. NaN maps to NaN.
#[inline]
pub fn absolute(num: f64) -> f64 {
    num.abs()
}

/// Square root.
///
/// NaN passes through as NaN.
///
/// # Errors
/// Returns `NegativeSquareRoot` if `num < 0`.
pub fn square_root(num: f64) -> NumericResult<f64> {
    if num < 0.0 {
        tracing::debug!(num, "square root rejected negative input");
        return Err(DomainError::NegativeSquareRoot);
    }
    Ok(num.sqrt())
}

/// Logarithm of `num` in `base`, by change of base: `ln(num) / ln(base)`.
///
/// # Errors
/// Returns `InvalidLogarithm` if `num <= 0`, `base <= 0` or `base == 1`.
pub fn logarithm(num: f64, base: f64) -> NumericResult<f64> {
    if num <= 0.0 || base <= 0.0 || base == 1.0 {
        tracing::debug!(num, base, "logarithm rejected input");
        return Err(DomainError::InvalidLogarithm);
    }
    Ok(num.ln() / base.ln())
}

/// Sine, cosine and tangent of an angle in radians.
///
/// The tangent is not guarded near odd multiples of π/2.
#[inline]
pub fn sin_cos_tan(angle: f64) -> (f64, f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (sin, cos, angle.tan())
}
