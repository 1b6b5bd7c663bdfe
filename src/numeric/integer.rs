// ============================================================================
// Integer Operations
// Two's-complement arithmetic on i64 with wrapping overflow
// ============================================================================

use super::errors::{DomainError, NumericResult};

/// Sum of two integers, wrapping on overflow.
#[inline]
pub fn add(num1: i64, num2: i64) -> i64 {
    num1.wrapping_add(num2)
}

/// Difference of two integers, wrapping on overflow.
#[inline]
pub fn subtract(num1: i64, num2: i64) -> i64 {
    num1.wrapping_sub(num2)
}

/// Truncated remainder of `num1 / num2`. The sign follows the dividend.
///
/// `i64::MIN % -1` yields `0` rather than overflowing.
///
/// # Panics
/// Panics if `num2` is zero. Callers must guard the divisor.
#[inline]
pub fn modulo(num1: i64, num2: i64) -> i64 {
    num1.wrapping_rem(num2)
}

/// `n!` for non-negative `n`.
///
/// `0! == 1! == 1`. Results past `20!` wrap silently; from `66!` on the
/// wrapped product is `0`, so the loop stops there.
///
/// # Errors
/// Returns `NegativeFactorial` if `n < 0`.
pub fn factorial(n: i64) -> NumericResult<i64> {
    if n < 0 {
        tracing::debug!(n, "factorial rejected negative input");
        return Err(DomainError::NegativeFactorial);
    }

    let mut acc = 1i64;
    for k in 2..=n {
        acc = acc.wrapping_mul(k);
        if acc == 0 {
            break;
        }
    }
    Ok(acc)
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0) == a`, otherwise `gcd(b, a % b)`. With negative inputs the
/// sign of the result follows the truncated remainder, so it may be negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a.wrapping_rem(b));
    }
    a
}

/// Least common multiple, computed as `(a * b) / gcd(a, b)`.
///
/// The product wraps on overflow.
///
/// # Panics
/// Panics if both `a` and `b` are zero, since `gcd(0, 0) == 0`.
pub fn lcm(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b).wrapping_div(gcd(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(5, 7), 12);
        assert_eq!(add(10, -3), 7);
        assert_eq!(add(-4, -6), -10);
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(i32::MAX as i64, 1), i32::MAX as i64 + 1);
        assert_eq!(add(i32::MAX as i64, i32::MIN as i64), -1);
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
        assert_eq!(add(i64::MIN, -1), i64::MAX);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(10, 5), 5);
        assert_eq!(subtract(5, 10), -5);
        assert_eq!(subtract(-5, -3), -2);
        assert_eq!(subtract(8, -2), 10);
        assert_eq!(subtract(i64::MAX, i64::MAX), 0);
        assert_eq!(subtract(i64::MIN, i64::MIN), 0);
        assert_eq!(subtract(i64::MIN, 1), i64::MAX);
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(modulo(10, 3), 1);
        assert_eq!(modulo(-10, 3), -1);
        assert_eq!(modulo(10, -3), 1);
        assert_eq!(modulo(-10, -3), -1);
        assert_eq!(modulo(0, 7), 0);
    }

    #[test]
    fn test_modulo_min_by_negative_one() {
        assert_eq!(modulo(i64::MIN, -1), 0);
    }

    #[test]
    #[should_panic]
    fn test_modulo_zero_divisor_faults() {
        modulo(5, 0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(10), Ok(3_628_800));
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_negative() {
        let result = factorial(-1);
        assert_eq!(result, Err(DomainError::NegativeFactorial));
        assert_eq!(
            result.unwrap_err().to_string(),
            "factorial is not defined for negative numbers"
        );
    }

    #[test]
    fn test_factorial_wraps_past_twenty() {
        let expected = 2_432_902_008_176_640_000i64.wrapping_mul(21);
        assert_eq!(factorial(21), Ok(expected));
    }

    #[test]
    fn test_factorial_wraps_to_zero_at_sixty_six() {
        // 66! carries 64 factors of two
        let before = (2..=65i64).fold(1i64, |acc, k| acc.wrapping_mul(k));
        assert_ne!(before, 0);
        assert_eq!(factorial(65), Ok(before));
        assert_eq!(factorial(66), Ok(0));
        assert_eq!(factorial(67), Ok(0));
    }

    #[test]
    fn test_factorial_of_huge_input_returns_promptly() {
        let start = std::time::Instant::now();
        assert_eq!(factorial(i64::MAX), Ok(0));
        assert_eq!(factorial(2_000_000_000), Ok(0));
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(36, 24), 12);
        assert_eq!(gcd(24, 36), 12);
        assert_eq!(gcd(0, 29), 29);
        assert_eq!(gcd(29, 0), 29);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_gcd_negative_follows_remainder_sign() {
        // -36 % 24 == -12, 24 % -12 == 0
        assert_eq!(gcd(-36, 24), -12);
        // 36 % -24 == 12, -24 % 12 == 0
        assert_eq!(gcd(36, -24), 12);
        assert_eq!(gcd(-36, -24), -12);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(21, 6), 42);
        assert_eq!(lcm(7, 1), 7);
        assert_eq!(lcm(0, 5), 0);
    }

    #[test]
    #[should_panic]
    fn test_lcm_both_zero_faults() {
        lcm(0, 0);
    }
}
