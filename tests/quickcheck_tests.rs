// ============================================================================
// QuickCheck Tests
// Recurrences and identities of the integer operations
// ============================================================================

use calc_core::numeric::{add, factorial, gcd, modulo, subtract};
use quickcheck::{quickcheck, TestResult};

quickcheck! {
    fn add_subtract_inverse(a: i64, b: i64) -> bool {
        subtract(add(a, b), b) == a
    }

    fn factorial_recurrence(n: u8) -> bool {
        let n = i64::from(n % 40) + 1;
        factorial(n).unwrap() == n.wrapping_mul(factorial(n - 1).unwrap())
    }

    fn gcd_is_symmetric_for_non_negatives(a: u32, b: u32) -> bool {
        let (a, b) = (i64::from(a), i64::from(b));
        gcd(a, b) == gcd(b, a)
    }

    fn modulo_sign_follows_dividend(a: i64, b: i64) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }
        let r = modulo(a, b);
        TestResult::from_bool(r == 0 || (r < 0) == (a < 0))
    }
}
