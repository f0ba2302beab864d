// ============================================================================
// Powers and Roots
// Small-exponent powers and Newton's integer square root
// ============================================================================

use super::bignum::BigNum;
use super::errors::{NumericError, NumericResult};

/// Exponents accepted by [`BigNum::pow`].
pub const SUPPORTED_EXPONENTS: std::ops::RangeInclusive<u32> = 1..=3;

impl BigNum {
    /// Raise to a power in `{1, 2, 3}` by repeated multiplication.
    ///
    /// # Errors
    /// Returns `InvalidExponent` for any other exponent.
    pub fn pow(&self, exp: u32) -> NumericResult<Self> {
        if !SUPPORTED_EXPONENTS.contains(&exp) {
            return Err(NumericError::InvalidExponent(exp));
        }
        let mut result = self.clone();
        for _ in 1..exp {
            result = &result * self;
        }
        Ok(result)
    }

    /// Floor of the square root, by Newton's iteration
    /// `x' = (x + a/x) / 2` starting from `2^ceil(bits/2)`.
    ///
    /// The start is above the root, so the sequence strictly decreases until
    /// the first step that does not, and the value before that step is the
    /// floor root.
    pub fn isqrt(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut x = Self::power_of_two(self.bits().div_ceil(2));
        let mut iterations = 0usize;
        loop {
            let (quotient, _) = self.div_rem_nonzero(&x);
            let next = (&x + &quotient).shr_one();
            iterations += 1;
            if next >= x {
                break;
            }
            x = next;
        }

        tracing::trace!(bits = self.bits(), iterations, "isqrt converged");
        x
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigNum {
        BigNum::from_decimal(s).unwrap()
    }

    #[test]
    fn test_pow_supported_exponents() {
        let two = BigNum::from(2u32);
        assert_eq!(two.pow(1).unwrap(), two);
        assert_eq!(two.pow(2).unwrap().to_string(), "4");
        assert_eq!(two.pow(3).unwrap().to_string(), "8");
    }

    #[test]
    fn test_pow_rejects_other_exponents() {
        let two = BigNum::from(2u32);
        assert_eq!(two.pow(4), Err(NumericError::InvalidExponent(4)));
        assert_eq!(two.pow(0), Err(NumericError::InvalidExponent(0)));
    }

    #[test]
    fn test_pow_large_base() {
        let base = dec("123456789012345678901234567890");
        assert_eq!(
            base.pow(3).unwrap().to_string(),
            "1881676372353657772546716040589641726257477229849409426207693797722198701224860897069000"
        );
    }

    #[test]
    fn test_isqrt_small() {
        let expected = [0u64, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(BigNum::from(n as u64).isqrt(), BigNum::from(*root), "isqrt({})", n);
        }
    }

    #[test]
    fn test_isqrt_ten() {
        assert_eq!(dec("10").isqrt().to_string(), "3");
    }

    #[test]
    fn test_isqrt_perfect_square_and_neighbours() {
        let root = dec("9876543210987654321");
        let square = &root * &root;
        assert_eq!(square.isqrt(), root);
        assert_eq!((&square - &BigNum::one()).isqrt(), &root - &BigNum::one());
        assert_eq!((&square + &BigNum::one()).isqrt(), root);
    }

    #[test]
    fn test_isqrt_u64_max() {
        assert_eq!(BigNum::from(u64::MAX).isqrt(), BigNum::from(u32::MAX));
    }

    #[test]
    fn test_isqrt_bracket_multi_limb() {
        let a = BigNum::from_limbs(vec![0xdead_beef, 0x1234_5678, 0xffff_0000, 7, 99, 3]);
        let r = a.isqrt();
        let r1 = &r + &BigNum::one();
        assert!(&r * &r <= a);
        assert!(&r1 * &r1 > a);
    }
}
