// ============================================================================
// Casting Out Nines
// Digit roots computed straight from limbs
// ============================================================================

use super::bignum::BigNum;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `(2^32)^i mod 9` repeats with period 3, since `2^32 ≡ 4 (mod 9)`.
const LIMB_WEIGHTS_MOD_9: [u64; 3] = [1, 4, 7];

impl BigNum {
    /// Decimal digit root: digit sum reduced mod 9, reported as 9 for
    /// non-zero multiples of 9 and 0 only for zero.
    ///
    /// Computed from limbs without converting to decimal.
    pub fn digit_root(&self) -> u8 {
        let residue = self
            .limbs()
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &limb)| {
                (acc + (limb as u64 % 9) * LIMB_WEIGHTS_MOD_9[i % 3]) % 9
            });
        match residue {
            0 if self.is_zero() => 0,
            0 => 9,
            r => r as u8,
        }
    }
}

/// Casting-out-nines check of `a + b == sum`.
///
/// Necessary but not sufficient: a wrong sum passes whenever its error is a
/// multiple of 9 (transposed digits, for example).
pub fn verify_add(a: &BigNum, b: &BigNum, sum: &BigNum) -> bool {
    (a.digit_root() + b.digit_root()) % 9 == sum.digit_root() % 9
}

/// Digit roots of both addends and the sum, with the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastingOutNines {
    pub root_a: u8,
    pub root_b: u8,
    pub root_sum: u8,
    pub consistent: bool,
}

/// Run [`verify_add`] and keep the intermediate digit roots.
pub fn casting_out_nines(a: &BigNum, b: &BigNum, sum: &BigNum) -> CastingOutNines {
    let root_a = a.digit_root();
    let root_b = b.digit_root();
    let root_sum = sum.digit_root();
    CastingOutNines {
        root_a,
        root_b,
        root_sum,
        consistent: (root_a + root_b) % 9 == root_sum % 9,
    }
}
