// ============================================================================
// Decimal Conversion
// Parsing and divide-and-conquer formatting of base-10 strings
// ============================================================================

use super::bignum::{BigNum, Limbs, LIMB_BASE, LIMB_BITS};
use super::errors::{NumericError, NumericResult};
use smallvec::smallvec;
use std::collections::HashMap;

/// Limb count at or below which formatting uses the per-digit base case
/// (about 300 decimal digits). Above it, `div_rem` by a power of ten is
/// cheaper than another pass of digit multiply-adds.
pub const DC_THRESHOLD_LIMBS: usize = 32;

/// `32·log10(2)` scaled by 1000, rounded up.
const DIGITS_PER_LIMB_MILLI: usize = 9_633;

/// Check that `s` is a canonical decimal: non-empty, ASCII digits only, and no
/// leading zero unless the whole string is `"0"`.
pub fn is_valid_decimal(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes {
        [] => false,
        [b'0', _, ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}

impl BigNum {
    /// Parse a canonical decimal string.
    ///
    /// Runs `value = value·10 + digit` once per character, so the cost is
    /// O(digits · limbs).
    ///
    /// # Errors
    /// Returns `InvalidDecimalString` for empty input, non-digit characters,
    /// or a leading zero.
    pub fn from_decimal(s: &str) -> NumericResult<Self> {
        if !is_valid_decimal(s) {
            return Err(NumericError::InvalidDecimalString);
        }

        let mut limbs: Limbs = smallvec![0];
        for digit in s.bytes().map(|b| (b - b'0') as u64) {
            let mut carry = digit;
            for limb in limbs.iter_mut() {
                let cur = *limb as u64 * 10 + carry;
                *limb = cur as u32;
                carry = cur >> LIMB_BITS;
            }
            if carry != 0 {
                limbs.push(carry as u32);
            }
        }
        Ok(Self::from_raw(limbs))
    }

    /// Format as a decimal string.
    ///
    /// Values above [`DC_THRESHOLD_LIMBS`] limbs are split as
    /// `hi·10^k + lo` and both halves formatted recursively; powers of ten are
    /// memoized for the duration of this call only.
    pub fn to_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut cache = Pow10Cache::new();
        let digits = to_decimal_dc(self, &mut cache);
        tracing::trace!(
            limbs = self.len(),
            digits = digits.len(),
            cached_powers = cache.len(),
            "formatted decimal"
        );
        digits
    }
}

// ============================================================================
// Power-of-Ten Cache
// ============================================================================

/// Memo of `10^k` keyed by digit count `k`, scoped to one `to_decimal` call.
///
/// `10^k` is derived from `10^(k/2)` by squaring, with one extra
/// multiplication by ten when `k` is odd, so each exponent is computed once.
#[derive(Debug, Default)]
pub struct Pow10Cache {
    powers: HashMap<usize, BigNum>,
}

impl Pow10Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized powers.
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// `10^k`, computing and memoizing any missing intermediate powers.
    pub fn get(&mut self, k: usize) -> &BigNum {
        if !self.powers.contains_key(&k) {
            let value = match k {
                0 => BigNum::one(),
                1 => BigNum::from(10u32),
                _ => {
                    let squared = {
                        let half = self.get(k / 2);
                        half * half
                    };
                    if k % 2 == 1 {
                        &squared * &BigNum::from(10u32)
                    } else {
                        squared
                    }
                },
            };
            self.powers.insert(k, value);
        }
        &self.powers[&k]
    }
}

// ============================================================================
// Formatting Strategies
// ============================================================================

/// Upper bound on the decimal digit count of a value with `limbs` limbs.
#[inline]
fn decimal_digits_estimate(limbs: usize) -> usize {
    limbs * DIGITS_PER_LIMB_MILLI / 1000 + 1
}

fn to_decimal_dc(value: &BigNum, cache: &mut Pow10Cache) -> String {
    if value.len() <= DC_THRESHOLD_LIMBS {
        return to_decimal_base(value);
    }

    // value = hi·10^k + lo with k about half the digit count.
    let k = decimal_digits_estimate(value.len()) / 2;
    let (hi, lo) = value.div_rem_nonzero(cache.get(k));

    let lo_digits = to_decimal_dc(&lo, cache);
    if hi.is_zero() {
        return lo_digits;
    }
    let hi_digits = to_decimal_dc(&hi, cache);

    // lo < 10^k, so padding to exactly k digits is always possible.
    let mut out = String::with_capacity(hi_digits.len() + k);
    out.push_str(&hi_digits);
    out.extend(std::iter::repeat_n('0', k - lo_digits.len()));
    out.push_str(&lo_digits);
    out
}

/// Base case: fold limbs into a decimal accumulator, most significant first,
/// computing `acc = acc·2^32 + limb` over base-10 digits.
fn to_decimal_base(value: &BigNum) -> String {
    // Least-significant digit first.
    let mut digits: Vec<u8> = vec![0];
    for &limb in value.limbs().iter().rev() {
        decimal_mul_add(&mut digits, LIMB_BASE, limb as u64);
    }
    while digits.len() > 1 && digits[digits.len() - 1] == 0 {
        digits.pop();
    }
    digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}

/// `digits = digits·factor + addend` on little-endian base-10 digits.
fn decimal_mul_add(digits: &mut Vec<u8>, factor: u64, addend: u64) {
    let mut carry = addend;
    for digit in digits.iter_mut() {
        let v = *digit as u64 * factor + carry;
        *digit = (v % 10) as u8;
        carry = v / 10;
    }
    while carry != 0 {
        digits.push((carry % 10) as u8);
        carry /= 10;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_decimal() {
        assert!(is_valid_decimal("0"));
        assert!(is_valid_decimal("7"));
        assert!(is_valid_decimal("1234567890"));
        assert!(!is_valid_decimal(""));
        assert!(!is_valid_decimal("00"));
        assert!(!is_valid_decimal("0123"));
        assert!(!is_valid_decimal("12a4"));
        assert!(!is_valid_decimal("-5"));
        assert!(!is_valid_decimal(" 5"));
        assert!(!is_valid_decimal("1_000"));
    }

    #[test]
    fn test_from_decimal_carries_into_new_limb() {
        let n = BigNum::from_decimal("5000000000").unwrap();
        assert_eq!(n.limbs(), &[705032704, 1]);
    }

    #[test]
    fn test_from_decimal_small() {
        assert_eq!(BigNum::from_decimal("0").unwrap().limbs(), &[0]);
        assert_eq!(BigNum::from_decimal("4294967295").unwrap().limbs(), &[u32::MAX]);
        assert_eq!(BigNum::from_decimal("4294967296").unwrap().limbs(), &[0, 1]);
    }

    #[test]
    fn test_from_decimal_rejects_malformed() {
        for bad in ["", "007", "12 3", "abc", "+1", "1.0"] {
            assert_eq!(
                BigNum::from_decimal(bad),
                Err(NumericError::InvalidDecimalString),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_from_str() {
        let n: BigNum = "18446744073709551616".parse().unwrap();
        assert_eq!(n.limbs(), &[0, 0, 1]);
        assert!("01".parse::<BigNum>().is_err());
    }

    #[test]
    fn test_to_decimal_small() {
        assert_eq!(BigNum::zero().to_decimal(), "0");
        assert_eq!(BigNum::from(u32::MAX).to_decimal(), "4294967295");
        assert_eq!(BigNum::from(u64::MAX).to_decimal(), "18446744073709551615");
        assert_eq!(BigNum::from_limbs(vec![0, 0, 1]).to_string(), "18446744073709551616");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>6}", BigNum::from(42u32)), "    42");
    }

    #[test]
    fn test_round_trip_above_threshold() {
        // 1 followed by 999 zeros needs more than DC_THRESHOLD_LIMBS limbs.
        let s = format!("1{}", "0".repeat(999));
        let n = BigNum::from_decimal(&s).unwrap();
        assert!(n.len() > DC_THRESHOLD_LIMBS);
        assert_eq!(n.to_decimal(), s);
    }

    #[test]
    fn test_dc_matches_base_case() {
        let s: String = (0..2_500).map(|i| char::from(b'1' + (i * 7 % 9) as u8)).collect();
        let n = BigNum::from_decimal(&s).unwrap();
        assert!(n.len() > 4 * DC_THRESHOLD_LIMBS);
        assert_eq!(to_decimal_base(&n), s);
        assert_eq!(n.to_decimal(), s);
    }

    #[test]
    fn test_dc_pads_low_half_with_zeros() {
        // Low half of the split is all zeros except its last digit.
        let s = format!("9{}1", "0".repeat(1_200));
        assert_eq!(BigNum::from_decimal(&s).unwrap().to_decimal(), s);
    }

    #[test]
    fn test_pow10_cache() {
        let mut cache = Pow10Cache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(0), &BigNum::one());
        assert_eq!(cache.get(19).to_decimal(), format!("1{}", "0".repeat(19)));
        // 19 -> 9 -> 4 -> 2 -> 1, plus the 0 entry
        assert_eq!(cache.len(), 6);
        let before = cache.len();
        cache.get(9);
        assert_eq!(cache.len(), before);
    }

    #[test]
    fn test_digit_estimate_is_upper_bound() {
        for limbs in 1..200 {
            let max = BigNum::from_limbs(vec![u32::MAX; limbs]);
            assert!(to_decimal_base(&max).len() <= decimal_digits_estimate(limbs));
        }
    }
}
