// ============================================================================
// Long Division
// Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) over 32-bit limbs
// ============================================================================

use super::arithmetic::{shl_bits, shr_bits};
use super::bignum::{BigNum, Limbs, LIMB_BITS, LIMB_MAX};
use super::errors::{NumericError, NumericResult};
use smallvec::smallvec;
use std::cmp::Ordering;

impl BigNum {
    /// Quotient and remainder: `self = q·divisor + r` with `0 <= r < divisor`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    ///
    /// # Example
    /// ```
    /// use bignum_engine::numeric::BigNum;
    ///
    /// let (q, r) = BigNum::from(100u32).div_rem(&BigNum::from(7u32)).unwrap();
    /// assert_eq!((q.to_string(), r.to_string()), ("14".into(), "2".into()));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> NumericResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    /// `div_rem` for a divisor already known to be non-zero.
    pub(crate) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());
        match self.compare(divisor) {
            Ordering::Less => return (Self::zero(), self.clone()),
            Ordering::Equal => return (Self::one(), Self::zero()),
            Ordering::Greater => {},
        }

        let (quotient, remainder) = if divisor.len() == 1 {
            let (q, r) = div_rem_limb(self.limbs(), divisor.limbs()[0]);
            (q, smallvec![r])
        } else {
            div_rem_knuth(self.limbs(), divisor.limbs())
        };

        (Self::from_raw(quotient), Self::from_raw(remainder))
    }

    /// Checked quotient.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn checked_div(&self, divisor: &Self) -> NumericResult<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Checked remainder.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn checked_rem(&self, divisor: &Self) -> NumericResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}

/// Short division by a single non-zero limb.
pub(crate) fn div_rem_limb(dividend: &[u32], divisor: u32) -> (Limbs, u32) {
    let divisor = divisor as u64;
    let mut quotient: Limbs = smallvec![0; dividend.len()];
    let mut rem = 0u64;
    for i in (0..dividend.len()).rev() {
        let cur = (rem << LIMB_BITS) | dividend[i] as u64;
        quotient[i] = (cur / divisor) as u32;
        rem = cur % divisor;
    }
    (quotient, rem as u32)
}

/// Algorithm D. Requires `len(v) >= 2`, a non-zero top limb of `v`, and
/// `u > v`. Returns un-normalized quotient and remainder limbs.
fn div_rem_knuth(u: &[u32], v: &[u32]) -> (Limbs, Limbs) {
    let n = v.len();
    let m = u.len() - n;

    // D1: shift so the divisor's top limb has its high bit set.
    let shift = v[n - 1].leading_zeros();
    let vn = shl_bits(v, shift);
    let mut un = shl_bits(u, shift);
    debug_assert_eq!(vn[n], 0);

    let vn1 = vn[n - 1] as u64;
    let vn2 = vn[n - 2] as u64;
    let mut quotient: Limbs = smallvec![0; m + 1];

    // D2-D7
    for j in (0..=m).rev() {
        let u_hi = un[j + n] as u64;
        let u_lo = un[j + n - 1] as u64;
        let u_lo2 = un[j + n - 2] as u64;

        // D3: estimate from the top two limbs, then refine with the third.
        let numerator = (u_hi << LIMB_BITS) | u_lo;
        let mut qhat = numerator / vn1;
        let mut rhat = numerator % vn1;
        while qhat > LIMB_MAX || qhat * vn2 > ((rhat << LIMB_BITS) | u_lo2) {
            qhat -= 1;
            rhat += vn1;
            if rhat > LIMB_MAX {
                break;
            }
        }

        // D4: multiply and subtract qhat·v from the window un[j..=j+n].
        let mut borrow = 0i64;
        for i in 0..n {
            let product = qhat * vn[i] as u64;
            let t = un[i + j] as i64 - borrow - (product & LIMB_MAX) as i64;
            un[i + j] = t as u32;
            borrow = (product >> LIMB_BITS) as i64 - (t >> LIMB_BITS);
        }
        let t = un[j + n] as i64 - borrow;
        un[j + n] = t as u32;

        // D5/D6: a negative window means qhat was one too large; add back.
        quotient[j] = qhat as u32;
        if t < 0 {
            quotient[j] -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> LIMB_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
    }

    // D8: the remainder sits in the low n limbs, still shifted.
    let remainder = shr_bits(&un[..n + 1], shift);
    (quotient, remainder)
}

// ============================================================================
// Tests
// ============================================================================
