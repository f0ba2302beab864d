// ============================================================================
// Limb Arithmetic
// Carry/borrow propagation, schoolbook multiplication and bit shifts
// ============================================================================

use super::bignum::{BigNum, Limbs, LIMB_BITS};
use super::errors::{NumericError, NumericResult};
use smallvec::smallvec;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

// ============================================================================
// Slice Kernels
// ============================================================================

/// `a + b` with a 64-bit carry, one extra limb reserved for the final carry.
pub(crate) fn add_limbs(a: &[u32], b: &[u32]) -> Limbs {
    let n = a.len().max(b.len());
    let mut result: Limbs = smallvec![0; n + 1];
    let mut carry = 0u64;
    for (i, slot) in result.iter_mut().take(n).enumerate() {
        let av = a.get(i).copied().unwrap_or(0) as u64;
        let bv = b.get(i).copied().unwrap_or(0) as u64;
        let sum = av + bv + carry;
        *slot = sum as u32;
        carry = sum >> LIMB_BITS;
    }
    result[n] = carry as u32;
    result
}

/// `a - b` with a signed borrow. Requires `a >= b`; otherwise the final
/// borrow is dropped and the result wraps modulo `2^(32·len(a))`.
pub(crate) fn sub_limbs(a: &[u32], b: &[u32]) -> Limbs {
    let mut result: Limbs = smallvec![0; a.len()];
    let mut borrow = 0i64;
    for (i, slot) in result.iter_mut().enumerate() {
        let av = a[i] as i64;
        let bv = b.get(i).copied().unwrap_or(0) as i64;
        let mut diff = av - bv - borrow;
        if diff < 0 {
            diff += 1i64 << LIMB_BITS;
            borrow = 1;
        } else {
            borrow = 0;
        }
        *slot = diff as u32;
    }
    result
}

/// Schoolbook product, O(len(a)·len(b)).
pub(crate) fn mul_limbs(a: &[u32], b: &[u32]) -> Limbs {
    let mut result: Limbs = smallvec![0; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let cur = ai as u64 * bj as u64 + result[i + j] as u64 + carry;
            result[i + j] = cur as u32;
            carry = cur >> LIMB_BITS;
        }
        // No earlier row reaches index i + len(b), so the carry is stored directly.
        result[i + b.len()] = carry as u32;
    }
    result
}

/// Shift left by `shift` bits (`shift < 32`), appending one headroom limb.
pub(crate) fn shl_bits(limbs: &[u32], shift: u32) -> Limbs {
    let mut result: Limbs = smallvec![0; limbs.len() + 1];
    if shift == 0 {
        result[..limbs.len()].copy_from_slice(limbs);
        return result;
    }
    let mut carry = 0u32;
    for (i, &limb) in limbs.iter().enumerate() {
        result[i] = (limb << shift) | carry;
        carry = limb >> (LIMB_BITS - shift);
    }
    result[limbs.len()] = carry;
    result
}

/// Shift right by `shift` bits (`shift < 32`).
pub(crate) fn shr_bits(limbs: &[u32], shift: u32) -> Limbs {
    let mut result: Limbs = limbs.iter().copied().collect();
    if shift == 0 {
        return result;
    }
    let n = result.len();
    for i in 0..n {
        let high = if i + 1 < n {
            limbs[i + 1] << (LIMB_BITS - shift)
        } else {
            0
        };
        result[i] = (limbs[i] >> shift) | high;
    }
    result
}

// ============================================================================
// BigNum Operations
// ============================================================================

impl BigNum {
    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Underflow` if `rhs > self`.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        if self.compare(rhs) == Ordering::Less {
            return Err(NumericError::Underflow);
        }
        Ok(Self::from_raw(sub_limbs(self.limbs(), rhs.limbs())))
    }

    /// Halve, rounding down.
    pub fn shr_one(&self) -> Self {
        Self::from_raw(shr_bits(self.limbs(), 1))
    }
}

fn add_impl(a: &BigNum, b: &BigNum) -> BigNum {
    BigNum::from_raw(add_limbs(a.limbs(), b.limbs()))
}

/// Unchecked: the caller guarantees `a >= b`.
fn sub_impl(a: &BigNum, b: &BigNum) -> BigNum {
    BigNum::from_raw(sub_limbs(a.limbs(), b.limbs()))
}

fn mul_impl(a: &BigNum, b: &BigNum) -> BigNum {
    if a.is_zero() || b.is_zero() {
        return BigNum::zero();
    }
    BigNum::from_raw(mul_limbs(a.limbs(), b.limbs()))
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp<&BigNum> for &BigNum {
            type Output = BigNum;

            #[inline]
            fn $method(self, rhs: &BigNum) -> BigNum {
                $func(self, rhs)
            }
        }

        impl $imp<BigNum> for &BigNum {
            type Output = BigNum;

            #[inline]
            fn $method(self, rhs: BigNum) -> BigNum {
                $func(self, &rhs)
            }
        }

        impl $imp<&BigNum> for BigNum {
            type Output = BigNum;

            #[inline]
            fn $method(self, rhs: &BigNum) -> BigNum {
                $func(&self, rhs)
            }
        }

        impl $imp<BigNum> for BigNum {
            type Output = BigNum;

            #[inline]
            fn $method(self, rhs: BigNum) -> BigNum {
                $func(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_impl);
forward_binop!(Mul, mul, mul_impl);

// Subtraction does not check `lhs >= rhs`; use `checked_sub` when the
// ordering is not already known.
forward_binop!(Sub, sub, sub_impl);

// ============================================================================
// Tests
// ============================================================================
