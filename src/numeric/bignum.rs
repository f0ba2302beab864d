// ============================================================================
// Big Unsigned Integer
// Canonical little-endian limb representation and comparison
// ============================================================================

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of limbs stored inline before the buffer spills to the heap.
pub(crate) const INLINE_LIMBS: usize = 4;

/// Limb buffer. Values up to 128 bits stay on the stack.
pub(crate) type Limbs = SmallVec<[u32; INLINE_LIMBS]>;

/// Bits per limb.
pub(crate) const LIMB_BITS: u32 = 32;

/// Base of the representation (2^32) as a wide integer.
pub(crate) const LIMB_BASE: u64 = 1 << LIMB_BITS;

/// Largest limb value as a wide integer.
pub(crate) const LIMB_MAX: u64 = u32::MAX as u64;

/// Arbitrary-precision non-negative integer.
///
/// Stored as base-2^32 limbs, least-significant limb first:
/// `N = limbs[0] + limbs[1]·2^32 + limbs[2]·2^64 + ...`
///
/// The representation is always canonical: there is no trailing zero limb,
/// except that zero itself is the single limb `[0]`.
///
/// # Example
/// ```
/// use bignum_engine::numeric::BigNum;
///
/// let n = BigNum::from_decimal("5000000000").unwrap();
/// assert_eq!(n.limbs(), &[705032704, 1]);
/// assert_eq!(n.to_string(), "5000000000");
/// ```
#[derive(Clone)]
pub struct BigNum {
    limbs: Limbs,
}

/// Strip trailing zero limbs, keeping at least one limb.
#[inline]
pub(crate) fn normalize(limbs: &mut Limbs) {
    while limbs.len() > 1 && limbs[limbs.len() - 1] == 0 {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

/// Length of a limb slice ignoring trailing zero limbs (minimum 1).
#[inline]
pub(crate) fn effective_len(limbs: &[u32]) -> usize {
    let mut len = limbs.len();
    while len > 1 && limbs[len - 1] == 0 {
        len -= 1;
    }
    len.max(1)
}

/// Compare two limb slices by magnitude.
///
/// Tolerates non-canonical trailing zeros on either side.
pub(crate) fn compare_limbs(a: &[u32], b: &[u32]) -> Ordering {
    let la = effective_len(a);
    let lb = effective_len(b);
    if la != lb {
        return la.cmp(&lb);
    }
    for i in (0..la).rev() {
        let ai = a.get(i).copied().unwrap_or(0);
        let bi = b.get(i).copied().unwrap_or(0);
        match ai.cmp(&bi) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

impl BigNum {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero, represented as `[0]`.
    #[inline]
    pub fn zero() -> Self {
        Self { limbs: smallvec![0] }
    }

    /// One, represented as `[1]`.
    #[inline]
    pub fn one() -> Self {
        Self { limbs: smallvec![1] }
    }

    /// Build from little-endian limbs, normalizing the result.
    pub fn from_limbs<I: IntoIterator<Item = u32>>(limbs: I) -> Self {
        Self::from_raw(limbs.into_iter().collect())
    }

    /// Wrap a freshly computed limb buffer, re-establishing canonical form.
    #[inline]
    pub(crate) fn from_raw(mut limbs: Limbs) -> Self {
        normalize(&mut limbs);
        Self { limbs }
    }

    /// `2^exponent`.
    pub fn power_of_two(exponent: usize) -> Self {
        let word = exponent / LIMB_BITS as usize;
        let bit = exponent % LIMB_BITS as usize;
        let mut limbs: Limbs = smallvec![0; word + 1];
        limbs[word] = 1 << bit;
        Self { limbs }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Little-endian limbs of the canonical representation.
    #[inline]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Number of limbs (at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Always false; a canonical value has at least one limb.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Check if value is even.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Bit length; zero has bit length 0.
    pub fn bits(&self) -> usize {
        let top = self.limbs[self.limbs.len() - 1];
        if top == 0 {
            return 0;
        }
        (self.limbs.len() - 1) * LIMB_BITS as usize + (LIMB_BITS - top.leading_zeros()) as usize
    }

    /// Convert to `u64` if the value fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [lo] => Some(*lo as u64),
            [lo, hi] => Some(((*hi as u64) << LIMB_BITS) | *lo as u64),
            _ => None,
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare by magnitude: effective lengths first, then limbs from the most
    /// significant end.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_limbs(&self.limbs, &other.limbs)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigNum {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u32> for BigNum {
    #[inline]
    fn from(value: u32) -> Self {
        Self {
            limbs: smallvec![value],
        }
    }
}

impl From<u64> for BigNum {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_raw(smallvec![value as u32, (value >> LIMB_BITS) as u32])
    }
}

impl PartialEq for BigNum {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigNum {}

impl PartialOrd for BigNum {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigNum {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigNum {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs[..effective_len(&self.limbs)].hash(state);
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum({}, limbs={:?})", self, self.limbs.as_slice())
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal())
    }
}

impl std::str::FromStr for BigNum {
    type Err = super::NumericError;

    /// Parse a canonical decimal string (see [`BigNum::from_decimal`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigNum {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.limbs.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigNum {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let limbs = <Vec<u32> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_limbs(limbs))
    }
}

// ============================================================================
// Tests
// ============================================================================
