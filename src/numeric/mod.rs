// ============================================================================
// Numeric Module
// Arbitrary-precision unsigned integer engine
// ============================================================================
//
// This module provides:
// - BigNum: canonical base-2^32 limb vector, least-significant limb first
// - Addition, subtraction and schoolbook multiplication with 64-bit carries
// - Knuth Algorithm D long division
// - Decimal parsing and divide-and-conquer formatting
// - Small powers, Newton integer square root, trial-division primality
// - Casting-out-nines digit roots
// - NumericError: error types for the fallible operations
//
// Design principles:
// - Every operation takes immutable inputs and returns a new canonical value
// - Fallible operations return Result (no panics)
// - All intermediate products and carries use native u64/i64
// - No shared state between calls; caches are scoped to a single call

mod arithmetic;
mod bignum;
mod checksum;
mod decimal;
mod division;
mod errors;
mod primality;
mod roots;

pub use bignum::BigNum;
pub use checksum::{casting_out_nines, verify_add, CastingOutNines};
pub use decimal::{is_valid_decimal, Pow10Cache, DC_THRESHOLD_LIMBS};
pub use errors::{NumericError, NumericResult};
pub use roots::SUPPORTED_EXPONENTS;
