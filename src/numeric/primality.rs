// ============================================================================
// Primality
// Trial division by odd candidates up to the integer square root
// ============================================================================

use super::bignum::BigNum;
use std::time::Instant;

impl BigNum {
    /// Deterministic primality by trial division.
    ///
    /// Costs about `sqrt(n) / 2` divisions and blocks the calling thread for
    /// the whole run; there is no way to interrupt it from inside.
    pub fn is_prime(&self) -> bool {
        if let Some(small) = self.to_u64() {
            match small {
                0 | 1 => return false,
                2 | 3 => return true,
                _ => {},
            }
        }
        if self.is_even() {
            return false;
        }

        let limit = self.isqrt();
        let started = Instant::now();
        tracing::debug!(bits = self.bits(), limit_bits = limit.bits(), "primality test started");

        let two = BigNum::from(2u32);
        let mut candidate = BigNum::from(3u32);
        let mut divisions = 0u64;
        let verdict = loop {
            if candidate > limit {
                break true;
            }
            divisions += 1;
            let (_, remainder) = self.div_rem_nonzero(&candidate);
            if remainder.is_zero() {
                break false;
            }
            candidate = &candidate + &two;
        };

        tracing::debug!(
            prime = verdict,
            divisions,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "primality test finished"
        );
        verdict
    }
}

// ============================================================================
// Tests
// ============================================================================
