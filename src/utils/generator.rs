// ============================================================================
// Random Operand Generation
// ============================================================================

use super::io::save_result;
use crate::engine::CalculatorResult;
use crate::numeric::BigNum;
use rand::Rng;
use std::path::Path;

/// Random value with exactly `bits` bits (top bit set). `bits` of zero is
/// treated as one.
pub fn random_bignum<R: Rng + ?Sized>(rng: &mut R, bits: usize) -> BigNum {
    let bits = bits.max(1);
    let len = bits.div_ceil(32);
    let mut limbs = vec![0u32; len];
    rng.fill(&mut limbs[..]);

    let rem = bits % 32;
    if rem > 0 {
        limbs[len - 1] >>= 32 - rem;
    }
    let top_bit = (bits - 1) % 32;
    limbs[len - 1] |= 1 << top_bit;
    BigNum::from_limbs(limbs)
}

/// Decimal string of a random value with exactly `8 · max(size_bytes, 1)` bits.
pub fn random_decimal<R: Rng + ?Sized>(rng: &mut R, size_bytes: u32) -> String {
    let bits = size_bytes.max(1) as usize * 8;
    random_bignum(rng, bits).to_decimal()
}

/// Write two independent random operands to `path_a` and `path_b`, returning
/// their decimal strings.
///
/// # Errors
/// Returns `Io` if either file cannot be written.
pub fn generate_operand_files(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    size_bytes: u32,
) -> CalculatorResult<(String, String)> {
    let mut rng = rand::rng();
    let a = random_decimal(&mut rng, size_bytes);
    let b = random_decimal(&mut rng, size_bytes);
    save_result(path_a.as_ref(), &format!("{}\n", a))?;
    save_result(path_b.as_ref(), &format!("{}\n", b))?;
    tracing::debug!(size_bytes, "generated random operands");
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::load_operand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exact_bit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for bits in [1, 8, 31, 32, 33, 64, 100, 2048] {
            assert_eq!(random_bignum(&mut rng, bits).bits(), bits, "bits = {}", bits);
        }
        assert_eq!(random_bignum(&mut rng, 0).bits(), 1);
    }

    #[test]
    fn test_random_decimal_is_canonical() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = random_decimal(&mut rng, 16);
        assert!(crate::numeric::is_valid_decimal(&s));
        assert_eq!(BigNum::from_decimal(&s).unwrap().bits(), 128);
    }

    #[test]
    fn test_generate_operand_files() {
        let dir = tempfile::tempdir().unwrap();
        let a_path = dir.path().join("num_a.txt");
        let b_path = dir.path().join("num_b.txt");
        let (a, b) = generate_operand_files(&a_path, &b_path, 32).unwrap();
        assert_eq!(load_operand(&a_path).unwrap(), a);
        assert_eq!(load_operand(&b_path).unwrap(), b);
    }
}
