//! BigNum Property Tests
//!
//! Property-based tests for the arithmetic laws the engine must satisfy,
//! plus the documented concrete scenarios.

use bignum_engine::numeric::{casting_out_nines, is_valid_decimal, verify_add};
use bignum_engine::prelude::*;
use proptest::prelude::*;

fn decimal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,700}"]
}

fn bignum_strategy() -> impl Strategy<Value = BigNum> {
    prop::collection::vec(any::<u32>(), 1..48).prop_map(BigNum::from_limbs)
}

fn nonzero_bignum_strategy() -> impl Strategy<Value = BigNum> {
    bignum_strategy().prop_filter("divisor must be non-zero", |v| !v.is_zero())
}

/// Digit root computed directly from decimal digits
fn digit_root_of(digits: &str) -> u8 {
    let sum: u64 = digits.bytes().map(|b| u64::from(b - b'0')).sum();
    match (sum % 9, sum) {
        (_, 0) => 0,
        (0, _) => 9,
        (r, _) => r as u8,
    }
}

proptest! {
    #[test]
    fn test_decimal_round_trip(digits in decimal_strategy()) {
        let value = BigNum::from_decimal(&digits).unwrap();
        prop_assert_eq!(value.to_decimal(), digits);
    }

    #[test]
    fn test_values_are_canonical(value in bignum_strategy()) {
        let limbs = value.limbs();
        prop_assert!(!limbs.is_empty());
        prop_assert!(limbs.len() == 1 || limbs[limbs.len() - 1] != 0);
        prop_assert!(is_valid_decimal(&value.to_decimal()));
    }

    #[test]
    fn test_division_law(a in bignum_strategy(), b in nonzero_bignum_strategy()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(&(&q * &b) + &r, a);
    }

    #[test]
    fn test_sub_undoes_add(a in bignum_strategy(), b in bignum_strategy()) {
        let sum = &a + &b;
        prop_assert_eq!(&sum - &b, a.clone());
        prop_assert_eq!(sum.checked_sub(&a).unwrap(), b);
    }

    #[test]
    fn test_checked_sub_underflow(a in bignum_strategy(), b in nonzero_bignum_strategy()) {
        let larger = &a + &b;
        prop_assert_eq!(a.checked_sub(&larger), Err(NumericError::Underflow));
    }

    #[test]
    fn test_multiplication_commutativity(a in bignum_strategy(), b in bignum_strategy()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn test_left_distributivity(
        a in bignum_strategy(),
        b in bignum_strategy(),
        c in bignum_strategy()
    ) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn test_isqrt_bracket(n in bignum_strategy()) {
        let s = n.isqrt();
        let next = &s + &BigNum::one();
        prop_assert!(&s * &s <= n);
        prop_assert!(&next * &next > n);
    }

    #[test]
    fn test_pow_matches_multiplication(a in bignum_strategy()) {
        prop_assert_eq!(a.pow(1).unwrap(), a.clone());
        prop_assert_eq!(a.pow(2).unwrap(), &a * &a);
        prop_assert_eq!(a.pow(3).unwrap(), &(&a * &a) * &a);
    }

    #[test]
    fn test_digit_root_matches_digits(digits in decimal_strategy()) {
        let value = BigNum::from_decimal(&digits).unwrap();
        prop_assert_eq!(value.digit_root(), digit_root_of(&digits));
    }

    #[test]
    fn test_casting_out_nines_accepts_true_sums(a in bignum_strategy(), b in bignum_strategy()) {
        let sum = &a + &b;
        prop_assert!(verify_add(&a, &b, &sum));
        prop_assert!(casting_out_nines(&a, &b, &sum).consistent);
    }

    #[test]
    fn test_compare_matches_u128(x in any::<u128>(), y in any::<u128>()) {
        let a: BigNum = x.to_string().parse().unwrap();
        let b: BigNum = y.to_string().parse().unwrap();
        prop_assert_eq!(a.compare(&b), x.cmp(&y));
    }

    #[test]
    fn test_mul_matches_u128(x in any::<u64>(), y in any::<u64>()) {
        let product = &BigNum::from(x) * &BigNum::from(y);
        prop_assert_eq!(product.to_decimal(), (u128::from(x) * u128::from(y)).to_string());
    }

    #[test]
    fn test_divrem_matches_u128(x in any::<u128>(), y in 1u128..) {
        let a: BigNum = x.to_string().parse().unwrap();
        let b: BigNum = y.to_string().parse().unwrap();
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(q.to_decimal(), (x / y).to_string());
        prop_assert_eq!(r.to_decimal(), (x % y).to_string());
    }

    #[test]
    fn test_calculator_divrem_matches_engine(a in decimal_strategy(), b in "[1-9][0-9]{0,300}") {
        let calculator = Calculator::new(
            CalculatorConfig::default(),
            std::sync::Arc::new(NoOpEventHandler),
        ).unwrap();
        let report = calculator
            .execute(CalculationRequest::new(a.as_str(), b.as_str(), Operation::DivRem))
            .unwrap();

        let (q, r) = BigNum::from_decimal(&a)
            .unwrap()
            .div_rem(&BigNum::from_decimal(&b).unwrap())
            .unwrap();
        prop_assert_eq!(
            report.render(),
            format!("Quotient:\n{}\n\nRemainder:\n{}", q, r)
        );
    }
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_parse_two_limbs() {
    let value = BigNum::from_decimal("5000000000").unwrap();
    assert_eq!(value.limbs(), &[705032704, 1]);
}

#[test]
fn test_divrem_small() {
    let (q, r) = BigNum::from_decimal("100")
        .unwrap()
        .div_rem(&BigNum::from_decimal("7").unwrap())
        .unwrap();
    assert_eq!(q.to_decimal(), "14");
    assert_eq!(r.to_decimal(), "2");
}

#[test]
fn test_isqrt_ten() {
    assert_eq!(BigNum::from_decimal("10").unwrap().isqrt().to_decimal(), "3");
}

#[test]
fn test_small_primality() {
    assert!(BigNum::from_decimal("97").unwrap().is_prime());
    assert!(!BigNum::from_decimal("91").unwrap().is_prime());
}

#[test]
fn test_digit_roots_of_sum() {
    let a = BigNum::from_decimal("123").unwrap();
    let b = BigNum::from_decimal("456").unwrap();
    let sum = &a + &b;
    assert_eq!(sum.to_decimal(), "579");
    assert_eq!((a.digit_root(), b.digit_root(), sum.digit_root()), (6, 6, 3));
    assert!(verify_add(&a, &b, &sum));
}

#[test]
fn test_small_powers() {
    let two = BigNum::from_decimal("2").unwrap();
    assert_eq!(two.pow(3).unwrap().to_decimal(), "8");
    assert_eq!(two.pow(4), Err(NumericError::InvalidExponent(4)));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        BigNum::one().div_rem(&BigNum::zero()),
        Err(NumericError::DivisionByZero)
    );
}
