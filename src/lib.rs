// ============================================================================
// BigNum Engine Library
// Arbitrary-precision unsigned integers with a file-driven calculator front end
// ============================================================================

//! # BigNum Engine
//!
//! Arbitrary-precision unsigned integer arithmetic and a small calculator
//! built on top of it.
//!
//! ## Features
//!
//! - **Canonical limb representation** (base 2^32, least-significant first)
//! - **Knuth Algorithm D** long division with single-limb fast path
//! - **Divide-and-conquer decimal formatting** for large values
//! - **Newton integer square root** and trial-division primality
//! - **Casting-out-nines** verification of additions
//! - **Background execution** with one-job-at-a-time semantics
//!
//! ## Example
//!
//! ```rust
//! use bignum_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let a: BigNum = "123456789012345678901234567890".parse().unwrap();
//! let b = BigNum::from(987_654_321u32);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(&(&q * &b) + &r, a);
//!
//! let calculator =
//!     Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
//! let report = calculator
//!     .execute(CalculationRequest::new("100", "7", Operation::DivRem))
//!     .unwrap();
//! assert_eq!(report.render(), "Quotient:\n14\n\nRemainder:\n2");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculationRequest, CalculatorConfig, Comparison, JobId, OperandSlot, Operation,
        OperationOutcome, OperationReport, Timing, Timings,
    };
    pub use crate::engine::{
        BackgroundExecutor, Calculator, CalculatorError, CalculatorResult, JobHandle,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{BigNum, CastingOutNines, NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_file_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let a_path = dir.path().join("num_a.txt");
        let b_path = dir.path().join("num_b.txt");
        let out_path = dir.path().join("result.txt");
        std::fs::write(&a_path, "340282366920938463463374607431768211456\n").unwrap();
        std::fs::write(&b_path, "18446744073709551616\n").unwrap();

        let config = CalculatorConfig::new()
            .with_operand_paths(&a_path, &b_path)
            .with_output_path(&out_path);
        let calculator = Arc::new(Calculator::new(config, Arc::new(NoOpEventHandler)).unwrap());
        let (a, b) = calculator.load_operands().unwrap();

        // 2^128 / 2^64
        let executor = BackgroundExecutor::new(Arc::clone(&calculator));
        let report = executor
            .submit(CalculationRequest::new(a.clone(), b.clone(), Operation::DivRem))
            .unwrap()
            .wait()
            .unwrap();
        assert_eq!(
            report.render(),
            "Quotient:\n18446744073709551616\n\nRemainder:\n0"
        );
        assert_eq!(
            std::fs::read_to_string(&out_path).unwrap(),
            report.render()
        );

        // Both operands are cached from the division.
        let report = calculator
            .execute(CalculationRequest::new(a, b, Operation::Add))
            .unwrap();
        assert_eq!(report.timings.parse_a, Timing::Cached);
        assert_eq!(
            report.render(),
            "340282366920938463481821351505477763072"
        );
        assert!(report.check.unwrap().consistent);
    }

    #[test]
    fn test_power_of_large_operand_round_trips() {
        let calculator =
            Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        let digits = "9".repeat(400);
        let report = calculator
            .execute(CalculationRequest::new(
                digits.clone(),
                "",
                Operation::Power {
                    exponent: 2,
                    target: OperandSlot::A,
                },
            ))
            .unwrap();

        // (10^400 - 1)^2 = 10^800 - 2 * 10^400 + 1
        let expected = format!("{}8{}1", "9".repeat(399), "0".repeat(399));
        assert_eq!(report.render(), expected);

        let root = BigNum::from_decimal(&expected).unwrap().isqrt();
        assert_eq!(root.to_decimal(), digits);
    }
}
