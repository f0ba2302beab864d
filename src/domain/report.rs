// ============================================================================
// Operation Report Domain Model
// ============================================================================

use crate::numeric::CastingOutNines;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::{JobId, Operation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Timing
// ============================================================================

/// How long one phase of a calculation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Timing {
    /// The phase did not run for this operation
    #[default]
    NotApplicable,
    /// A previously parsed value was reused
    Cached,
    /// Wall-clock duration of the phase
    Measured(Duration),
}

impl Timing {
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Timing::Measured(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timing::NotApplicable => write!(f, "n/a"),
            Timing::Cached => write!(f, "cached"),
            Timing::Measured(d) => write!(f, "{:.3} ms", d.as_secs_f64() * 1000.0),
        }
    }
}

/// Per-phase timings of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timings {
    pub parse_a: Timing,
    pub parse_b: Timing,
    pub operation: Timing,
    pub to_decimal: Timing,
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of comparing operand A with operand B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Comparison {
    Less,
    Equal,
    Greater,
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

/// Decimal result of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationOutcome {
    /// Single decimal value (sum, product, power)
    Value(String),
    /// Quotient and remainder of a division
    DivRem { quotient: String, remainder: String },
    /// Primality verdict
    Primality { prime: bool },
    /// Ordering of A relative to B
    Comparison(Comparison),
}

impl OperationOutcome {
    /// Text shown to the user and written to the result file.
    pub fn render(&self) -> String {
        match self {
            OperationOutcome::Value(digits) => digits.clone(),
            OperationOutcome::DivRem {
                quotient,
                remainder,
            } => format!("Quotient:\n{}\n\nRemainder:\n{}", quotient, remainder),
            OperationOutcome::Primality { prime: true } => "The number is prime".to_string(),
            OperationOutcome::Primality { prime: false } => {
                "The number is composite (not prime)".to_string()
            },
            OperationOutcome::Comparison(Comparison::Less) => "A < B".to_string(),
            OperationOutcome::Comparison(Comparison::Equal) => "A = B".to_string(),
            OperationOutcome::Comparison(Comparison::Greater) => "A > B".to_string(),
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ============================================================================
// Report
// ============================================================================

/// Everything known about one finished calculation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationReport {
    /// Unique job identifier
    pub id: JobId,

    pub operation: Operation,

    pub outcome: OperationOutcome,

    /// Casting-out-nines check, present for additions only
    pub check: Option<CastingOutNines>,

    pub timings: Timings,

    /// File the rendered outcome was written to, if any
    pub saved_to: Option<PathBuf>,

    /// Reason the result file could not be written; the outcome stays valid
    pub save_error: Option<String>,

    pub completed_at: DateTime<Utc>,
}

impl OperationReport {
    pub fn new(
        id: JobId,
        operation: Operation,
        outcome: OperationOutcome,
        check: Option<CastingOutNines>,
        timings: Timings,
    ) -> Self {
        Self {
            id,
            operation,
            outcome,
            check,
            timings,
            saved_to: None,
            save_error: None,
            completed_at: Utc::now(),
        }
    }

    /// Rendered outcome text
    pub fn render(&self) -> String {
        self.outcome.render()
    }

    /// Serialize the whole report, timings and check included
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_divrem() {
        let outcome = OperationOutcome::DivRem {
            quotient: "14".to_string(),
            remainder: "2".to_string(),
        };
        assert_eq!(outcome.render(), "Quotient:\n14\n\nRemainder:\n2");
    }

    #[test]
    fn test_render_comparison() {
        assert_eq!(
            OperationOutcome::Comparison(Ordering::Less.into()).render(),
            "A < B"
        );
        assert_eq!(
            OperationOutcome::Comparison(Comparison::Equal).to_string(),
            "A = B"
        );
    }

    #[test]
    fn test_timing_display() {
        assert_eq!(Timing::NotApplicable.to_string(), "n/a");
        assert_eq!(Timing::Cached.to_string(), "cached");
        assert_eq!(
            Timing::Measured(Duration::from_micros(1500)).to_string(),
            "1.500 ms"
        );
        assert_eq!(Timing::Cached.as_duration(), None);
    }

    #[test]
    fn test_report_defaults() {
        let report = OperationReport::new(
            JobId::new(),
            Operation::Add,
            OperationOutcome::Value("579".to_string()),
            None,
            Timings::default(),
        );
        assert_eq!(report.render(), "579");
        assert!(report.saved_to.is_none());
        assert!(report.save_error.is_none());
        assert_eq!(report.timings.operation, Timing::NotApplicable);
    }
}
