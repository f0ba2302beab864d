// ============================================================================
// Numeric Errors
// Error types for big-integer arithmetic and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur during big-integer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division (or remainder) by zero
    DivisionByZero,
    /// Exponent outside the supported set {1, 2, 3}
    InvalidExponent(u32),
    /// Empty string, non-digit character, or illegal leading zero
    InvalidDecimalString,
    /// Checked subtraction with a subtrahend larger than the minuend
    Underflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidExponent(exp) => {
                write!(f, "invalid exponent {}: must be 1, 2 or 3", exp)
            },
            NumericError::InvalidDecimalString => write!(
                f,
                "invalid decimal string: expected digits only without leading zeros"
            ),
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below zero")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
