// ============================================================================
// Calculator Errors
// Failures around the numeric engine: input, files and worker threads
// ============================================================================

use crate::domain::OperandSlot;
use crate::numeric::NumericError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors reported by the calculator, file helpers and background executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The engine rejected the operation
    Numeric(NumericError),
    /// Operand has no digits after sanitizing
    EmptyOperand(OperandSlot),
    /// Operand digits are not a canonical decimal (leading zero)
    InvalidOperand(OperandSlot),
    /// File could not be read or written, or holds no valid number
    Io { path: PathBuf, message: String },
    /// Invalid calculator configuration
    Config(String),
    /// A background job is already running
    Busy,
    /// Worker thread ended without delivering a result
    WorkerLost,
}

impl CalculatorError {
    pub(crate) fn io(path: &Path, message: impl Into<String>) -> Self {
        CalculatorError::Io {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::Numeric(err) => write!(f, "{}", err),
            CalculatorError::EmptyOperand(slot) => write!(f, "operand {} is empty", slot),
            CalculatorError::InvalidOperand(slot) => write!(
                f,
                "operand {} contains invalid characters or leading zeros",
                slot
            ),
            CalculatorError::Io { path, message } => {
                write!(f, "{}: {}", path.display(), message)
            },
            CalculatorError::Config(reason) => write!(f, "invalid configuration: {}", reason),
            CalculatorError::Busy => write!(f, "a calculation is already running"),
            CalculatorError::WorkerLost => {
                write!(f, "worker thread stopped without producing a result")
            },
        }
    }
}

impl std::error::Error for CalculatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculatorError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for CalculatorError {
    fn from(err: NumericError) -> Self {
        CalculatorError::Numeric(err)
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalculatorError::from(NumericError::DivisionByZero).to_string(),
            "division by zero"
        );
        assert_eq!(
            CalculatorError::EmptyOperand(OperandSlot::B).to_string(),
            "operand B is empty"
        );
        assert_eq!(
            CalculatorError::io(Path::new("num_a.txt"), "file is empty").to_string(),
            "num_a.txt: file is empty"
        );
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let err = CalculatorError::Numeric(NumericError::InvalidExponent(7));
        assert!(err.source().is_some());
        assert!(CalculatorError::Busy.source().is_none());
    }
}
