// ============================================================================
// Operand and Result Files
// ============================================================================

use crate::engine::{CalculatorError, CalculatorResult};
use crate::numeric::is_valid_decimal;
use std::fs;
use std::path::Path;

/// Read an operand from the first non-blank line of a text file.
///
/// The line is trimmed and must be a canonical decimal.
///
/// # Errors
/// Returns `Io` if the file cannot be read, has no non-blank line, or the
/// line is not a valid decimal.
pub fn load_operand(path: impl AsRef<Path>) -> CalculatorResult<String> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).map_err(|e| CalculatorError::io(path, e.to_string()))?;

    let line = contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| CalculatorError::io(path, "file is empty or holds no number"))?;

    if !is_valid_decimal(line) {
        return Err(CalculatorError::io(path, "file holds an invalid number"));
    }
    Ok(line.to_string())
}

/// Write rendered result text, replacing any existing file.
///
/// # Errors
/// Returns `Io` if the file cannot be created or written.
pub fn save_result(path: impl AsRef<Path>, text: &str) -> CalculatorResult<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|e| CalculatorError::io(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_first_non_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("num_a.txt");
        fs::write(&path, "\n   \n  12345678901234567890 \r\n999\n").unwrap();
        assert_eq!(load_operand(&path).unwrap(), "12345678901234567890");
    }

    #[test]
    fn test_load_rejects_invalid_and_empty() {
        let dir = tempfile::tempdir().unwrap();

        let invalid = dir.path().join("invalid.txt");
        fs::write(&invalid, "0042\n").unwrap();
        assert!(matches!(load_operand(&invalid), Err(CalculatorError::Io { .. })));

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "\n\n").unwrap();
        assert!(matches!(load_operand(&empty), Err(CalculatorError::Io { .. })));

        let missing = dir.path().join("missing.txt");
        assert!(matches!(load_operand(&missing), Err(CalculatorError::Io { .. })));
    }

    #[test]
    fn test_save_result_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        save_result(&path, "Quotient:\n14\n\nRemainder:\n2").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Quotient:\n14\n\nRemainder:\n2"
        );
    }

    #[test]
    fn test_save_result_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("result.txt");
        assert!(save_result(&path, "1").is_err());
    }
}
