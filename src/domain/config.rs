// ============================================================================
// Calculator Configuration
// File locations and generator settings around the numeric engine
// ============================================================================

use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default size of randomly generated operands, in bytes
pub const DEFAULT_RANDOM_OPERAND_BYTES: u32 = 256;

/// Configuration for a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// File operand A is loaded from / generated into
    pub operand_a_path: PathBuf,

    /// File operand B is loaded from / generated into
    pub operand_b_path: PathBuf,

    /// File the rendered result is written to
    pub output_path: PathBuf,

    /// Whether every finished calculation is written to `output_path`
    pub persist_results: bool,

    /// Size of randomly generated operands, in bytes (minimum 1)
    pub random_operand_bytes: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            operand_a_path: PathBuf::from("num_a.txt"),
            operand_b_path: PathBuf::from("num_b.txt"),
            output_path: PathBuf::from("result.txt"),
            persist_results: false,
            random_operand_bytes: DEFAULT_RANDOM_OPERAND_BYTES,
        }
    }
}

impl CalculatorConfig {
    /// Create a configuration with default paths and persistence disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set operand file paths
    pub fn with_operand_paths(mut self, a: impl Into<PathBuf>, b: impl Into<PathBuf>) -> Self {
        self.operand_a_path = a.into();
        self.operand_b_path = b.into();
        self
    }

    /// Builder method: Write every result to `path`
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self.persist_results = true;
        self
    }

    /// Builder method: Enable or disable result persistence
    pub fn with_persist_results(mut self, persist: bool) -> Self {
        self.persist_results = persist;
        self
    }

    /// Builder method: Set random operand size in bytes
    pub fn with_random_operand_bytes(mut self, bytes: u32) -> Self {
        self.random_operand_bytes = bytes;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.random_operand_bytes == 0 {
            return Err("Random operand size must be at least one byte".to_string());
        }

        if self.operand_a_path.as_os_str().is_empty() || self.operand_b_path.as_os_str().is_empty()
        {
            return Err("Operand file paths cannot be empty".to_string());
        }

        if self.persist_results && self.output_path.as_os_str().is_empty() {
            return Err("Output path cannot be empty when results are persisted".to_string());
        }

        Ok(())
    }
}
