// ============================================================================
// Domain Models Module
// Plain data describing calculations, their results and configuration
// ============================================================================

pub mod config;
pub mod operation;
pub mod report;

pub use config::{CalculatorConfig, DEFAULT_RANDOM_OPERAND_BYTES};
pub use operation::{CalculationRequest, JobId, OperandSlot, Operation};
pub use report::{Comparison, OperationOutcome, OperationReport, Timing, Timings};
