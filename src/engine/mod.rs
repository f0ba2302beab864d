// ============================================================================
// Engine Module
// Runs calculation requests against the numeric engine
// ============================================================================

mod calculator;
mod errors;
mod executor;

pub use calculator::{sanitize_operand, Calculator};
pub use errors::{CalculatorError, CalculatorResult};
pub use executor::{BackgroundExecutor, JobHandle};

#[cfg(feature = "async")]
pub use executor::execute_async;
