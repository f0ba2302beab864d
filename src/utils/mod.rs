// ============================================================================
// Utilities Module
// File helpers, random operands and tracing setup
// ============================================================================

mod io;

#[cfg(feature = "rand")]
mod generator;

#[cfg(feature = "logging")]
mod logging;

pub use io::{load_operand, save_result};

#[cfg(feature = "rand")]
pub use generator::{generate_operand_files, random_bignum, random_decimal};

#[cfg(feature = "logging")]
pub use logging::init_tracing;
