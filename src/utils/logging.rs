// ============================================================================
// Tracing Setup
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber writing to stderr at `max_level`.
///
/// Returns false if a global subscriber was already set.
pub fn init_tracing(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
