//! Logging macros shared by every crate in the workspace.
//!
//! They forward to `tracing` on dedicated targets so the terminal formatter
//! can decorate them differently from plain level-based events.

/// Target used for completed-milestone messages.
pub const SUCCESS_TARGET: &str = "coulomb::success";

/// Target used for raw terminal lines (headers, separators, summaries).
pub const PRINT_TARGET: &str = "coulomb::print";

/// Logs a completed milestone, e.g. `success!("Plot saved to {}", path.display())`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
