//! Logging utilities
//!
//! Thin macros over `tracing` so every graph event is emitted under the
//! `tangle` target and can be filtered with `RUST_LOG=tangle=debug`.

use tracing_subscriber::EnvFilter;
use crate::core::config::LoggingConfig;

/// Info level logging - general information messages
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        tracing::info!(target: "tangle", $($arg)*);
    }};
}

/// Warning level logging - potentially problematic situations
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        tracing::warn!(target: "tangle", $($arg)*);
    }};
}

/// Error level logging - error conditions
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        tracing::error!(target: "tangle", $($arg)*);
    }};
}

/// Debug level logging - detailed information for debugging
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        tracing::debug!(target: "tangle", $($arg)*);
    }};
}

/// Trace level logging - very detailed tracing information
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        tracing::trace!(target: "tangle", $($arg)*);
    }};
}

/// Install the global fmt subscriber.
///
/// Events go to stderr so stdout stays free for command output. `RUST_LOG`
/// wins over the configured level when set. Returns `false` if a
/// subscriber was already installed (tests, embedding applications).
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
