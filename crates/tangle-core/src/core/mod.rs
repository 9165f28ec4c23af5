//! Core configuration and logging

/// Application configuration
pub mod config;

/// Logging macros and subscriber setup
pub mod logging;

// Re-export commonly used items
pub use config::{Config, GraphConfig, LoggingConfig, MergeStrategy, MetricsConfig, load_config_or_default};
pub use logging::init_logging;
