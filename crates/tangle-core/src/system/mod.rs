//! System utilities and metrics

/// Metrics collection
pub mod metrics;

pub use metrics::{GraphMetrics, gather_text};
