//! Metrics collection for graph mutations
//!
//! Counters are registered in a crate-local Prometheus registry so that
//! embedding applications can scrape them without name clashes.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};
use crate::constants::METRIC_PREFIX;
use crate::types::Result;

/// Crate metrics registry
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Counters for graph structure operations
pub struct GraphMetrics {
    /// Total number of nodes created
    pub nodes_created: IntCounter,
    /// Total number of nodes removed
    pub nodes_removed: IntCounter,
    /// Total number of edges created
    pub edges_created: IntCounter,
    /// Total number of edges removed
    pub edges_removed: IntCounter,
    /// Edge requests answered with an existing edge
    pub dedup_hits: IntCounter,
    /// Total number of graph merges
    pub merges: IntCounter,
    /// Nodes moved from a consumed graph into a receiver
    pub nodes_moved: IntCounter,
}

impl GraphMetrics {
    /// Create counters and register them
    fn new() -> Result<Self> {
        Ok(Self {
            nodes_created: counter("nodes_created_total", "Total number of nodes created")?,
            nodes_removed: counter("nodes_removed_total", "Total number of nodes removed")?,
            edges_created: counter("edges_created_total", "Total number of edges created")?,
            edges_removed: counter("edges_removed_total", "Total number of edges removed")?,
            dedup_hits: counter("edge_dedup_hits_total", "Edge requests that returned an existing edge")?,
            merges: counter("graph_merges_total", "Total number of graph merges")?,
            nodes_moved: counter("merge_nodes_moved_total", "Nodes moved into a receiving graph by merges")?,
        })
    }

    /// Get the global metrics instance
    pub fn global() -> &'static GraphMetrics {
        static INSTANCE: Lazy<GraphMetrics> = Lazy::new(|| {
            GraphMetrics::new().expect("Failed to initialize metrics")
        });
        &INSTANCE
    }
}

fn counter(name: &str, help: &str) -> Result<IntCounter> {
    let counter = IntCounter::with_opts(Opts::new(name, help).namespace(METRIC_PREFIX))?;
    REGISTRY.register(Box::new(counter.clone()))?;
    Ok(counter)
}

/// Render every registered metric in the Prometheus text format
pub fn gather_text() -> Result<String> {
    // Force registration so an idle process still exports zeroes
    let _ = GraphMetrics::global();

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_exposition_lists_counters() {
        GraphMetrics::global().merges.inc();
        let text = gather_text().unwrap();
        assert!(text.contains("tangle_graph_merges_total"));
        assert!(text.contains("tangle_edges_created_total"));
    }
}
