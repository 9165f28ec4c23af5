//! # Tangle Core
//!
//! Mutable, identity-based graphs. Nodes are added to a graph explicitly;
//! edges are requested between pairs of nodes and are deduplicated, and a
//! request between nodes of two different graphs first merges the graphs
//! into one. Removing an edge detaches it from both endpoints and from its
//! graph without ever splitting the graph.
//!
//! ```
//! use tangle_core::GraphStore;
//!
//! let mut store: GraphStore<&str> = GraphStore::new();
//! let g1 = store.create_graph();
//! let g2 = store.create_graph();
//! let a = store.add_node(g1, "a").unwrap();
//! let b = store.add_node(g2, "b").unwrap();
//!
//! let e = store.create_edge(a, b).unwrap();
//! assert_eq!(store.create_edge(b, a).unwrap(), e);
//! assert_eq!(store.node(a).unwrap().graph(), store.node(b).unwrap().graph());
//! assert_eq!(store.graph_count(), 1);
//! ```

#![warn(missing_docs)]

/// Configuration and logging
pub mod core;

/// Graph data structures
pub mod graph;

/// Metrics
pub mod system;

/// Type definitions for ids, attributes and errors
pub mod types;

/// System constants
pub mod constants;

// Re-export commonly used items
pub use crate::core::{Config, GraphConfig, MergeStrategy};
pub use crate::graph::{Edge, Graph, GraphStore, Node, SharedGraphStore};
pub use crate::types::{Direction, EdgeAttributes, EdgeId, Error, GraphError, GraphId, GraphResult, NodeId, Result, Rgb};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
