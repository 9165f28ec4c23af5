//! Graph data structures and operations
//!
//! This module contains the node, edge and graph records, the arena-backed
//! store that owns them, a lock-guarded shared wrapper and serializable
//! snapshots of the read-only views.

mod arena;

/// Graph vertex
pub mod node;
/// Connection between two nodes
pub mod edge;
/// Graph container
pub mod graph;
/// Owning store: creation, dedup, merge and removal
pub mod store;
/// Lock-guarded store for concurrent callers
pub mod shared;
/// Serializable views
pub mod snapshot;

// Re-export main graph types
pub use node::Node;
pub use edge::Edge;
pub use graph::Graph;
pub use store::GraphStore;
pub use shared::SharedGraphStore;
pub use snapshot::{EdgeSnapshot, GraphSnapshot, NodeSnapshot, StoreSnapshot};
