//! Error types and handling for tangle
//!
//! This module defines all error types used throughout the system.
//! Graph operations are mostly total: the only failures are calls made with
//! handles that are no longer live, or arguments that break a precondition.

use thiserror::Error;
use crate::types::ids::{EdgeId, GraphId, NodeId};

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Result type of graph structure operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Main error type for tangle
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph operation errors
    #[error("Graph operation error: {0}")]
    Graph(#[from] GraphError),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Prometheus metrics errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

/// Graph structure errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Arguments that the operation cannot accept (self-loop, mixed stores)
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// Node handle does not resolve to a live node
    #[error("Node {0} is not live")]
    NodeNotLive(NodeId),

    /// Edge handle does not resolve to a live edge
    #[error("Edge {0} is not live")]
    EdgeNotLive(EdgeId),

    /// Graph handle was released or consumed by a merge
    #[error("Graph {0} is not live")]
    GraphNotLive(GraphId),

    /// Bookkeeping between nodes, edges and graphs disagrees
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl GraphError {
    /// Create a precondition error
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }

    /// Create an invariant error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// True for errors caused by a stale handle rather than a bad argument
    pub fn is_stale_handle(&self) -> bool {
        matches!(
            self,
            Self::NodeNotLive(_) | Self::EdgeNotLive(_) | Self::GraphNotLive(_)
        )
    }
}
