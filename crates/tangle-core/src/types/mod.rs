//! Type definitions for tangle
//!
//! This module contains all type definitions organized by category.

/// Identifier types
pub mod ids;
/// Edge attribute types
pub mod attributes;
/// System-wide error types
pub mod error;

// Re-export commonly used types for convenience
pub use ids::{NodeId, EdgeId, GraphId};
pub use attributes::{Direction, Rgb, EdgeAttributes};
pub use error::{Error, Result, GraphError, GraphResult};
