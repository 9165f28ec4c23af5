//! Operation scripts
//!
//! A script is a JSON document listing graph operations in order. Graphs
//! and nodes are addressed by caller-chosen names so scripts can be written
//! by hand:
//!
//! ```json
//! { "steps": [
//!     { "op": "graph", "name": "left" },
//!     { "op": "node", "graph": "left", "label": "a" },
//!     { "op": "edge", "from": "a", "to": "b", "direction": "forward", "weight": 2.0 },
//!     { "op": "remove_edge", "from": "a", "to": "b" }
//! ] }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tangle_core::{Direction, EdgeAttributes, Rgb};

/// Parsed operation script
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Operations in execution order
    pub steps: Vec<Step>,
}

/// One operation
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Create an empty graph
    Graph {
        /// Name used by later steps
        name: String,
    },
    /// Add a node to a named graph
    Node {
        /// Graph name
        graph: String,
        /// Unique node label, also the node payload
        label: String,
    },
    /// Request an edge between two labelled nodes
    Edge {
        /// First endpoint
        from: String,
        /// Second endpoint
        to: String,
        /// Orientation, undirected when absent
        #[serde(default)]
        direction: Option<Direction>,
        /// Name, empty when absent
        #[serde(default)]
        name: Option<String>,
        /// Weight, 1 when absent
        #[serde(default)]
        weight: Option<f64>,
        /// `[r, g, b]`, black when absent
        #[serde(default)]
        color: Option<[u8; 3]>,
    },
    /// Remove the edge between two labelled nodes, if any
    RemoveEdge {
        /// One endpoint
        from: String,
        /// The other endpoint
        to: String,
    },
    /// Remove a labelled node and its incident edges
    RemoveNode {
        /// Node label
        label: String,
    },
    /// Destroy a named graph with all its members
    ReleaseGraph {
        /// Graph name
        name: String,
    },
}

impl Step {
    /// Short operation name for error context
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Graph { .. } => "graph",
            Step::Node { .. } => "node",
            Step::Edge { .. } => "edge",
            Step::RemoveEdge { .. } => "remove_edge",
            Step::RemoveNode { .. } => "remove_node",
            Step::ReleaseGraph { .. } => "release_graph",
        }
    }

    /// Edge attributes for an `edge` step, defaults elsewhere
    pub fn edge_attributes(&self) -> EdgeAttributes {
        let mut attributes = EdgeAttributes::default();
        if let Step::Edge { direction, name, weight, color, .. } = self {
            if let Some(direction) = direction {
                attributes = attributes.with_direction(*direction);
            }
            if let Some(name) = name {
                attributes = attributes.with_name(name.clone());
            }
            if let Some(weight) = weight {
                attributes = attributes.with_weight(*weight);
            }
            if let Some(color) = color {
                attributes = attributes.with_color(Rgb::from(*color));
            }
        }
        attributes
    }
}

impl Script {
    /// Parse a script from JSON text
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Failed to parse script")
    }

    /// Read and parse a script file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        let script = Script::from_json(
            r#"{ "steps": [
                { "op": "graph", "name": "g" },
                { "op": "node", "graph": "g", "label": "a" },
                { "op": "edge", "from": "a", "to": "b", "direction": "backward", "color": [1, 2, 3] },
                { "op": "remove_edge", "from": "a", "to": "b" },
                { "op": "remove_node", "label": "a" },
                { "op": "release_graph", "name": "g" }
            ] }"#,
        )
        .unwrap();
        let kinds: Vec<_> = script.steps.iter().map(Step::kind).collect();
        assert_eq!(kinds, ["graph", "node", "edge", "remove_edge", "remove_node", "release_graph"]);

        let attrs = script.steps[2].edge_attributes();
        assert_eq!(attrs.direction, Direction::Backward);
        assert_eq!(attrs.color, Rgb::new(1, 2, 3));
        assert_eq!(attrs.weight, 1.0);
    }

    #[test]
    fn unknown_op_is_rejected() {
        assert!(Script::from_json(r#"{ "steps": [ { "op": "split" } ] }"#).is_err());
    }
}
