//! Serializable copies of the read-only graph views
//!
//! Snapshots are reports: they are produced from a store for display or
//! export and are never loaded back into one.

use serde::Serialize;

use crate::graph::store::GraphStore;
use crate::types::{EdgeAttributes, EdgeId, GraphId, GraphResult, NodeId};

/// One node as seen from outside the store
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot<N> {
    /// Node handle
    pub id: NodeId,
    /// Caller payload
    pub payload: N,
    /// Incident edges in attachment order
    pub incident_edges: Vec<EdgeId>,
}

/// One edge as seen from outside the store
#[derive(Debug, Clone, Serialize)]
pub struct EdgeSnapshot {
    /// Edge handle
    pub id: EdgeId,
    /// Endpoints in creation order
    pub nodes: [NodeId; 2],
    /// Name, weight, colour, direction
    #[serde(flatten)]
    pub attributes: EdgeAttributes,
}

/// One graph container and its members
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot<N> {
    /// Graph handle
    pub id: GraphId,
    /// Member nodes in insertion order
    pub nodes: Vec<NodeSnapshot<N>>,
    /// Member edges in insertion order
    pub edges: Vec<EdgeSnapshot>,
    /// Connected components inside the container
    pub components: usize,
}

/// Every live graph of a store
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot<N> {
    /// Graphs in slot order
    pub graphs: Vec<GraphSnapshot<N>>,
}

impl<N: Clone> GraphStore<N> {
    /// Copy one graph's views
    pub fn snapshot(&self, graph: GraphId) -> GraphResult<GraphSnapshot<N>> {
        let container = self.graph(graph)?;

        let nodes = container
            .nodes()
            .iter()
            .map(|&id| {
                let node = self.node(id)?;
                Ok(NodeSnapshot {
                    id,
                    payload: node.payload().clone(),
                    incident_edges: node.incident_edges().to_vec(),
                })
            })
            .collect::<GraphResult<Vec<_>>>()?;

        let edges = container
            .edges()
            .iter()
            .map(|&id| {
                let edge = self.edge(id)?;
                Ok(EdgeSnapshot { id, nodes: edge.nodes(), attributes: edge.attributes().clone() })
            })
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(GraphSnapshot { id: graph, nodes, edges, components: self.component_count(graph)? })
    }

    /// Copy every live graph's views
    pub fn snapshot_all(&self) -> GraphResult<StoreSnapshot<N>> {
        let graphs = self
            .graphs()
            .map(|g| self.snapshot(g.id()))
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(StoreSnapshot { graphs })
    }
}
