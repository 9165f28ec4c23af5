//! Graph container

use crate::types::{EdgeId, GraphId, NodeId};

/// Container of record for a set of nodes and the edges between them
///
/// Membership only: the node and edge records themselves live in the
/// store's arenas. Several disconnected components may share one graph
/// after removals, since removal never splits a container.
#[derive(Debug, Clone)]
pub struct Graph {
    id: GraphId,
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
}

impl Graph {
    pub(crate) fn new(id: GraphId) -> Self {
        Self { id, nodes: Vec::new(), edges: Vec::new() }
    }

    /// Handle of this graph
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Member nodes in insertion order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Member edges in insertion order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of member nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of member edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph holds no nodes and no edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Nodes plus edges, the amount of work to move this graph in a merge
    pub(crate) fn size(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    pub(crate) fn push_node(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub(crate) fn push_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn remove_node(&mut self, node: NodeId) -> bool {
        remove_first(&mut self.nodes, node)
    }

    pub(crate) fn remove_edge(&mut self, edge: EdgeId) -> bool {
        remove_first(&mut self.edges, edge)
    }

    /// Append members taken from a consumed graph
    pub(crate) fn absorb(&mut self, nodes: Vec<NodeId>, edges: Vec<EdgeId>) {
        self.nodes.extend(nodes);
        self.edges.extend(edges);
    }

    pub(crate) fn into_members(self) -> (Vec<NodeId>, Vec<EdgeId>) {
        (self.nodes, self.edges)
    }
}

fn remove_first<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    match items.iter().position(|x| *x == item) {
        Some(pos) => {
            items.remove(pos);
            true
        }
        None => false,
    }
}
