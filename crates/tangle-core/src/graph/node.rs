//! Graph node implementation

use crate::types::{EdgeId, GraphId, NodeId};

/// Graph vertex
///
/// Owned by the store's node arena; holds handles to its graph and to the
/// edges incident to it, never the objects themselves.
#[derive(Debug, Clone)]
pub struct Node<N = ()> {
    /// Unique node identifier
    id: NodeId,
    /// Graph this node belongs to
    graph: GraphId,
    /// Incident edges in attachment order
    edges: Vec<EdgeId>,
    /// Caller payload
    payload: N,
}

impl<N> Node<N> {
    pub(crate) fn new(id: NodeId, graph: GraphId, payload: N) -> Self {
        Self { id, graph, edges: Vec::new(), payload }
    }

    /// Handle of this node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Owning graph
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Incident edges, in the order they were attached
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of incident edges
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Caller payload
    pub fn payload(&self) -> &N {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut N {
        &mut self.payload
    }

    pub(crate) fn attach_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    /// Remove `edge` from the incident list. Absent edges are a no-op.
    pub(crate) fn detach_edge(&mut self, edge: EdgeId) -> bool {
        match self.edges.iter().position(|e| *e == edge) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_graph(&mut self, graph: GraphId) {
        self.graph = graph;
    }

    pub(crate) fn into_payload(self) -> N {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> Node<&'static str> {
        Node::new(NodeId::from_parts(0, 1), GraphId::from_parts(0, 1), "a")
    }

    #[test]
    fn attach_then_detach() {
        let mut n = node();
        let e1 = EdgeId::from_parts(0, 1);
        let e2 = EdgeId::from_parts(1, 1);
        n.attach_edge(e1);
        n.attach_edge(e2);
        assert_eq!(n.incident_edges(), &[e1, e2]);
        assert!(n.detach_edge(e1));
        assert_eq!(n.incident_edges(), &[e2]);
    }

    #[test]
    fn detach_unknown_edge_is_noop() {
        let mut n = node();
        n.attach_edge(EdgeId::from_parts(0, 1));
        assert!(!n.detach_edge(EdgeId::from_parts(0, 2)));
        assert_eq!(n.degree(), 1);
    }
}
