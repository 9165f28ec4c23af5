//! Graph edge implementation

use crate::types::{Direction, EdgeAttributes, EdgeId, GraphId, NodeId, Rgb};

/// Connection between two distinct nodes of the same graph
///
/// Endpoints are fixed at creation in the order they were supplied.
/// Attributes can be changed through [`crate::GraphStore::edge_mut`].
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unique edge identifier
    id: EdgeId,
    /// Endpoints, `nodes[0]` first
    nodes: [NodeId; 2],
    /// Owning graph
    graph: GraphId,
    /// Name, weight, colour and direction
    attributes: EdgeAttributes,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, nodes: [NodeId; 2], graph: GraphId, attributes: EdgeAttributes) -> Self {
        Self { id, nodes, graph, attributes }
    }

    /// Handle of this edge
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Both endpoints in creation order
    pub fn nodes(&self) -> [NodeId; 2] {
        self.nodes
    }

    /// Owning graph
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Orientation relative to `nodes()`
    pub fn direction(&self) -> Direction {
        self.attributes.direction
    }

    /// Edge name (empty by default)
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Edge weight (1 by default)
    pub fn weight(&self) -> f64 {
        self.attributes.weight
    }

    /// Display colour (black by default)
    pub fn color(&self) -> Rgb {
        self.attributes.color
    }

    /// All attributes
    pub fn attributes(&self) -> &EdgeAttributes {
        &self.attributes
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        match self.nodes {
            [a, b] if a == node => Some(b),
            [a, b] if b == node => Some(a),
            _ => None,
        }
    }

    /// True if this edge joins `a` and `b`, in either order
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        self.other(a) == Some(b)
    }

    /// Tail and head for a directed edge, `None` when undirected
    pub fn source_target(&self) -> Option<(NodeId, NodeId)> {
        let [a, b] = self.nodes;
        match self.attributes.direction {
            Direction::Forward => Some((a, b)),
            Direction::Backward => Some((b, a)),
            Direction::Undirected => None,
        }
    }

    /// Rename the edge
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.attributes.name = name.into();
    }

    /// Change the weight
    pub fn set_weight(&mut self, weight: f64) {
        self.attributes.weight = weight;
    }

    /// Change the colour
    pub fn set_color(&mut self, color: impl Into<Rgb>) {
        self.attributes.color = color.into();
    }

    /// Change the orientation
    pub fn set_direction(&mut self, direction: Direction) {
        self.attributes.direction = direction;
    }

    pub(crate) fn set_graph(&mut self, graph: GraphId) {
        self.graph = graph;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(direction: Direction) -> Edge {
        Edge::new(
            EdgeId::from_parts(0, 1),
            [NodeId::from_parts(1, 1), NodeId::from_parts(2, 1)],
            GraphId::from_parts(0, 1),
            EdgeAttributes::default().with_direction(direction),
        )
    }

    #[test]
    fn other_endpoint() {
        let e = edge(Direction::Undirected);
        let [a, b] = e.nodes();
        assert_eq!(e.other(a), Some(b));
        assert_eq!(e.other(b), Some(a));
        assert_eq!(e.other(NodeId::from_parts(9, 1)), None);
        assert!(e.connects(b, a));
    }

    #[test]
    fn source_target_follows_direction() {
        let [a, b] = edge(Direction::Forward).nodes();
        assert_eq!(edge(Direction::Forward).source_target(), Some((a, b)));
        assert_eq!(edge(Direction::Backward).source_target(), Some((b, a)));
        assert_eq!(edge(Direction::Undirected).source_target(), None);
    }
}
