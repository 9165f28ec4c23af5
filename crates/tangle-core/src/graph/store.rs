//! Arena-backed store for graphs, nodes and edges
//!
//! Every object lives in one of three arenas owned by [`GraphStore`]; the
//! records refer to each other only through generational handles. This is
//! what lets an edge request between two graphs rewrite the graph handle of
//! every moved node and edge in one pass, and what makes a removed edge's
//! handle harmless afterwards.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::config::{Config, GraphConfig, MergeStrategy};
use crate::graph::arena::Arena;
use crate::graph::edge::Edge;
use crate::graph::graph::Graph;
use crate::graph::node::Node;
use crate::system::metrics::GraphMetrics;
use crate::types::{EdgeAttributes, EdgeId, GraphError, GraphId, GraphResult, NodeId};
use crate::{log_debug, log_error, log_trace, log_warn};

/// Owner of every graph, node and edge created through it
///
/// `N` is the caller payload stored on each node.
pub struct GraphStore<N = ()> {
    graphs: Arena<Graph>,
    nodes: Arena<Node<N>>,
    edges: Arena<Edge>,
    config: GraphConfig,
    record_metrics: bool,
}

impl<N> Default for GraphStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> GraphStore<N> {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty store with the given graph settings
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            graphs: Arena::with_capacity(4),
            nodes: Arena::with_capacity(config.node_capacity),
            edges: Arena::with_capacity(config.edge_capacity),
            config,
            record_metrics: true,
        }
    }

    /// Create an empty store from the full application configuration
    pub fn from_config(config: &Config) -> Self {
        let mut store = Self::with_config(config.graph.clone());
        store.record_metrics = config.metrics.enable;
        store
    }

    /// Graph settings in effect
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Graphs and nodes
    // ------------------------------------------------------------------

    /// Create an empty graph
    pub fn create_graph(&mut self) -> GraphId {
        let (index, generation) = self
            .graphs
            .insert_with(|i, g| Graph::new(GraphId::from_parts(i, g)));
        let id = GraphId::from_parts(index, generation);
        log_debug!(graph = %id, "created graph");
        id
    }

    /// Create a node owned by `graph`
    pub fn add_node(&mut self, graph: GraphId, payload: N) -> GraphResult<NodeId> {
        if !self.is_live_graph(graph) {
            log_warn!(graph = %graph, "add_node on a graph that is not live");
            return Err(GraphError::GraphNotLive(graph));
        }

        let (index, generation) = self
            .nodes
            .insert_with(|i, g| Node::new(NodeId::from_parts(i, g), graph, payload));
        let id = NodeId::from_parts(index, generation);
        self.graph_mut(graph)?.push_node(id);

        if self.record_metrics {
            GraphMetrics::global().nodes_created.inc();
        }
        log_trace!(node = %id, graph = %graph, "added node");
        self.verify();
        Ok(id)
    }

    /// Remove a node after removing every edge incident to it.
    ///
    /// Returns the node payload, or `None` if the node was not live.
    pub fn remove_node(&mut self, node: NodeId) -> Option<N> {
        let (incident, graph) = {
            let record = self.nodes.get(node.index(), node.generation())?;
            (record.incident_edges().to_vec(), record.graph())
        };

        for edge in incident {
            self.remove_edge(edge);
        }

        let record = self.nodes.remove(node.index(), node.generation())?;
        if let Some(container) = self.graphs.get_mut(graph.index(), graph.generation()) {
            container.remove_node(node);
        }

        if self.record_metrics {
            GraphMetrics::global().nodes_removed.inc();
        }
        log_debug!(node = %node, graph = %graph, "removed node");
        self.verify();
        Some(record.into_payload())
    }

    /// Destroy a graph together with all of its nodes and edges.
    ///
    /// Returns `false` if the graph was already released or consumed by a merge.
    pub fn release_graph(&mut self, graph: GraphId) -> bool {
        let Some(container) = self.graphs.remove(graph.index(), graph.generation()) else {
            return false;
        };
        let (nodes, edges) = container.into_members();

        for edge in &edges {
            self.edges.remove(edge.index(), edge.generation());
        }
        for node in &nodes {
            self.nodes.remove(node.index(), node.generation());
        }

        log_debug!(graph = %graph, nodes = nodes.len(), edges = edges.len(), "released graph");
        self.verify();
        true
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Connect `n1` and `n2` with an undirected, unnamed, unit-weight black edge.
    ///
    /// See [`GraphStore::create_edge_with`].
    pub fn create_edge(&mut self, n1: NodeId, n2: NodeId) -> GraphResult<EdgeId> {
        self.create_edge_with(n1, n2, EdgeAttributes::default())
    }

    /// Connect `n1` and `n2`.
    ///
    /// If an edge between the two nodes already exists, in either order and
    /// with any attributes, that edge is returned and nothing changes. If
    /// the nodes live in different graphs, the graphs are merged first and
    /// the new edge belongs to the surviving one.
    ///
    /// Fails for a self-loop (`n1 == n2`) or when either node is not live.
    pub fn create_edge_with(
        &mut self,
        n1: NodeId,
        n2: NodeId,
        attributes: EdgeAttributes,
    ) -> GraphResult<EdgeId> {
        if n1 == n2 {
            log_warn!(node = %n1, "rejected self-loop edge request");
            return Err(GraphError::precondition(format!("self-loop on node {}", n1)));
        }
        let g1 = self.endpoint_graph(n1)?;
        let g2 = self.endpoint_graph(n2)?;

        if let Some(existing) = self.edge_between(n1, n2) {
            if self.record_metrics {
                GraphMetrics::global().dedup_hits.inc();
            }
            log_trace!(edge = %existing, "edge already exists");
            return Ok(existing);
        }

        let graph = if g1 == g2 {
            g1
        } else {
            let (receiver, consumed) = self.pick_receiver(g1, g2)?;
            self.merge(receiver, consumed)?;
            receiver
        };

        let (index, generation) = self
            .edges
            .insert_with(|i, g| Edge::new(EdgeId::from_parts(i, g), [n1, n2], graph, attributes));
        let id = EdgeId::from_parts(index, generation);
        self.node_mut(n1)?.attach_edge(id);
        self.node_mut(n2)?.attach_edge(id);
        self.graph_mut(graph)?.push_edge(id);

        if self.record_metrics {
            GraphMetrics::global().edges_created.inc();
        }
        log_debug!(edge = %id, from = %n1, to = %n2, graph = %graph, "created edge");
        self.verify();
        Ok(id)
    }

    /// Detach `edge` from both endpoints and from its graph.
    ///
    /// Returns `false` (and changes nothing) if the edge is not live. The
    /// graph is never split, even if this edge was its only bridge.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        let Some(record) = self.edges.remove(edge.index(), edge.generation()) else {
            log_trace!(edge = %edge, "edge already removed");
            return false;
        };

        for node in record.nodes() {
            if let Some(endpoint) = self.nodes.get_mut(node.index(), node.generation()) {
                endpoint.detach_edge(edge);
            }
        }
        let graph = record.graph();
        if let Some(container) = self.graphs.get_mut(graph.index(), graph.generation()) {
            container.remove_edge(edge);
        }

        if self.record_metrics {
            GraphMetrics::global().edges_removed.inc();
        }
        log_debug!(edge = %edge, graph = %graph, "removed edge");
        self.verify();
        true
    }

    fn endpoint_graph(&self, node: NodeId) -> GraphResult<GraphId> {
        match self.nodes.get(node.index(), node.generation()) {
            Some(record) => Ok(record.graph()),
            None => {
                log_warn!(node = %node, "rejected edge request on a node that is not live");
                Err(GraphError::precondition(format!("node {} is not live", node)))
            }
        }
    }

    /// The edge joining `a` and `b` in either order, if any
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        let na = self.nodes.get(a.index(), a.generation())?;
        let nb = self.nodes.get(b.index(), b.generation())?;
        let (scan, target) = if na.degree() <= nb.degree() { (na, b) } else { (nb, a) };

        scan.incident_edges().iter().copied().find(|e| {
            self.edges
                .get(e.index(), e.generation())
                .is_some_and(|edge| edge.other(scan.id()) == Some(target))
        })
    }

    // ------------------------------------------------------------------
    // Merge
    // ------------------------------------------------------------------

    fn pick_receiver(&self, first: GraphId, second: GraphId) -> GraphResult<(GraphId, GraphId)> {
        match self.config.merge_strategy {
            MergeStrategy::IntoFirst => Ok((first, second)),
            MergeStrategy::SmallerIntoLarger => {
                if self.graph(second)?.size() > self.graph(first)?.size() {
                    Ok((second, first))
                } else {
                    Ok((first, second))
                }
            }
        }
    }

    /// Move every node and edge of `other` into `receiver` and release `other`.
    ///
    /// Linear in the size of `other`. The `other` handle is dead afterwards.
    pub(crate) fn merge(&mut self, receiver: GraphId, other: GraphId) -> GraphResult<()> {
        if receiver == other {
            return Ok(());
        }
        if !self.is_live_graph(receiver) {
            return Err(GraphError::GraphNotLive(receiver));
        }
        let consumed = self
            .graphs
            .remove(other.index(), other.generation())
            .ok_or(GraphError::GraphNotLive(other))?;
        let (nodes, edges) = consumed.into_members();

        for node in &nodes {
            self.nodes
                .get_mut(node.index(), node.generation())
                .ok_or_else(|| GraphError::invariant(format!("graph {} listed dead node {}", other, node)))?
                .set_graph(receiver);
        }
        for edge in &edges {
            self.edges
                .get_mut(edge.index(), edge.generation())
                .ok_or_else(|| GraphError::invariant(format!("graph {} listed dead edge {}", other, edge)))?
                .set_graph(receiver);
        }

        let moved = nodes.len();
        log_debug!(receiver = %receiver, consumed = %other, nodes = moved, edges = edges.len(), "merged graphs");
        self.graph_mut(receiver)?.absorb(nodes, edges);

        if self.record_metrics {
            let metrics = GraphMetrics::global();
            metrics.merges.inc();
            metrics.nodes_moved.inc_by(moved as u64);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Look up a live graph
    pub fn graph(&self, id: GraphId) -> GraphResult<&Graph> {
        self.graphs
            .get(id.index(), id.generation())
            .ok_or(GraphError::GraphNotLive(id))
    }

    /// Look up a live node
    pub fn node(&self, id: NodeId) -> GraphResult<&Node<N>> {
        self.nodes
            .get(id.index(), id.generation())
            .ok_or(GraphError::NodeNotLive(id))
    }

    /// Look up a live edge
    pub fn edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edges
            .get(id.index(), id.generation())
            .ok_or(GraphError::EdgeNotLive(id))
    }

    /// Mutable access to an edge's attributes. Endpoints cannot be changed.
    pub fn edge_mut(&mut self, id: EdgeId) -> GraphResult<&mut Edge> {
        self.edges
            .get_mut(id.index(), id.generation())
            .ok_or(GraphError::EdgeNotLive(id))
    }

    /// Mutable access to a node's payload
    pub fn node_payload_mut(&mut self, id: NodeId) -> GraphResult<&mut N> {
        Ok(self.node_mut(id)?.payload_mut())
    }

    /// Nodes sharing an edge with `node`, in incident-edge order
    pub fn neighbors(&self, node: NodeId) -> GraphResult<Vec<NodeId>> {
        let record = self.node(node)?;
        Ok(record
            .incident_edges()
            .iter()
            .filter_map(|e| self.edges.get(e.index(), e.generation()))
            .filter_map(|edge| edge.other(node))
            .collect())
    }

    /// Live graphs in slot order
    pub fn graphs(&self) -> impl Iterator<Item = &Graph> + '_ {
        self.graphs.iter()
    }

    /// Live nodes of every graph, in slot order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> + '_ {
        self.nodes.iter()
    }

    /// Live edges of every graph, in slot order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Number of live graphs
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// Number of live nodes across all graphs
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges across all graphs
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if `id` resolves to a live graph
    pub fn is_live_graph(&self, id: GraphId) -> bool {
        self.graphs.contains(id.index(), id.generation())
    }

    /// True if `id` resolves to a live node
    pub fn is_live_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id.index(), id.generation())
    }

    /// True if `id` resolves to a live edge
    pub fn is_live_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id.index(), id.generation())
    }

    /// Connected components inside one graph container, each in discovery order.
    ///
    /// Removal never splits a graph, so a container may hold several
    /// components. This reports them without changing anything.
    pub fn components(&self, graph: GraphId) -> GraphResult<Vec<Vec<NodeId>>> {
        let container = self.graph(graph)?;
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(container.node_count());
        let mut components = Vec::new();

        for &start in container.nodes() {
            if !seen.insert(start) {
                continue;
            }
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(current) = queue.pop_front() {
                for next in self.neighbors(current)? {
                    if seen.insert(next) {
                        component.push(next);
                        queue.push_back(next);
                    }
                }
            }
            components.push(component);
        }
        Ok(components)
    }

    /// Number of connected components inside one graph container
    pub fn component_count(&self, graph: GraphId) -> GraphResult<usize> {
        Ok(self.components(graph)?.len())
    }

    // ------------------------------------------------------------------
    // Invariants
    // ------------------------------------------------------------------

    /// Walk the whole store and report the first inconsistency found
    /// between graphs, nodes and edges
    pub fn check_invariants(&self) -> GraphResult<()> {
        let mut members: HashMap<GraphId, (HashSet<NodeId>, HashSet<EdgeId>)> = HashMap::new();

        for graph in self.graphs.iter() {
            let id = graph.id();
            let mut nodes = HashSet::with_capacity(graph.node_count());
            for &node in graph.nodes() {
                if !nodes.insert(node) {
                    return Err(GraphError::invariant(format!("graph {} lists node {} twice", id, node)));
                }
                let record = self.node(node).map_err(|_| {
                    GraphError::invariant(format!("graph {} lists dead node {}", id, node))
                })?;
                if record.graph() != id {
                    return Err(GraphError::invariant(format!(
                        "node {} is listed by graph {} but points at {}", node, id, record.graph()
                    )));
                }
            }
            let mut edges = HashSet::with_capacity(graph.edge_count());
            for &edge in graph.edges() {
                if !edges.insert(edge) {
                    return Err(GraphError::invariant(format!("graph {} lists edge {} twice", id, edge)));
                }
                if !self.is_live_edge(edge) {
                    return Err(GraphError::invariant(format!("graph {} lists dead edge {}", id, edge)));
                }
            }
            members.insert(id, (nodes, edges));
        }

        for node in self.nodes.iter() {
            let id = node.id();
            let listed = members.get(&node.graph()).is_some_and(|(nodes, _)| nodes.contains(&id));
            if !listed {
                return Err(GraphError::invariant(format!("node {} missing from graph {}", id, node.graph())));
            }
            let mut incident = HashSet::with_capacity(node.degree());
            for &edge in node.incident_edges() {
                if !incident.insert(edge) {
                    return Err(GraphError::invariant(format!("node {} lists edge {} twice", id, edge)));
                }
                let record = self.edge(edge).map_err(|_| {
                    GraphError::invariant(format!("node {} lists dead edge {}", id, edge))
                })?;
                if record.other(id).is_none() {
                    return Err(GraphError::invariant(format!("node {} lists edge {} it is not an endpoint of", id, edge)));
                }
            }
        }

        for edge in self.edges.iter() {
            let id = edge.id();
            let [a, b] = edge.nodes();
            if a == b {
                return Err(GraphError::invariant(format!("edge {} is a self-loop", id)));
            }
            let listed = members.get(&edge.graph()).is_some_and(|(_, edges)| edges.contains(&id));
            if !listed {
                return Err(GraphError::invariant(format!("edge {} missing from graph {}", id, edge.graph())));
            }
            for endpoint in [a, b] {
                let record = self.node(endpoint).map_err(|_| {
                    GraphError::invariant(format!("edge {} has dead endpoint {}", id, endpoint))
                })?;
                if record.graph() != edge.graph() {
                    return Err(GraphError::invariant(format!(
                        "edge {} in graph {} has endpoint {} in graph {}", id, edge.graph(), endpoint, record.graph()
                    )));
                }
                if !record.incident_edges().contains(&id) {
                    return Err(GraphError::invariant(format!("edge {} missing from endpoint {}", id, endpoint)));
                }
            }
        }

        Ok(())
    }

    /// Fail fast on broken bookkeeping when invariant checking is enabled
    fn verify(&self) {
        if !self.config.check_invariants {
            return;
        }
        if let Err(e) = self.check_invariants() {
            log_error!("{}", e);
            panic!("graph store invariant broken: {}", e);
        }
    }

    fn graph_mut(&mut self, id: GraphId) -> GraphResult<&mut Graph> {
        self.graphs
            .get_mut(id.index(), id.generation())
            .ok_or(GraphError::GraphNotLive(id))
    }

    fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node<N>> {
        self.nodes
            .get_mut(id.index(), id.generation())
            .ok_or(GraphError::NodeNotLive(id))
    }
}
