//! Thread-safe handle over a [`GraphStore`]
//!
//! One `RwLock` guards the whole store. Every structural mutation takes the
//! write lock for its full duration, so a merge triggered by an edge request
//! is never observed half done: readers see either both graphs or the merged
//! one.

use std::sync::Arc;
use parking_lot::RwLock;

use crate::graph::store::GraphStore;
use crate::types::{EdgeAttributes, EdgeId, GraphId, GraphResult, NodeId};

/// Cloneable, shareable graph store
pub struct SharedGraphStore<N = ()> {
    inner: Arc<RwLock<GraphStore<N>>>,
}

impl<N> Clone for SharedGraphStore<N> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<N> Default for SharedGraphStore<N> {
    fn default() -> Self {
        Self::new(GraphStore::new())
    }
}

impl<N> SharedGraphStore<N> {
    /// Wrap an existing store
    pub fn new(store: GraphStore<N>) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    /// Create an empty graph
    pub fn create_graph(&self) -> GraphId {
        self.inner.write().create_graph()
    }

    /// Create a node owned by `graph`
    pub fn add_node(&self, graph: GraphId, payload: N) -> GraphResult<NodeId> {
        self.inner.write().add_node(graph, payload)
    }

    /// See [`GraphStore::create_edge`]
    pub fn create_edge(&self, n1: NodeId, n2: NodeId) -> GraphResult<EdgeId> {
        self.inner.write().create_edge(n1, n2)
    }

    /// See [`GraphStore::create_edge_with`]
    pub fn create_edge_with(&self, n1: NodeId, n2: NodeId, attributes: EdgeAttributes) -> GraphResult<EdgeId> {
        self.inner.write().create_edge_with(n1, n2, attributes)
    }

    /// See [`GraphStore::remove_edge`]
    pub fn remove_edge(&self, edge: EdgeId) -> bool {
        self.inner.write().remove_edge(edge)
    }

    /// See [`GraphStore::remove_node`]
    pub fn remove_node(&self, node: NodeId) -> Option<N> {
        self.inner.write().remove_node(node)
    }

    /// See [`GraphStore::release_graph`]
    pub fn release_graph(&self, graph: GraphId) -> bool {
        self.inner.write().release_graph(graph)
    }

    /// Run `f` against a consistent view of the store
    pub fn read<R>(&self, f: impl FnOnce(&GraphStore<N>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run several mutations as one atomic step
    pub fn write<R>(&self, f: impl FnOnce(&mut GraphStore<N>) -> R) -> R {
        f(&mut self.inner.write())
    }
}
