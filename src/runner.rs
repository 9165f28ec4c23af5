//! Replays a [`Script`] against a graph store

use std::collections::HashMap;

use anyhow::{bail, Context};
use serde::Serialize;
use tangle_core::graph::StoreSnapshot;
use tangle_core::{Config, GraphId, GraphStore, NodeId};
use tracing::{debug, info};

use crate::script::{Script, Step};

/// Script interpreter holding the name tables for graphs and nodes
pub struct Runner {
    store: GraphStore<String>,
    graphs: HashMap<String, GraphId>,
    nodes: HashMap<String, NodeId>,
}

/// Outcome of a replay
#[derive(Debug, Serialize)]
pub struct Report {
    /// Steps executed
    pub steps: usize,
    /// Live graphs, nodes and edges
    pub store: StoreSnapshot<String>,
}

impl Runner {
    /// Create a runner over an empty store
    pub fn new(config: &Config) -> Self {
        Self {
            store: GraphStore::from_config(config),
            graphs: HashMap::new(),
            nodes: HashMap::new(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &GraphStore<String> {
        &self.store
    }

    /// Node handle for a label
    pub fn node(&self, label: &str) -> anyhow::Result<NodeId> {
        self.nodes
            .get(label)
            .copied()
            .with_context(|| format!("Unknown node '{}'", label))
    }

    /// Graph handle for a name
    pub fn graph(&self, name: &str) -> anyhow::Result<GraphId> {
        self.graphs
            .get(name)
            .copied()
            .with_context(|| format!("Unknown graph '{}'", name))
    }

    /// Execute every step in order, stopping at the first failure
    pub fn run(&mut self, script: &Script) -> anyhow::Result<Report> {
        for (i, step) in script.steps.iter().enumerate() {
            self.apply(step)
                .with_context(|| format!("Step {} ({}) failed", i + 1, step.kind()))?;
        }
        info!(
            steps = script.steps.len(),
            graphs = self.store.graph_count(),
            nodes = self.store.node_count(),
            edges = self.store.edge_count(),
            "script replayed"
        );
        self.report(script.steps.len())
    }

    /// Execute one step
    pub fn apply(&mut self, step: &Step) -> anyhow::Result<()> {
        match step {
            Step::Graph { name } => {
                if self.graphs.contains_key(name) {
                    bail!("Graph '{}' already defined", name);
                }
                let id = self.store.create_graph();
                self.graphs.insert(name.clone(), id);
            }
            Step::Node { graph, label } => {
                if self.nodes.contains_key(label) {
                    bail!("Node '{}' already defined", label);
                }
                let graph_id = self.graph(graph)?;
                let id = self
                    .store
                    .add_node(graph_id, label.clone())
                    .with_context(|| format!("Graph '{}' was merged away or released", graph))?;
                self.nodes.insert(label.clone(), id);
            }
            Step::Edge { from, to, .. } => {
                let (a, b) = (self.node(from)?, self.node(to)?);
                let edge = self.store.create_edge_with(a, b, step.edge_attributes())?;
                debug!(%edge, from = %from, to = %to, "edge step");
            }
            Step::RemoveEdge { from, to } => {
                let (a, b) = (self.node(from)?, self.node(to)?);
                match self.store.edge_between(a, b) {
                    Some(edge) => {
                        self.store.remove_edge(edge);
                    }
                    None => debug!(from = %from, to = %to, "no edge to remove"),
                }
            }
            Step::RemoveNode { label } => {
                let id = self.node(label)?;
                self.store.remove_node(id);
                self.nodes.remove(label);
            }
            Step::ReleaseGraph { name } => {
                let id = self.graph(name)?;
                if !self.store.release_graph(id) {
                    bail!("Graph '{}' was merged away or already released", name);
                }
                self.graphs.remove(name);
                let store = &self.store;
                self.nodes.retain(|_, node| store.is_live_node(*node));
            }
        }
        Ok(())
    }

    /// Snapshot of every live graph
    pub fn report(&self, steps: usize) -> anyhow::Result<Report> {
        Ok(Report { steps, store: self.store.snapshot_all()? })
    }
}
