//! Property tests over random operation sequences

use proptest::prelude::*;
use tangle_core::{EdgeId, GraphStore, NodeId};

#[derive(Debug, Clone)]
enum Op {
    Connect(usize, usize),
    Remove(usize),
    RemoveTwice(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..16, 0usize..16).prop_map(|(a, b)| Op::Connect(a, b)),
        1 => (0usize..64).prop_map(Op::Remove),
        1 => (0usize..64).prop_map(Op::RemoveTwice),
    ]
}

/// One graph per node to start with, so connects exercise merging
fn seeded(count: usize) -> (GraphStore<usize>, Vec<NodeId>) {
    let mut store = GraphStore::new();
    let nodes = (0..count)
        .map(|i| {
            let g = store.create_graph();
            store.add_node(g, i).unwrap()
        })
        .collect();
    (store, nodes)
}

fn occurrences(haystack: &[EdgeId], needle: EdgeId) -> usize {
    haystack.iter().filter(|e| **e == needle).count()
}

proptest! {
    #[test]
    fn adjacency_stays_consistent(ops in prop::collection::vec(op(), 1..80)) {
        let (mut store, nodes) = seeded(16);
        let mut created: Vec<EdgeId> = Vec::new();

        for op in ops {
            match op {
                Op::Connect(a, b) if a != b => {
                    created.push(store.create_edge(nodes[a], nodes[b]).unwrap());
                }
                Op::Connect(..) => {}
                Op::Remove(_) | Op::RemoveTwice(_) if created.is_empty() => {}
                Op::Remove(i) => {
                    store.remove_edge(created[i % created.len()]);
                }
                Op::RemoveTwice(i) => {
                    let e = created[i % created.len()];
                    store.remove_edge(e);
                    prop_assert!(!store.remove_edge(e));
                }
            }
        }

        prop_assert!(store.check_invariants().is_ok());
        for edge in store.edges() {
            let [a, b] = edge.nodes();
            prop_assert_eq!(occurrences(store.node(a).unwrap().incident_edges(), edge.id()), 1);
            prop_assert_eq!(occurrences(store.node(b).unwrap().incident_edges(), edge.id()), 1);
            prop_assert_eq!(occurrences(store.graph(edge.graph()).unwrap().edges(), edge.id()), 1);
        }
        let total_nodes: usize = store.graphs().map(|g| g.node_count()).sum();
        prop_assert_eq!(total_nodes, 16);
    }

    #[test]
    fn connect_is_deduplicated(pairs in prop::collection::vec((0usize..8, 0usize..8), 1..40)) {
        let (mut store, nodes) = seeded(8);

        for (a, b) in pairs {
            if a == b {
                continue;
            }
            let forward = store.create_edge(nodes[a], nodes[b]).unwrap();
            let backward = store.create_edge(nodes[b], nodes[a]).unwrap();
            prop_assert_eq!(forward, backward);
            prop_assert_eq!(store.node(nodes[a]).unwrap().graph(), store.node(nodes[b]).unwrap().graph());
        }

        for edge in store.edges() {
            let [a, b] = edge.nodes();
            let parallel = store.edges().filter(|other| other.connects(a, b)).count();
            prop_assert_eq!(parallel, 1);
        }
    }

    #[test]
    fn removal_twice_equals_once(pairs in prop::collection::vec((0usize..6, 0usize..6), 1..20), pick in 0usize..20) {
        let (mut once, nodes_once) = seeded(6);
        let (mut twice, nodes_twice) = seeded(6);
        let mut edges_once = Vec::new();
        let mut edges_twice = Vec::new();

        for (a, b) in pairs {
            if a == b {
                continue;
            }
            edges_once.push(once.create_edge(nodes_once[a], nodes_once[b]).unwrap());
            edges_twice.push(twice.create_edge(nodes_twice[a], nodes_twice[b]).unwrap());
        }
        prop_assume!(!edges_once.is_empty());

        let i = pick % edges_once.len();
        once.remove_edge(edges_once[i]);
        twice.remove_edge(edges_twice[i]);
        twice.remove_edge(edges_twice[i]);

        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(once.graph_count(), twice.graph_count());
        for (a, b) in nodes_once.iter().zip(nodes_twice.iter()) {
            prop_assert_eq!(
                once.node(*a).unwrap().incident_edges(),
                twice.node(*b).unwrap().incident_edges()
            );
        }
    }
}
