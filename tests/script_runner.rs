use std::io::Write;

use tangle::{load_config, Runner, Script};
use tangle_core::{Config, Direction, GraphConfig};

fn checked_config() -> Config {
    Config {
        graph: GraphConfig { check_invariants: true, ..GraphConfig::default() },
        ..Config::default()
    }
}

fn run(json: &str) -> anyhow::Result<(Runner, tangle::Report)> {
    let script = Script::from_json(json)?;
    let mut runner = Runner::new(&checked_config());
    let report = runner.run(&script)?;
    Ok((runner, report))
}

#[test]
fn cross_graph_edge_merges_into_one_report_graph() {
    let (runner, report) = run(
        r#"{ "steps": [
            { "op": "graph", "name": "g1" },
            { "op": "graph", "name": "g2" },
            { "op": "node", "graph": "g1", "label": "A" },
            { "op": "node", "graph": "g2", "label": "B" },
            { "op": "edge", "from": "A", "to": "B", "direction": "forward", "name": "a-to-b" },
            { "op": "edge", "from": "B", "to": "A" }
        ] }"#,
    )
    .unwrap();

    assert_eq!(report.steps, 6);
    assert_eq!(report.store.graphs.len(), 1);
    let graph = &report.store.graphs[0];
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].attributes.direction, Direction::Forward);
    assert_eq!(graph.edges[0].attributes.name, "a-to-b");

    let a = runner.node("A").unwrap();
    assert_eq!(runner.store().node(a).unwrap().incident_edges(), &[graph.edges[0].id]);
}

#[test]
fn triangle_removal_keeps_container() {
    let (runner, report) = run(
        r#"{ "steps": [
            { "op": "graph", "name": "g" },
            { "op": "node", "graph": "g", "label": "A" },
            { "op": "node", "graph": "g", "label": "B" },
            { "op": "node", "graph": "g", "label": "C" },
            { "op": "edge", "from": "A", "to": "B" },
            { "op": "edge", "from": "B", "to": "C" },
            { "op": "edge", "from": "C", "to": "A" },
            { "op": "remove_edge", "from": "B", "to": "A" },
            { "op": "remove_edge", "from": "A", "to": "B" }
        ] }"#,
    )
    .unwrap();

    let graph = &report.store.graphs[0];
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.components, 1);
    assert!(runner.store().check_invariants().is_ok());
}

#[test]
fn using_a_merged_graph_name_fails_with_context() {
    let err = run(
        r#"{ "steps": [
            { "op": "graph", "name": "g1" },
            { "op": "graph", "name": "g2" },
            { "op": "node", "graph": "g1", "label": "A" },
            { "op": "node", "graph": "g2", "label": "B" },
            { "op": "node", "graph": "g2", "label": "C" },
            { "op": "edge", "from": "A", "to": "B" },
            { "op": "node", "graph": "g1", "label": "D" }
        ] }"#,
    )
    .err()
    .unwrap();

    let message = format!("{:#}", err);
    assert!(message.contains("Step 7 (node)"), "{}", message);
    assert!(message.contains("merged away"), "{}", message);
}

#[test]
fn self_loop_step_is_rejected() {
    let err = run(
        r#"{ "steps": [
            { "op": "graph", "name": "g" },
            { "op": "node", "graph": "g", "label": "A" },
            { "op": "edge", "from": "A", "to": "A" }
        ] }"#,
    )
    .err()
    .unwrap();
    assert!(format!("{:#}", err).contains("self-loop"));
}

#[test]
fn unknown_label_is_reported() {
    let err = run(r#"{ "steps": [ { "op": "remove_node", "label": "ghost" } ] }"#)
        .err()
        .unwrap();
    assert!(format!("{:#}", err).contains("Unknown node 'ghost'"));
}

#[test]
fn release_and_remove_node_steps() {
    let (runner, report) = run(
        r#"{ "steps": [
            { "op": "graph", "name": "keep" },
            { "op": "graph", "name": "drop" },
            { "op": "node", "graph": "keep", "label": "A" },
            { "op": "node", "graph": "keep", "label": "B" },
            { "op": "node", "graph": "drop", "label": "X" },
            { "op": "edge", "from": "A", "to": "B" },
            { "op": "remove_node", "label": "B" },
            { "op": "release_graph", "name": "drop" }
        ] }"#,
    )
    .unwrap();

    assert_eq!(report.store.graphs.len(), 1);
    assert_eq!(report.store.graphs[0].nodes.len(), 1);
    assert!(report.store.graphs[0].edges.is_empty());
    assert!(runner.node("X").is_err());
    assert!(runner.graph("drop").is_err());
}

#[test]
fn script_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "steps": [ {{ "op": "graph", "name": "g" }}, {{ "op": "node", "graph": "g", "label": "A" }} ] }}"#
    )
    .unwrap();

    let script = Script::from_file(file.path()).unwrap();
    let mut runner = Runner::new(&Config::default());
    let report = runner.run(&script).unwrap();
    assert_eq!(report.store.graphs[0].nodes[0].payload, "A");
}

#[test]
fn explicit_config_errors_are_not_swallowed() {
    let mut bad = tempfile::NamedTempFile::new().unwrap();
    write!(bad, "[graph]\nmerge_strategy = \"bogus\"\n").unwrap();
    let path = bad.path().to_str().unwrap();

    let err = load_config(Some(path)).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load config"), "{:#}", err);
    assert!(load_config(Some("/definitely/not/here.toml")).is_err());
}

#[test]
fn explicit_config_is_applied() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[graph]\nmerge_strategy = \"into_first\"\n[metrics]\nenable = false\n").unwrap();

    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.graph.merge_strategy, tangle_core::MergeStrategy::IntoFirst);
    assert!(!config.metrics.enable);
}
