//! Integration tests for the wgraph CLI: global flags, config, errors

mod common;

use common::{wgraph, write_graph, SIX_NODE_TOML, THREE_CYCLE_JSON};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    wgraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wgraph"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("dijkstra"))
        .stdout(predicate::str::contains("bellman-ford"))
        .stdout(predicate::str::contains("hamiltonian"));
}

#[test]
fn test_version_flag() {
    wgraph()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wgraph"));
}

#[test]
fn test_no_command_prints_banner() {
    wgraph()
        .assert()
        .success()
        .stdout(predicate::str::contains("wgraph --help"));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_unknown_format_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SIX_NODE_TOML);

    wgraph()
        .args(["--format", "yaml", "info"])
        .arg(&graph)
        .assert()
        .code(2);
}

#[test]
fn test_missing_graph_argument_json_envelope() {
    wgraph()
        .args(["--format", "json", "dijkstra"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// Data and IO errors
// ============================================================================

#[test]
fn test_missing_file_is_failure() {
    let dir = tempdir().unwrap();

    wgraph()
        .arg("info")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: IO error"));
}

#[test]
fn test_invalid_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", "{}");

    wgraph()
        .arg("info")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph file"));
}

#[test]
fn test_malformed_json_is_failure() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", "{\"edges\": [");

    wgraph()
        .arg("info")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_error_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", THREE_CYCLE_JSON);

    let output = wgraph()
        .args(["--format", "json", "topo"])
        .arg(&graph)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "cycle");
    assert_eq!(envelope["error"]["message"], "graph has a cycle");
}

#[test]
fn test_quiet_suppresses_human_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", THREE_CYCLE_JSON);

    wgraph()
        .args(["--quiet", "topo"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_start_out_of_range() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SIX_NODE_TOML);

    wgraph()
        .args(["bfs", "--start", "6"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node 6 out of range (graph has 6 nodes)"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_default_format() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SIX_NODE_TOML);
    write_graph(dir.path(), "wgraph.toml", "default_format = \"json\"\n");

    wgraph()
        .current_dir(dir.path())
        .arg("info")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nodes\": 6"));

    // An explicit flag wins over the config
    wgraph()
        .current_dir(dir.path())
        .args(["--format", "human", "info"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 6"));
}

#[test]
fn test_config_hamiltonian_limit() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SIX_NODE_TOML);
    let config = write_graph(dir.path(), "limits.toml", "max_hamiltonian_nodes = 4\n");

    wgraph()
        .arg("--config")
        .arg(&config)
        .arg("hamiltonian")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds limit of 4"));
}

#[test]
fn test_config_floyd_warshall_limit() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SIX_NODE_TOML);
    let config = write_graph(dir.path(), "limits.toml", "max_floyd_warshall_nodes = 5\n");

    wgraph()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "floyd-warshall"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("too_large"));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SIX_NODE_TOML);
    let config = write_graph(dir.path(), "limits.toml", "max_hamiltonian_nodes = 99\n");

    wgraph()
        .arg("--config")
        .arg(&config)
        .arg("info")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_hamiltonian_nodes"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SIX_NODE_TOML);

    let output = wgraph()
        .env_remove("RUST_LOG")
        .env_remove("WGRAPH_LOG")
        .args(["--verbose", "--format", "json", "topo"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["order"].is_array());
    assert!(String::from_utf8_lossy(&output.stderr).contains("load_graph"));
}
