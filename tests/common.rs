use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn wgraph() -> Command {
    cargo_bin_cmd!("wgraph")
}

/// Write `content` to `dir/name` and return the path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 0 -7-> 1, 0 -12-> 2, 1 -2-> 2, 1 -9-> 3, 2 -10-> 4, 3 -1-> 5, 4 -4-> 3, 4 -5-> 5
#[allow(dead_code)]
pub const SIX_NODE_TOML: &str = r#"
edges = [
    [0, 1, 7.0],
    [0, 2, 12.0],
    [1, 2, 2.0],
    [1, 3, 9.0],
    [2, 4, 10.0],
    [3, 5, 1.0],
    [4, 3, 4.0],
    [4, 5, 5.0],
]
"#;

/// Three-node directed cycle 0 -> 1 -> 2 -> 0
#[allow(dead_code)]
pub const THREE_CYCLE_JSON: &str = r#"{"edges": [[0, 1, 1], [1, 2, 1], [2, 0, 1]]}"#;

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
