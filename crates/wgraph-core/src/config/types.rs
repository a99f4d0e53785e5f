//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "wgraph.toml";

/// Limits and defaults for the wgraph command-line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Largest graph accepted by the Hamiltonian path search (default 20)
    #[serde(default = "default_max_hamiltonian_nodes")]
    pub max_hamiltonian_nodes: usize,

    /// Largest graph accepted by Floyd-Warshall (default 2000)
    #[serde(default = "default_max_floyd_warshall_nodes")]
    pub max_floyd_warshall_nodes: usize,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_hamiltonian_nodes: default_max_hamiltonian_nodes(),
            max_floyd_warshall_nodes: default_max_floyd_warshall_nodes(),
            default_format: OutputFormat::default(),
        }
    }
}

fn default_max_hamiltonian_nodes() -> usize {
    20
}

fn default_max_floyd_warshall_nodes() -> usize {
    2000
}
