//! Configuration for the wgraph tool
//!
//! Read from `wgraph.toml` in the working directory, or from the file
//! passed with `--config`. Every key is optional.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::algos::MAX_HAMILTONIAN_NODES;

pub use types::{Config, CONFIG_FILE_NAME};

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Find `wgraph.toml` in `dir`
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Load the explicit file if given, otherwise the discovered one,
    /// otherwise defaults. A missing explicit file is an error.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(dir) {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Reject limits the algorithms cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.max_hamiltonian_nodes > MAX_HAMILTONIAN_NODES {
            bail_invalid!(
                "max_hamiltonian_nodes",
                format!(
                    "{} (must be at most {})",
                    self.max_hamiltonian_nodes, MAX_HAMILTONIAN_NODES
                )
            );
        }
        if self.max_floyd_warshall_nodes == 0 {
            bail_invalid!("max_floyd_warshall_nodes", "0 (must be positive)");
        }
        Ok(())
    }
}
