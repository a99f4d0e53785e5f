//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use wgraph_core::config::Config;
use wgraph_core::error::Result;
use wgraph_core::graph::Graph;
use wgraph_core::graph_file;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Load the graph file named on the command line
    pub fn load_graph(&self, path: &Path) -> Result<Graph<f64, f64>> {
        let graph = graph_file::load_graph(path)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "load_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Directed weighted graph algorithms.");
        println!();
        println!("Run `wgraph --help` for usage information.");
        Ok(())
    }
}
