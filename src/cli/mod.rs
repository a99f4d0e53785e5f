//! CLI argument parsing for wgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config. Every subcommand reads one graph file.

pub mod format;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_format;
pub use wgraph_core::format::OutputFormat;

/// wgraph - directed weighted graph algorithms
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to `default_format` from the config)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `wgraph_core=debug`)
    #[arg(long, global = true, env = "WGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./wgraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph file argument shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph file (.json or .toml)
    pub graph: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node and edge counts, negative edges and cycles
    Info(GraphArgs),

    /// Breadth-first visit order
    Bfs {
        #[command(flatten)]
        input: GraphArgs,

        /// Node to start from
        #[arg(long, short, default_value_t = 0)]
        start: usize,
    },

    /// Depth-first visit order
    Dfs {
        #[command(flatten)]
        input: GraphArgs,

        /// Node to start from
        #[arg(long, short, default_value_t = 0)]
        start: usize,
    },

    /// Single-source shortest paths (non-negative weights)
    Dijkstra {
        #[command(flatten)]
        input: GraphArgs,

        /// Source node
        #[arg(long, short, default_value_t = 0)]
        start: usize,

        /// Print the path to this node
        #[arg(long, short)]
        to: Option<usize>,
    },

    /// Single-source shortest paths with negative weights
    BellmanFord {
        #[command(flatten)]
        input: GraphArgs,

        /// Source node
        #[arg(long, short, default_value_t = 0)]
        start: usize,

        /// Print the path to this node
        #[arg(long, short)]
        to: Option<usize>,
    },

    /// All-pairs shortest distances
    FloydWarshall(GraphArgs),

    /// Minimum spanning tree (Prim)
    Mst {
        #[command(flatten)]
        input: GraphArgs,

        /// Root of the tree
        #[arg(long, short, default_value_t = 0)]
        start: usize,
    },

    /// Strongly connected components (Kosaraju)
    Scc(GraphArgs),

    /// Topological order
    Topo(GraphArgs),

    /// Check for a directed cycle
    Cycle(GraphArgs),

    /// Check for a Hamiltonian path
    Hamiltonian(GraphArgs),

    /// Reverse every edge
    Transpose(GraphArgs),

    /// Weighted adjacency matrix (0 = no edge)
    Adjacency(GraphArgs),

    /// Laplacian matrix
    Laplacian(GraphArgs),
}
