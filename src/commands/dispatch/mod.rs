//! Command dispatch logic for wgraph

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use wgraph_core::config::Config;
use wgraph_core::error::Result;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Info(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::info::execute(ctx, &graph)
            }
            Commands::Bfs { input, start } => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::traverse::execute(ctx, &graph, commands::traverse::Order::Breadth, *start)
            }
            Commands::Dfs { input, start } => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::traverse::execute(ctx, &graph, commands::traverse::Order::Depth, *start)
            }
            Commands::Dijkstra { input, start, to } => {
                let graph = ctx.load_graph(&input.graph)?;
                let paths = wgraph_core::graph::algos::dijkstra(&graph, *start)?;
                commands::paths::execute_single_source(ctx, &graph, &paths, *to)
            }
            Commands::BellmanFord { input, start, to } => {
                let graph = ctx.load_graph(&input.graph)?;
                let paths = wgraph_core::graph::algos::bellman_ford(&graph, *start)?;
                commands::paths::execute_single_source(ctx, &graph, &paths, *to)
            }
            Commands::FloydWarshall(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::paths::execute_all_pairs(ctx, &graph)
            }
            Commands::Mst { input, start } => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::structure::execute_mst(ctx, &graph, *start)
            }
            Commands::Scc(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::structure::execute_scc(ctx, &graph)
            }
            Commands::Topo(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::structure::execute_topo(ctx, &graph)
            }
            Commands::Cycle(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::structure::execute_cycle(ctx, &graph)
            }
            Commands::Hamiltonian(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::structure::execute_hamiltonian(ctx, &graph)
            }
            Commands::Transpose(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::derived::execute_transpose(ctx, &graph)
            }
            Commands::Adjacency(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::derived::execute_adjacency(ctx, &graph)
            }
            Commands::Laplacian(input) => {
                let graph = ctx.load_graph(&input.graph)?;
                commands::derived::execute_laplacian(ctx, &graph)
            }
        }
    }
}
