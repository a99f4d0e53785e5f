//! Shortest-path commands
//!
//! - `wgraph dijkstra` / `wgraph bellman-ford`: distances from one node,
//!   or a single path with `--to`
//! - `wgraph floyd-warshall`: all-pairs distance matrix

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::join_path;
use crate::commands::json_builders::{build_distances_json, build_matrix_json, print_json};
use wgraph_core::ensure_node;
use wgraph_core::error::{GraphError, Result};
use wgraph_core::format::{format_weight, weight_json};
use wgraph_core::graph::algos::{floyd_warshall, ShortestPaths};
use wgraph_core::graph::Graph;

/// Print single-source results, or the path to `to` when given
pub fn execute_single_source(
    ctx: &CommandContext,
    graph: &Graph<f64, f64>,
    paths: &ShortestPaths<f64>,
    to: Option<usize>,
) -> Result<()> {
    match to {
        Some(target) => output_path(ctx, graph, paths, target),
        None => output_distances(ctx, paths),
    }
}

fn output_path(
    ctx: &CommandContext,
    graph: &Graph<f64, f64>,
    paths: &ShortestPaths<f64>,
    target: usize,
) -> Result<()> {
    ensure_node!(graph, target);
    let path = paths.path_to(target);

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": paths.start,
                "target": target,
                "reachable": path.is_some(),
                "distance": weight_json(paths.distances[target]),
                "path": path,
            });
            print_json(&output)?;
        }
        OutputFormat::Human => match path {
            Some(path) => {
                println!("{}", join_path(&path));
                if !ctx.cli.quiet {
                    println!("distance: {}", format_weight(paths.distances[target]));
                }
            }
            None => println!("no path from {} to {}", paths.start, target),
        },
    }
    Ok(())
}

fn output_distances(ctx: &CommandContext, paths: &ShortestPaths<f64>) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": paths.start,
                "distances": build_distances_json(&paths.distances),
                "predecessors": paths.predecessors,
            });
            print_json(&output)?;
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("node\tdistance\tpredecessor");
            }
            for (node, (distance, pred)) in paths
                .distances
                .iter()
                .zip(&paths.predecessors)
                .enumerate()
            {
                let pred = pred.map_or_else(|| "-".to_string(), |p| p.to_string());
                println!("{}\t{}\t{}", node, format_weight(*distance), pred);
            }
        }
    }
    Ok(())
}

/// Execute the floyd-warshall command
pub fn execute_all_pairs(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    let max = ctx.config.max_floyd_warshall_nodes;
    if graph.num_nodes() > max {
        return Err(GraphError::too_large(
            "graph for floyd-warshall",
            graph.num_nodes(),
            max,
        ));
    }

    let dist = floyd_warshall(graph);
    let negative_cycle = dist.has_negative_diagonal();

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": dist.size(),
                "distances": build_matrix_json(&dist),
                "negative_cycle": negative_cycle,
            });
            print_json(&output)?;
        }
        OutputFormat::Human => {
            print!("{}", dist);
            if negative_cycle && !ctx.cli.quiet {
                eprintln!("warning: negative cycle; distances through it are not meaningful");
            }
        }
    }
    Ok(())
}
