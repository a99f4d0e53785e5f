//! `wgraph transpose` / `wgraph adjacency` / `wgraph laplacian` commands

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::{build_edges_json, build_matrix_json, print_json};
use wgraph_core::error::Result;
use wgraph_core::graph::algos::{adjacency_matrix, laplacian, transpose};
use wgraph_core::graph::{Graph, SquareMatrix};

/// Execute the transpose command
pub fn execute_transpose(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    let reversed = transpose(graph);

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": reversed.num_nodes(),
                "edges": build_edges_json(&reversed),
            });
            print_json(&output)?;
        }
        OutputFormat::Human => {
            for edge in reversed.edges() {
                println!("{}", edge);
            }
        }
    }
    Ok(())
}

/// Execute the adjacency command
pub fn execute_adjacency(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    print_matrix(ctx, &adjacency_matrix(graph))
}

/// Execute the laplacian command
pub fn execute_laplacian(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    print_matrix(ctx, &laplacian(graph))
}

fn print_matrix(ctx: &CommandContext, matrix: &SquareMatrix<f64>) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": matrix.size(),
                "matrix": build_matrix_json(matrix),
            });
            print_json(&output)?;
        }
        OutputFormat::Human => print!("{}", matrix),
    }
    Ok(())
}
