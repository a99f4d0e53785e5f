//! Shared JSON building utilities for consistent JSON output formats

use serde::Serialize;

use wgraph_core::error::Result;
use wgraph_core::format::weight_json;
use wgraph_core::graph::{Graph, SquareMatrix};

/// Pretty-print a JSON value on stdout
pub fn print_json<S: Serialize>(value: &S) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build edges JSON array; each entry is `{from, to, weight}`
pub fn build_edges_json<T>(graph: &Graph<f64, T>) -> Vec<serde_json::Value> {
    graph
        .edges()
        .map(|e| {
            serde_json::json!({
                "from": e.from,
                "to": e.to,
                "weight": e.weight,
            })
        })
        .collect()
}

/// Distances with unreachable entries as `null`
pub fn build_distances_json(distances: &[f64]) -> Vec<serde_json::Value> {
    distances.iter().map(|d| weight_json(*d)).collect()
}

/// Matrix as an array of rows, infinite cells as `null`
pub fn build_matrix_json(matrix: &SquareMatrix<f64>) -> Vec<Vec<serde_json::Value>> {
    matrix.rows().map(build_distances_json).collect()
}
