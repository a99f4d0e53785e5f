//! Structural commands: spanning tree, components, ordering, cycles and
//! Hamiltonian paths

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{join_nodes, yes_no};
use crate::commands::json_builders::{build_edges_json, print_json};
use crate::output_by_format_result;
use wgraph_core::error::{GraphError, Result};
use wgraph_core::graph::algos::{
    has_cycle, has_hamiltonian_path, kosaraju, prim, sorted_components, topological_sort,
    total_weight,
};
use wgraph_core::graph::Graph;

/// Execute the mst command
pub fn execute_mst(ctx: &CommandContext, graph: &Graph<f64, f64>, start: usize) -> Result<()> {
    let tree = prim(graph, start)?;
    let total = total_weight(&tree);
    let spanned = tree.num_edges() + 1;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "edges": build_edges_json(&tree),
                "total_weight": total,
                "spanned_nodes": spanned,
                "spans_all": spanned == graph.num_nodes(),
            });
            print_json(&output)?;
        }
        OutputFormat::Human => {
            for edge in tree.edges() {
                println!("{}", edge);
            }
            println!("total weight: {}", total);
            if spanned < graph.num_nodes() && !ctx.cli.quiet {
                println!(
                    "spans {} of {} nodes from {}",
                    spanned,
                    graph.num_nodes(),
                    start
                );
            }
        }
    }
    Ok(())
}

/// Execute the scc command
pub fn execute_scc(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    let components = sorted_components(kosaraju(graph));

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({
            "count": components.len(),
            "components": components,
        })),
        human => {
            for component in &components {
                println!("{}", join_nodes(component));
            }
        }
    )
}

/// Execute the topo command
pub fn execute_topo(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    let order = topological_sort(graph)?;

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({ "order": order })),
        human => {
            println!("{}", join_nodes(&order));
        }
    )
}

/// Execute the cycle command
pub fn execute_cycle(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    let cyclic = has_cycle(graph);

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({ "has_cycle": cyclic })),
        human => {
            println!("cycle: {}", yes_no(cyclic));
        }
    )
}

/// Execute the hamiltonian command
pub fn execute_hamiltonian(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    let max = ctx.config.max_hamiltonian_nodes;
    if graph.num_nodes() > max {
        return Err(GraphError::too_large(
            "graph for hamiltonian path search",
            graph.num_nodes(),
            max,
        ));
    }
    let found = has_hamiltonian_path(graph)?;

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({ "has_hamiltonian_path": found })),
        human => {
            println!("hamiltonian path: {}", yes_no(found));
        }
    )
}
