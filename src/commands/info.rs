//! `wgraph info` command - summary of a graph file

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::yes_no;
use crate::commands::json_builders::print_json;
use wgraph_core::error::Result;
use wgraph_core::graph::algos::has_cycle;
use wgraph_core::graph::Graph;

/// Execute the info command
pub fn execute(ctx: &CommandContext, graph: &Graph<f64, f64>) -> Result<()> {
    let negative = graph.has_negative_edges();
    let cyclic = has_cycle(graph);

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": graph.num_nodes(),
                "edges": graph.num_edges(),
                "has_negative_edges": negative,
                "has_cycle": cyclic,
            });
            print_json(&output)?;
        }
        OutputFormat::Human => {
            println!("nodes: {}", graph.num_nodes());
            println!("edges: {}", graph.num_edges());
            println!("negative edges: {}", yes_no(negative));
            println!("cycle: {}", yes_no(cyclic));
            if ctx.cli.verbose && !ctx.cli.quiet {
                print!("{}", graph);
            }
        }
    }
    Ok(())
}
