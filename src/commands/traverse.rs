//! `wgraph bfs` / `wgraph dfs` commands - visit order

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::join_nodes;
use crate::commands::json_builders::print_json;
use crate::output_by_format_result;
use wgraph_core::error::Result;
use wgraph_core::graph::{bfs_order, dfs_order, Graph};

/// Which traversal to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Breadth,
    Depth,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::Breadth => "bfs",
            Order::Depth => "dfs",
        }
    }
}

/// Execute a traversal command
pub fn execute(
    ctx: &CommandContext,
    graph: &Graph<f64, f64>,
    order: Order,
    start: usize,
) -> Result<()> {
    let visited = match order {
        Order::Breadth => bfs_order(graph, start)?,
        Order::Depth => dfs_order(graph, start)?,
    };

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({
            "traversal": order.name(),
            "start": start,
            "order": visited,
        })),
        human => {
            println!("{}", join_nodes(&visited));
        }
    )
}
