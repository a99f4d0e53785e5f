use crate::ensure_node;
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::ShortestPaths;
use crate::graph::queue::IndexedMinHeap;
use crate::graph::store::Graph;
use crate::graph::types::{Edge, Weight};
use crate::logging::RunMetrics;
use crate::{log_run_metrics, trace_time};
use std::time::Instant;
use tracing::debug;

/// Single-source shortest paths over non-negative weights.
///
/// Every node starts in the queue at infinity (the start at zero). The
/// minimum is settled on each pop and its outgoing edges are relaxed,
/// lowering queued priorities in place. Nodes still at infinity when they
/// reach the front are unreachable and end the search.
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn dijkstra<W: Weight, T>(graph: &Graph<W, T>, start: usize) -> Result<ShortestPaths<W>> {
    ensure_node!(graph, start);
    if let Some(edge) = graph.first_negative_edge() {
        debug!(%edge, "negative edge rejects dijkstra");
        return Err(GraphError::NegativeWeight {
            from: edge.from,
            to: edge.to,
        });
    }

    let timer = Instant::now();
    let mut metrics = RunMetrics::new();
    let mut paths = ShortestPaths::<W>::init(graph.num_nodes(), start);
    let mut queue: IndexedMinHeap<W> = IndexedMinHeap::with_key_space(graph.num_nodes());
    for (node, &dist) in paths.distances.iter().enumerate() {
        queue.push(node, dist)?;
    }

    while let Some(item) = queue.pop_min() {
        if item.priority.is_infinite() {
            break;
        }
        metrics.record_settled();

        let u = item.key;
        for adj in graph.adj_edges(u) {
            metrics.record_scan();
            if !queue.contains(adj.to) {
                continue;
            }
            if paths.relax(&Edge::new(u, adj.to, adj.weight)) {
                metrics.record_relaxation();
                queue.decrease_priority(adj.to, paths.distances[adj.to])?;
            }
        }
    }

    log_run_metrics!(metrics, "dijkstra");
    trace_time!(timer, "dijkstra");
    Ok(paths)
}

#[cfg(test)]
mod tests;
