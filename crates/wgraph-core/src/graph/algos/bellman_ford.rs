use crate::ensure_node;
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::ShortestPaths;
use crate::graph::store::Graph;
use crate::graph::types::{Edge, Weight};
use crate::logging::RunMetrics;
use crate::{log_run_metrics, trace_time};
use std::time::Instant;
use tracing::debug;

/// Single-source shortest paths over arbitrary weights.
///
/// Runs exactly `N - 1` relaxation passes over every edge, then one more
/// pass; an edge that still relaxes proves a negative cycle reachable from
/// `start` and fails the whole call.
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn bellman_ford<W: Weight, T>(graph: &Graph<W, T>, start: usize) -> Result<ShortestPaths<W>> {
    ensure_node!(graph, start);

    let timer = Instant::now();
    let mut metrics = RunMetrics::new();
    let edges: Vec<Edge<W>> = graph.edges().collect();
    let mut paths = ShortestPaths::<W>::init(graph.num_nodes(), start);

    for _ in 1..graph.num_nodes() {
        for edge in &edges {
            metrics.record_scan();
            if paths.relax(edge) {
                metrics.record_relaxation();
            }
        }
    }

    if let Some(edge) = edges.iter().find(|e| paths.improvement(e).is_some()) {
        debug!(%edge, "edge still relaxes after final pass");
        return Err(GraphError::NegativeCycle {
            from: edge.from,
            to: edge.to,
        });
    }

    log_run_metrics!(metrics, "bellman_ford");
    trace_time!(timer, "bellman_ford");
    Ok(paths)
}
