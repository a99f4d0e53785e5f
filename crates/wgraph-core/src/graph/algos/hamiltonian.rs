use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::Weight;
use crate::trace_time;
use std::time::Instant;

/// Largest graph the Hamiltonian DP accepts. The table holds one `u32`
/// per subset of nodes, so 24 nodes already need 64 MiB.
pub const MAX_HAMILTONIAN_NODES: usize = 24;

/// Whether some simple directed path visits every node exactly once.
///
/// Dynamic programming over node subsets: `ends[mask]` is the set of
/// nodes at which a path covering exactly `mask` can end, encoded as a
/// bitset. Runs in `O(2^N * N)` time. An empty graph has no path.
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn has_hamiltonian_path<W: Weight, T>(graph: &Graph<W, T>) -> Result<bool> {
    let n = graph.num_nodes();
    if n > MAX_HAMILTONIAN_NODES {
        return Err(GraphError::too_large(
            "hamiltonian path search",
            n,
            MAX_HAMILTONIAN_NODES,
        ));
    }
    if n == 0 {
        return Ok(false);
    }

    let timer = Instant::now();
    // preds[j]: nodes with an edge into j, self-loops excluded
    let mut preds = vec![0u32; n];
    for edge in graph.edges() {
        if edge.from != edge.to {
            preds[edge.to] |= 1 << edge.from;
        }
    }

    let full = (1usize << n) - 1;
    let mut ends = vec![0u32; full + 1];
    for node in 0..n {
        ends[1 << node] = 1 << node;
    }

    for mask in 1..=full {
        if mask.is_power_of_two() {
            continue;
        }
        let mut reachable = 0u32;
        for node in 0..n {
            let bit = 1usize << node;
            if mask & bit != 0 && ends[mask ^ bit] & preds[node] != 0 {
                reachable |= 1 << node;
            }
        }
        ends[mask] = reachable;
    }

    trace_time!(timer, "hamiltonian_dp", states = full + 1);
    Ok(ends[full] != 0)
}
