use crate::ensure_node;
use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::Weight;
use crate::log_run_metrics;
use crate::logging::RunMetrics;
use tracing::debug;

/// Prim's minimum spanning tree grown from `start`.
///
/// Only outgoing edges relax keys, so on a directed graph the tree can
/// only reach what is reachable from `start`. When no unvisited node has
/// a finite key the growth stops and the partial tree is returned;
/// symmetrize the edges first if an undirected MST is needed.
///
/// The result has the same nodes as `graph` and one edge
/// `(parent[i], i, key[i])` per tree node other than `start`.
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn prim<W: Weight, T: Clone>(graph: &Graph<W, T>, start: usize) -> Result<Graph<W, T>> {
    ensure_node!(graph, start);

    let n = graph.num_nodes();
    let mut metrics = RunMetrics::new();
    let mut keys = vec![W::INFINITY; n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    keys[start] = W::ZERO;

    let mut tree = Graph::with_nodes(graph.nodes().cloned());
    while let Some(u) = min_key(&keys, &in_tree) {
        in_tree[u] = true;
        metrics.record_settled();
        if let Some(parent) = parents[u] {
            tree.add_edge(parent, u, keys[u])?;
        }

        for adj in graph.adj_edges(u) {
            metrics.record_scan();
            if !in_tree[adj.to] && adj.weight < keys[adj.to] {
                keys[adj.to] = adj.weight;
                parents[adj.to] = Some(u);
                metrics.record_relaxation();
            }
        }
    }

    if metrics.settled < n as u64 {
        debug!(
            spanned = metrics.settled,
            nodes = n,
            "spanning tree does not reach every node"
        );
    }
    log_run_metrics!(metrics, "prim");
    Ok(tree)
}

/// Unvisited node with the smallest finite key; lowest index wins ties
fn min_key<W: Weight>(keys: &[W], in_tree: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (node, key) in keys.iter().enumerate() {
        if in_tree[node] || key.is_infinite() {
            continue;
        }
        if best.is_none_or(|b| *key < keys[b]) {
            best = Some(node);
        }
    }
    best
}

/// Sum of all edge weights of a graph, e.g. the cost of a spanning tree
pub fn total_weight<W: Weight, T>(graph: &Graph<W, T>) -> W {
    graph
        .edges()
        .fold(W::ZERO, |acc, edge| acc.path_sum(edge.weight))
}
