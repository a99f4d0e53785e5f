use crate::graph::algos::derived::transpose_structure;
use crate::graph::store::Graph;
use crate::graph::traversal::{dfs_component, dfs_postorder};
use crate::graph::types::Weight;
use tracing::debug;

/// Strongly connected components (Kosaraju).
///
/// Nodes are stacked in DFS finish order, then popped and explored on the
/// transposed graph; each exploration from a fresh node collects exactly
/// one component. Components come back in discovery order, members in
/// DFS order; together they partition the node set.
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn kosaraju<W: Weight, T>(graph: &Graph<W, T>) -> Vec<Vec<usize>> {
    let mut stack = dfs_postorder(graph);
    let transposed = transpose_structure(graph);

    let mut visited = vec![false; graph.num_nodes()];
    let mut components = Vec::new();
    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        let mut component = Vec::new();
        dfs_component(
            &transposed,
            node,
            &mut visited,
            &mut |n| component.push(n),
            &mut |_| {},
        );
        components.push(component);
    }

    debug!(components = components.len(), "kosaraju");
    components
}

/// Components with members sorted and the list ordered by smallest member
pub fn sorted_components(mut components: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    for component in &mut components {
        component.sort_unstable();
    }
    components.sort_by_key(|c| c.first().copied());
    components
}
