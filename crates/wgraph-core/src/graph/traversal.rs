//! Breadth-first and depth-first traversal
//!
//! Both traversals cover the whole graph: after the component reachable
//! from `start` is exhausted they restart at the lowest-indexed unvisited
//! node, repeating until every node has been visited exactly once.

use crate::ensure_node;
use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::Weight;
use std::collections::VecDeque;

/// Breadth-first traversal from `start`, calling `visit` once per node in
/// the order nodes leave the FIFO frontier.
#[tracing::instrument(skip(graph, visit), fields(nodes = graph.num_nodes()))]
pub fn bfs<W: Weight, T>(
    graph: &Graph<W, T>,
    start: usize,
    mut visit: impl FnMut(usize),
) -> Result<()> {
    ensure_node!(graph, start);

    let mut visited = vec![false; graph.num_nodes()];
    bfs_component(graph, start, &mut visited, &mut visit);
    for node in 0..graph.num_nodes() {
        if !visited[node] {
            bfs_component(graph, node, &mut visited, &mut visit);
        }
    }
    Ok(())
}

fn bfs_component<W: Weight, T>(
    graph: &Graph<W, T>,
    start: usize,
    visited: &mut [bool],
    visit: &mut impl FnMut(usize),
) {
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visit(current);
        for adj in graph.adj_edges(current) {
            if !visited[adj.to] {
                visited[adj.to] = true;
                queue.push_back(adj.to);
            }
        }
    }
}

/// Depth-first traversal from `start`, calling `visit` in pre-order along
/// each node's outgoing edges in adjacency order.
#[tracing::instrument(skip(graph, visit), fields(nodes = graph.num_nodes()))]
pub fn dfs<W: Weight, T>(
    graph: &Graph<W, T>,
    start: usize,
    mut visit: impl FnMut(usize),
) -> Result<()> {
    ensure_node!(graph, start);

    let mut visited = vec![false; graph.num_nodes()];
    dfs_component(graph, start, &mut visited, &mut visit, &mut |_| {});
    for node in 0..graph.num_nodes() {
        if !visited[node] {
            dfs_component(graph, node, &mut visited, &mut visit, &mut |_| {});
        }
    }
    Ok(())
}

/// Iterative depth-first search of the component reachable from `start`.
///
/// `pre` fires when a node is first reached, `post` once all of its
/// successors are finished. Frames hold the index of the next adjacency
/// entry to try, which reproduces recursive descent exactly.
pub(crate) fn dfs_component<W: Weight, T>(
    graph: &Graph<W, T>,
    start: usize,
    visited: &mut [bool],
    pre: &mut impl FnMut(usize),
    post: &mut impl FnMut(usize),
) {
    visited[start] = true;
    pre(start);
    let mut stack = vec![(start, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        match graph.adj_edges(node).get(next) {
            Some(adj) => {
                frame.1 += 1;
                let to = adj.to;
                if !visited[to] {
                    visited[to] = true;
                    pre(to);
                    stack.push((to, 0));
                }
            }
            None => {
                stack.pop();
                post(node);
            }
        }
    }
}

/// Nodes in breadth-first visit order
pub fn bfs_order<W: Weight, T>(graph: &Graph<W, T>, start: usize) -> Result<Vec<usize>> {
    let mut order = Vec::with_capacity(graph.num_nodes());
    bfs(graph, start, |node| order.push(node))?;
    Ok(order)
}

/// Nodes in depth-first pre-order
pub fn dfs_order<W: Weight, T>(graph: &Graph<W, T>, start: usize) -> Result<Vec<usize>> {
    let mut order = Vec::with_capacity(graph.num_nodes());
    dfs(graph, start, |node| order.push(node))?;
    Ok(order)
}

/// Depth-first finish order over the whole graph, starting searches at
/// every unvisited node in increasing index order
pub fn dfs_postorder<W: Weight, T>(graph: &Graph<W, T>) -> Vec<usize> {
    let mut visited = vec![false; graph.num_nodes()];
    let mut finished = Vec::with_capacity(graph.num_nodes());
    let mut finish = |node: usize| finished.push(node);
    for node in 0..graph.num_nodes() {
        if !visited[node] {
            dfs_component(graph, node, &mut visited, &mut |_| {}, &mut finish);
        }
    }
    finished
}
