//! Graph store: dense node indices plus per-node outgoing adjacency

use crate::ensure_node;
use crate::error::Result;
use crate::graph::types::{Adjacent, Edge, Node, Weight};
use std::fmt;

/// Directed, edge-weighted graph over nodes `0..num_nodes()`.
///
/// Adjacency keeps insertion order per node. At most one edge exists per
/// ordered `(from, to)` pair: a second `add_edge` for the same pair is a
/// no-op and the first weight is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<W, T = ()> {
    nodes: Vec<Node<T>>,
    adjacency: Vec<Vec<Adjacent<W>>>,
    num_edges: usize,
}

impl<W, T> Default for Graph<W, T> {
    fn default() -> Self {
        Graph {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<W: Weight, T> Graph<W, T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with one node per payload and no edges
    pub fn with_nodes(values: impl IntoIterator<Item = T>) -> Self {
        let mut graph = Self::new();
        for value in values {
            graph.add_node(value);
        }
        graph
    }

    /// Append a node and return its index
    pub fn add_node(&mut self, value: T) -> usize {
        self.nodes.push(Node { value });
        self.adjacency.push(Vec::new());
        self.nodes.len() - 1
    }

    /// Append the edge `from -> to` unless that ordered pair already has one.
    ///
    /// Returns `Ok(true)` if the edge was inserted and `Ok(false)` if an
    /// edge `(from, to)` already existed.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool> {
        ensure_node!(self, from);
        ensure_node!(self, to);

        let adj = &mut self.adjacency[from];
        if adj.iter().any(|a| a.to == to) {
            return Ok(false);
        }
        adj.push(Adjacent { to, weight });
        self.num_edges += 1;
        Ok(true)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.nodes.len()
    }

    /// Payload of a node
    pub fn node(&self, node: usize) -> Option<&T> {
        self.nodes.get(node).map(|n| &n.value)
    }

    /// Payloads in index order
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.iter().map(|n| &n.value)
    }

    /// All edges, grouped by source node in index order
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, adj)| adj.iter().map(move |a| Edge::new(from, a.to, a.weight)))
    }

    /// Outgoing edges of `node` in insertion order (empty for unknown nodes)
    pub fn adj_edges(&self, node: usize) -> &[Adjacent<W>] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Targets of the outgoing edges of `node`
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj_edges(node).iter().map(|a| a.to)
    }

    /// First edge `from -> to`, if any
    pub fn edge(&self, from: usize, to: usize) -> Option<Edge<W>> {
        self.adj_edges(from)
            .iter()
            .find(|a| a.to == to)
            .map(|a| Edge::new(from, to, a.weight))
    }

    /// First edge with a negative weight, scanning in `edges()` order
    pub fn first_negative_edge(&self) -> Option<Edge<W>> {
        self.edges().find(|e| e.weight.is_negative())
    }

    pub fn has_negative_edges(&self) -> bool {
        self.first_negative_edge().is_some()
    }
}

impl<W: Weight, T: Default> Graph<W, T> {
    /// Create a graph with `n` default-valued nodes and no edges
    pub fn with_node_count(n: usize) -> Self {
        Self::with_nodes((0..n).map(|_| T::default()))
    }
}

impl<W: Weight, T> fmt::Display for Graph<W, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, adj) in self.adjacency.iter().enumerate() {
            let targets: Vec<String> = adj
                .iter()
                .map(|a| format!("{}({})", a.to, a.weight))
                .collect();
            writeln!(f, "{}: [{}]", node, targets.join(", "))?;
        }
        Ok(())
    }
}
