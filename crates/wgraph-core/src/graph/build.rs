//! Graph construction from flat adjacency matrices, edge lists and
//! adjacency-list maps

use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{Edge, Weight};
use std::collections::BTreeMap;
use tracing::debug;

/// Adjacency-list input: source node -> `(target, weight)` pairs
pub type AdjacencyList<W> = BTreeMap<usize, Vec<(usize, W)>>;

impl<W: Weight, T> Graph<W, T> {
    /// Build an `n`-node graph from a flat row-major `n * n` weight matrix.
    ///
    /// A zero cell means "no edge", so a zero-weight edge cannot be
    /// expressed this way.
    pub fn from_adjacency_matrix(n: usize, matrix: &[W], values: Vec<T>) -> Result<Self> {
        let cells = n
            .checked_mul(n)
            .ok_or_else(|| GraphError::shape("adjacency matrix", usize::MAX, matrix.len()))?;
        if cells != matrix.len() {
            return Err(GraphError::shape("adjacency matrix", cells, matrix.len()));
        }
        if values.len() != n {
            return Err(GraphError::shape("node values", n, values.len()));
        }

        let mut graph = Self::with_nodes(values);
        for (k, &weight) in matrix.iter().enumerate() {
            if weight != W::ZERO {
                graph.add_edge(k / n, k % n, weight)?;
            }
        }

        debug!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "from_adjacency_matrix"
        );
        Ok(graph)
    }
}

impl<W: Weight, T: Default> Graph<W, T> {
    /// Build a graph from a flat square matrix, deriving the node count
    /// from its length. Fails unless the length is a perfect square.
    pub fn from_flat_matrix(matrix: &[W]) -> Result<Self> {
        let n = exact_sqrt(matrix.len()).ok_or_else(|| {
            let side = (matrix.len() as f64).sqrt().ceil() as usize;
            GraphError::shape("adjacency matrix", side * side, matrix.len())
        })?;
        let values = (0..n).map(|_| T::default()).collect();
        Self::from_adjacency_matrix(n, matrix, values)
    }

    /// Build a graph from edges; the node count is one past the largest
    /// endpoint. Repeated `(from, to)` pairs keep the first weight.
    pub fn from_edge_list(edges: impl IntoIterator<Item = Edge<W>>) -> Self {
        let edges: Vec<Edge<W>> = edges.into_iter().collect();
        let n = edges
            .iter()
            .map(|e| e.from.max(e.to) + 1)
            .max()
            .unwrap_or(0);

        let mut graph = Self::with_node_count(n);
        for edge in edges {
            // Endpoints are in range by construction
            let _ = graph.add_edge(edge.from, edge.to, edge.weight);
        }

        debug!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "from_edge_list"
        );
        graph
    }

    /// Build a graph from an adjacency-list map. Nodes that only appear as
    /// targets (or as keys with no targets) are still created.
    pub fn from_adjacency_list(list: &AdjacencyList<W>) -> Self {
        let n = list
            .iter()
            .flat_map(|(from, targets)| {
                std::iter::once(*from).chain(targets.iter().map(|(to, _)| *to))
            })
            .max()
            .map_or(0, |max| max + 1);

        let mut graph = Self::with_node_count(n);
        for (&from, targets) in list {
            for &(to, weight) in targets {
                let _ = graph.add_edge(from, to, weight);
            }
        }

        debug!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "from_adjacency_list"
        );
        graph
    }
}

fn exact_sqrt(len: usize) -> Option<usize> {
    let root = (len as f64).sqrt().round() as usize;
    (root * root == len).then_some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_adjacency_matrix() {
        let graph: Graph<i32, i32> =
            Graph::from_adjacency_matrix(3, &[1, 0, 1, 0, 1, 0, 1, 0, 1], vec![0, 1, 2]).unwrap();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 5);
        assert_eq!(graph.node(2), Some(&2));
        assert!(graph.edge(0, 0).is_some());
        assert!(graph.edge(0, 1).is_none());
    }

    #[test]
    fn test_from_adjacency_matrix_bad_length() {
        let matrix = [1, 0, 1, 0, 1, 0];
        let err = Graph::<i32, i32>::from_adjacency_matrix(3, &matrix, vec![0, 1, 2]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Shape {
                expected: 9,
                actual: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_from_adjacency_matrix_huge_node_count() {
        let err = Graph::<f64>::from_adjacency_matrix(usize::MAX / 2, &[0.0], vec![]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Shape {
                expected: usize::MAX,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_from_adjacency_matrix_bad_value_count() {
        let err = Graph::<i32, i32>::from_adjacency_matrix(2, &[0, 1, 1, 0], vec![7]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Shape {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_from_flat_matrix_weights() {
        #[rustfmt::skip]
        let matrix = [
            0.0, 3.0, 1.0, 1.0,
            1.0, 0.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
        ];
        let graph: Graph<f64> = Graph::from_flat_matrix(&matrix).unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.edge(0, 1), Some(Edge::new(0, 1, 3.0)));
        let neighbors: Vec<usize> = graph.neighbors(0).collect();
        assert_eq!(neighbors, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_flat_matrix_not_square() {
        let err = Graph::<f64>::from_flat_matrix(&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, GraphError::Shape { actual: 6, .. }));
    }

    #[test]
    fn test_from_edge_list() {
        let graph: Graph<f64> = Graph::from_edge_list(vec![
            Edge::new(1, 0, 4.0),
            Edge::new(1, 2, 3.0),
            Edge::new(0, 2, -2.0),
            Edge::new(2, 3, 2.0),
            Edge::new(3, 1, -1.0),
            Edge::new(1, 0, 99.0),
        ]);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 5);
        assert_eq!(graph.edge(1, 0).unwrap().weight, 4.0);
    }

    #[test]
    fn test_from_edge_list_empty() {
        let graph: Graph<i32> = Graph::from_edge_list(Vec::new());
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_from_adjacency_list() {
        let mut list = AdjacencyList::new();
        list.insert(0, vec![(1, 1.0), (2, 1.0)]);
        list.insert(1, vec![(0, 3.0)]);
        list.insert(2, vec![(1, 2.0)]);
        let graph: Graph<f64> = Graph::from_adjacency_list(&list);

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.edge(1, 0), Some(Edge::new(1, 0, 3.0)));
        assert_eq!(graph.edge(2, 1), Some(Edge::new(2, 1, 2.0)));
    }

    #[test]
    fn test_from_adjacency_list_sink_nodes_present() {
        let mut list = AdjacencyList::new();
        list.insert(0, vec![(3, 1)]);
        list.insert(5, vec![]);
        let graph: Graph<i32> = Graph::from_adjacency_list(&list);

        assert_eq!(graph.num_nodes(), 6);
        assert!(graph.contains(5));
        assert!(graph.adj_edges(3).is_empty());
    }
}
