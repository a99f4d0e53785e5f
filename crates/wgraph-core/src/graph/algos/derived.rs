//! Graphs and matrices derived from an existing graph

use crate::graph::matrix::SquareMatrix;
use crate::graph::store::Graph;
use crate::graph::types::Weight;

/// Copy of `graph` with every edge reversed. Payloads are cloned and
/// zero-weight edges survive.
pub fn transpose<W: Weight, T: Clone>(graph: &Graph<W, T>) -> Graph<W, T> {
    reverse_into(graph, Graph::with_nodes(graph.nodes().cloned()))
}

/// Reversed edge structure without payloads
pub(crate) fn transpose_structure<W: Weight, T>(graph: &Graph<W, T>) -> Graph<W> {
    reverse_into(graph, Graph::with_node_count(graph.num_nodes()))
}

fn reverse_into<W: Weight, T, U>(graph: &Graph<W, T>, mut target: Graph<W, U>) -> Graph<W, U> {
    for edge in graph.edges().map(|e| e.reversed()) {
        // `target` has exactly the nodes of `graph`
        let _ = target.add_edge(edge.from, edge.to, edge.weight);
    }
    target
}

/// Weighted adjacency matrix; zero marks a missing edge
pub fn adjacency_matrix<W: Weight, T>(graph: &Graph<W, T>) -> SquareMatrix<W> {
    let mut matrix = SquareMatrix::filled(graph.num_nodes(), W::ZERO);
    for edge in graph.edges() {
        matrix.set(edge.from, edge.to, edge.weight);
    }
    matrix
}

/// Laplacian matrix: out-degree on the diagonal, negated edge weights
/// elsewhere. Self-loops only count towards the degree.
pub fn laplacian<W: Weight, T>(graph: &Graph<W, T>) -> SquareMatrix<f64> {
    let n = graph.num_nodes();
    let mut matrix = SquareMatrix::filled(n, 0.0);
    for edge in graph.edges() {
        if edge.from != edge.to {
            // Subtraction keeps zero-weight edges at 0.0 rather than -0.0
            matrix.set(edge.from, edge.to, 0.0 - edge.weight.to_f64());
        }
    }
    for node in 0..n {
        matrix.set(node, node, graph.adj_edges(node).len() as f64);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Edge;

    #[test]
    fn test_transpose() {
        let mut graph: Graph<f64, char> = Graph::with_nodes(['x', 'y', 'z']);
        graph.add_edge(0, 1, 1.5).unwrap();
        graph.add_edge(1, 2, 0.0).unwrap();
        graph.add_edge(2, 2, 3.0).unwrap();

        let t = transpose(&graph);
        assert_eq!(t.num_edges(), 3);
        assert_eq!(t.edge(1, 0), Some(Edge::new(1, 0, 1.5)));
        assert_eq!(t.edge(2, 1), Some(Edge::new(2, 1, 0.0)));
        assert_eq!(t.edge(2, 2), Some(Edge::new(2, 2, 3.0)));
        assert!(t.edge(0, 1).is_none());
        assert_eq!(t.node(1), Some(&'y'));
        // Transposing twice restores the edge set
        let back = transpose(&t);
        let mut original: Vec<_> = graph.edges().map(|e| (e.from, e.to)).collect();
        let mut restored: Vec<_> = back.edges().map(|e| (e.from, e.to)).collect();
        original.sort_unstable();
        restored.sort_unstable();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_adjacency_matrix() {
        let mut graph: Graph<i32> = Graph::with_node_count(2);
        graph.add_edge(0, 1, 4).unwrap();
        assert_eq!(adjacency_matrix(&graph).as_slice(), &[0, 4, 0, 0]);
    }

    #[test]
    fn test_laplacian() {
        #[rustfmt::skip]
        let matrix = [
            0.0, 1.0, 0.0, 0.0, 1.0, 0.0,
            1.0, 0.0, 1.0, 0.0, 1.0, 0.0,
            0.0, 1.0, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 1.0, 1.0,
            1.0, 1.0, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        ];
        let graph: Graph<f64> = Graph::from_flat_matrix(&matrix).unwrap();

        #[rustfmt::skip]
        let expected = [
             2.0, -1.0,  0.0,  0.0, -1.0,  0.0,
            -1.0,  3.0, -1.0,  0.0, -1.0,  0.0,
             0.0, -1.0,  2.0, -1.0,  0.0,  0.0,
             0.0,  0.0, -1.0,  3.0, -1.0, -1.0,
            -1.0, -1.0,  0.0, -1.0,  3.0,  0.0,
             0.0,  0.0,  0.0, -1.0,  0.0,  1.0,
        ];
        assert_eq!(laplacian(&graph).as_slice(), &expected);
    }
}
