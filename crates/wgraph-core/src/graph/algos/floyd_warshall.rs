use crate::graph::matrix::SquareMatrix;
use crate::graph::store::Graph;
use crate::graph::types::Weight;
use crate::trace_time;
use std::time::Instant;

/// All-pairs shortest distances.
///
/// Direct edges seed the matrix, the diagonal is then forced to zero and
/// every node is tried as an intermediate hop. Unreachable pairs stay at
/// infinity. Negative cycles are not detected here; see
/// [`SquareMatrix::has_negative_diagonal`].
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn floyd_warshall<W: Weight, T>(graph: &Graph<W, T>) -> SquareMatrix<W> {
    let timer = Instant::now();
    let n = graph.num_nodes();
    let mut dist = SquareMatrix::filled(n, W::INFINITY);

    for edge in graph.edges() {
        dist.set(edge.from, edge.to, edge.weight);
    }
    for node in 0..n {
        dist.set(node, node, W::ZERO);
    }

    for k in 0..n {
        for i in 0..n {
            let via = dist.get(i, k);
            if via.is_infinite() {
                continue;
            }
            for j in 0..n {
                let through = via.path_sum(dist.get(k, j));
                if through < dist.get(i, j) {
                    dist.set(i, j, through);
                }
            }
        }
    }

    trace_time!(timer, "floyd_warshall");
    dist
}

impl<W: Weight> SquareMatrix<W> {
    /// True if some node reaches itself at negative cost, which means the
    /// distances came out of a graph with a negative cycle
    pub fn has_negative_diagonal(&self) -> bool {
        (0..self.size()).any(|i| self.get(i, i).is_negative())
    }
}
