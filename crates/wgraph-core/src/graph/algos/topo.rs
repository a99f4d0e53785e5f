use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::traversal::dfs_postorder;
use crate::graph::types::Weight;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Whether the graph contains a directed cycle. Self-loops count.
///
/// Depth-first search over every node; reaching a node that is still on
/// the DFS stack is a back edge.
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn has_cycle<W: Weight, T>(graph: &Graph<W, T>) -> bool {
    let mut marks = vec![Mark::Unvisited; graph.num_nodes()];

    for root in 0..graph.num_nodes() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnStack;
        let mut stack = vec![(root, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            match graph.adj_edges(node).get(next) {
                Some(adj) => {
                    frame.1 += 1;
                    match marks[adj.to] {
                        Mark::OnStack => {
                            debug!(from = node, to = adj.to, "back edge");
                            return true;
                        }
                        Mark::Unvisited => {
                            marks[adj.to] = Mark::OnStack;
                            stack.push((adj.to, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }
    false
}

/// Topological order: every edge `u -> v` puts `u` before `v`.
///
/// Reversed DFS finish order, starting searches at every node in index
/// order. Fails with [`GraphError::Cycle`] on a cyclic graph.
#[tracing::instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn topological_sort<W: Weight, T>(graph: &Graph<W, T>) -> Result<Vec<usize>> {
    if has_cycle(graph) {
        return Err(GraphError::Cycle);
    }
    let mut order = dfs_postorder(graph);
    order.reverse();
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Edge;

    fn from_pairs(pairs: &[(usize, usize)]) -> Graph<i32> {
        Graph::from_edge_list(pairs.iter().map(|&(from, to)| Edge::new(from, to, 1)))
    }

    fn assert_respects_edges(graph: &Graph<i32>, order: &[usize]) {
        let mut position = vec![0; graph.num_nodes()];
        for (i, node) in order.iter().enumerate() {
            position[*node] = i;
        }
        for edge in graph.edges() {
            assert!(position[edge.from] < position[edge.to], "{}", edge);
        }
    }

    #[test]
    fn test_topological_sort_forest() {
        let graph = from_pairs(&[(2, 3), (3, 1), (4, 0), (4, 1), (5, 0), (5, 2)]);
        let order = topological_sort(&graph).unwrap();
        assert_eq!(order, vec![5, 4, 2, 3, 1, 0]);
        assert_respects_edges(&graph, &order);
    }

    #[test]
    fn test_topological_sort_diamond() {
        let graph = from_pairs(&[
            (0, 1),
            (0, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 5),
            (3, 4),
            (3, 5),
        ]);
        let order = topological_sort(&graph).unwrap();
        assert_eq!(order, vec![0, 2, 1, 3, 5, 4]);
        assert_respects_edges(&graph, &order);
    }

    #[test]
    fn test_three_cycle() {
        let graph: Graph<f64> = Graph::from_edge_list(vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(2, 0, 1.0),
        ]);
        assert!(has_cycle(&graph));
        assert!(matches!(topological_sort(&graph), Err(GraphError::Cycle)));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        #[rustfmt::skip]
        let matrix = [
            1.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        let graph: Graph<f64> = Graph::from_flat_matrix(&matrix).unwrap();
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_cross_edge_is_not_cycle() {
        // 0 -> 1 -> 2 and 0 -> 2 revisit 2 without a back edge
        let graph = from_pairs(&[(0, 1), (0, 2), (1, 2)]);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_cycle_in_later_component() {
        let graph = from_pairs(&[(0, 1), (2, 3), (3, 2)]);
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<f64> = Graph::new();
        assert!(!has_cycle(&graph));
        assert_eq!(topological_sort(&graph).unwrap(), Vec::<usize>::new());
    }
}
