use crate::graph::store::Graph;
use crate::graph::types::{Edge, Weight};
use serde::Serialize;

/// Single-source shortest-path result
///
/// `distances[i]` is `W::INFINITY` for nodes unreachable from `start`;
/// `predecessors[i]` is `None` for the start node and unreachable nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<W> {
    pub start: usize,
    pub distances: Vec<W>,
    pub predecessors: Vec<Option<usize>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Everything at infinity except `start`, no predecessors
    pub(crate) fn init(num_nodes: usize, start: usize) -> Self {
        let mut distances = vec![W::INFINITY; num_nodes];
        distances[start] = W::ZERO;
        ShortestPaths {
            start,
            distances,
            predecessors: vec![None; num_nodes],
        }
    }

    /// Candidate distance to `edge.to` through `edge`, if `edge.from` is
    /// reached and the candidate improves on the current distance
    pub(crate) fn improvement(&self, edge: &Edge<W>) -> Option<W> {
        let base = self.distances[edge.from];
        if base.is_infinite() {
            return None;
        }
        let candidate = base.path_sum(edge.weight);
        (candidate < self.distances[edge.to]).then_some(candidate)
    }

    /// Relax `edge`; returns whether the distance of `edge.to` dropped
    pub(crate) fn relax(&mut self, edge: &Edge<W>) -> bool {
        match self.improvement(edge) {
            Some(candidate) => {
                self.distances[edge.to] = candidate;
                self.predecessors[edge.to] = Some(edge.from);
                true
            }
            None => false,
        }
    }

    /// Distance to `node`, `None` if unreachable or unknown
    pub fn distance(&self, node: usize) -> Option<W> {
        self.distances
            .get(node)
            .copied()
            .filter(|d| !d.is_infinite())
    }

    pub fn is_reachable(&self, node: usize) -> bool {
        self.distance(node).is_some()
    }

    /// Node sequence `start -> .. -> target` following predecessors
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.start {
            // A walk longer than the node count means the chain is broken
            if path.len() > self.distances.len() {
                return None;
            }
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Derived graph holding edge `(pred[i], i, dist[i])` for every node
    /// with a predecessor. Node payloads are copied from `graph`.
    pub fn shortest_path_tree<T: Clone>(&self, graph: &Graph<W, T>) -> Graph<W, T> {
        let mut tree = Graph::with_nodes(graph.nodes().cloned());
        for (node, pred) in self.predecessors.iter().enumerate() {
            if let Some(pred) = *pred {
                // Both endpoints come from `graph`, which has the same nodes
                let _ = tree.add_edge(pred, node, self.distances[node]);
            }
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relax_skips_unreached_source() {
        let mut paths: ShortestPaths<i64> = ShortestPaths::init(3, 0);
        assert!(!paths.relax(&Edge::new(1, 2, -10)));
        assert!(paths.relax(&Edge::new(0, 1, 4)));
        assert!(!paths.relax(&Edge::new(0, 1, 5)));
        assert_eq!(paths.distances, vec![0, 4, i64::MAX]);
        assert_eq!(paths.predecessors, vec![None, Some(0), None]);
    }

    #[test]
    fn test_path_to() {
        let paths = ShortestPaths {
            start: 0,
            distances: vec![0.0, 1.0, 3.0, f64::INFINITY],
            predecessors: vec![None, Some(0), Some(1), None],
        };
        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.path_to(3), None);
        assert_eq!(paths.path_to(17), None);
        assert_eq!(paths.distance(2), Some(3.0));
        assert_eq!(paths.distance(3), None);
    }

    #[test]
    fn test_path_to_broken_chain() {
        let paths = ShortestPaths {
            start: 0,
            distances: vec![0, 2, 1],
            predecessors: vec![None, Some(2), Some(1)],
        };
        assert_eq!(paths.path_to(1), None);
    }
}
