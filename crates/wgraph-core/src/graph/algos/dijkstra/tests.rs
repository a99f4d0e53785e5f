use super::*;
use crate::graph::algos::bellman_ford::bellman_ford;
use crate::graph::build::AdjacencyList;

/// 0 -7-> 1, 0 -12-> 2, 1 -2-> 2, 1 -9-> 3, 2 -10-> 4, 3 -1-> 5, 4 -4-> 3, 4 -5-> 5
fn six_node_graph() -> Graph<f64> {
    let mut list = AdjacencyList::new();
    list.insert(0, vec![(1, 7.0), (2, 12.0)]);
    list.insert(1, vec![(2, 2.0), (3, 9.0)]);
    list.insert(2, vec![(4, 10.0)]);
    list.insert(3, vec![(5, 1.0)]);
    list.insert(4, vec![(3, 4.0), (5, 5.0)]);
    list.insert(5, vec![]);
    Graph::from_adjacency_list(&list)
}

#[test]
fn test_dijkstra_distances_and_predecessors() {
    let graph = six_node_graph();
    let paths = dijkstra(&graph, 0).unwrap();

    assert_eq!(paths.distances, vec![0.0, 7.0, 9.0, 16.0, 19.0, 17.0]);
    assert_eq!(
        paths.predecessors,
        vec![None, Some(0), Some(1), Some(1), Some(2), Some(3)]
    );
}

#[test]
fn test_dijkstra_shortest_path_tree() {
    let graph = six_node_graph();
    let tree = dijkstra(&graph, 0).unwrap().shortest_path_tree(&graph);

    let edges: Vec<Edge<f64>> = tree.edges().collect();
    assert_eq!(
        edges,
        vec![
            Edge::new(0, 1, 7.0),
            Edge::new(1, 2, 9.0),
            Edge::new(1, 3, 16.0),
            Edge::new(2, 4, 19.0),
            Edge::new(3, 5, 17.0),
        ]
    );
    assert_eq!(tree.num_nodes(), graph.num_nodes());
    // The input is untouched
    assert_eq!(graph.num_edges(), 8);
}

#[test]
fn test_dijkstra_path_reconstruction() {
    let graph = six_node_graph();
    let paths = dijkstra(&graph, 0).unwrap();
    assert_eq!(paths.path_to(5), Some(vec![0, 1, 3, 5]));
    assert_eq!(paths.path_to(4), Some(vec![0, 1, 2, 4]));
}

#[test]
fn test_dijkstra_unreachable_nodes() {
    let graph = six_node_graph();
    let paths = dijkstra(&graph, 3).unwrap();

    assert_eq!(paths.distance(5), Some(1.0));
    for node in [0, 1, 2, 4] {
        assert!(paths.distances[node].is_infinite());
        assert_eq!(paths.predecessors[node], None);
    }
}

#[test]
fn test_dijkstra_rejects_negative_edges() {
    let mut graph = six_node_graph();
    graph.add_edge(5, 0, -1.0).unwrap();

    let err = dijkstra(&graph, 0).unwrap_err();
    assert!(matches!(err, GraphError::NegativeWeight { from: 5, to: 0 }));
}

#[test]
fn test_dijkstra_start_out_of_range() {
    let graph = six_node_graph();
    assert!(matches!(
        dijkstra(&graph, 6),
        Err(GraphError::NodeOutOfRange { node: 6, .. })
    ));
}

#[test]
fn test_dijkstra_integer_weights() {
    let mut graph: Graph<u32> = Graph::with_node_count(4);
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(0, 2, 1).unwrap();
    graph.add_edge(2, 1, 1).unwrap();
    graph.add_edge(1, 3, 0).unwrap();

    let paths = dijkstra(&graph, 0).unwrap();
    assert_eq!(paths.distances, vec![0, 2, 1, 2]);
    assert_eq!(paths.path_to(3), Some(vec![0, 2, 1, 3]));
}

#[test]
fn test_dijkstra_matches_bellman_ford() {
    let graph = six_node_graph();
    for start in 0..graph.num_nodes() {
        let fast = dijkstra(&graph, start).unwrap();
        let general = bellman_ford(&graph, start).unwrap();
        assert_eq!(fast.distances, general.distances, "start {}", start);
    }
}
