//! Directed weighted graphs and the algorithms that run on them
//!
//! - `types`: the `Weight` trait, nodes and edges
//! - `store`: the adjacency-list `Graph`
//! - `build`: constructors from matrices, edge lists and adjacency lists
//! - `matrix`: dense square matrices for all-pairs results
//! - `queue`: indexed min-heap with decrease-key
//! - `traversal`: BFS and DFS
//! - `algos`: shortest paths, MST, SCC, ordering and derived matrices

pub mod algos;
pub mod build;
pub mod matrix;
pub mod queue;
pub mod store;
pub mod traversal;
pub mod types;

pub use build::AdjacencyList;
pub use matrix::SquareMatrix;
pub use queue::{HeapItem, IndexedMinHeap};
pub use store::Graph;
pub use traversal::{bfs, bfs_order, dfs, dfs_order, dfs_postorder};
pub use types::{Adjacent, Edge, Node, Weight};
