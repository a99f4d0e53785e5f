//! Graph algorithm implementations
//!
//! - `dijkstra`, `bellman_ford`, `floyd_warshall`: shortest paths
//! - `prim`: minimum spanning tree
//! - `scc`: strongly connected components (Kosaraju)
//! - `topo`: cycle detection and topological sort
//! - `hamiltonian`: Hamiltonian path existence
//! - `derived`: transpose, adjacency and Laplacian matrices
//! - `shared`: shortest-path result type used by several algorithms

pub mod bellman_ford;
pub mod derived;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod hamiltonian;
pub mod prim;
pub mod scc;
pub mod shared;
pub mod topo;

pub use bellman_ford::bellman_ford;
pub use derived::{adjacency_matrix, laplacian, transpose};
pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;
pub use hamiltonian::{has_hamiltonian_path, MAX_HAMILTONIAN_NODES};
pub use prim::{prim, total_weight};
pub use scc::{kosaraju, sorted_components};
pub use shared::ShortestPaths;
pub use topo::{has_cycle, topological_sort};
