//! wgraph Core Library
//!
//! Directed weighted graphs with generic numeric weights, plus the
//! classic algorithm suite: traversal, shortest paths, spanning trees,
//! strongly connected components, ordering and Hamiltonian paths.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod graph_file;
pub mod logging;
