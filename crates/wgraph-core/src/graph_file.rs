//! Graph files read by the command-line tool
//!
//! A graph file is JSON (`.json`) or TOML (`.toml`) holding exactly one
//! edge source:
//!
//! ```toml
//! nodes = 4                           # optional node count
//! values = [1.0, 2.0, 3.0, 4.0]       # optional node payloads
//! edges = [[0, 1, 7.0], [1, 2, 2.5]]  # from, to, weight
//! # matrix = [0, 7, 0, 0, ...]        # flat row-major, zero = no edge
//! # [adjacency]
//! # "0" = [[1, 7.0]]                  # source = [[target, weight], ...]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// On-disk graph description
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// Node count; derived from the edges when absent
    #[serde(default)]
    pub nodes: Option<usize>,

    /// One payload per node; zero when absent
    #[serde(default)]
    pub values: Option<Vec<f64>>,

    /// `[from, to, weight]` triples
    #[serde(default)]
    pub edges: Option<Vec<(usize, usize, f64)>>,

    /// Flat row-major weight matrix
    #[serde(default)]
    pub matrix: Option<Vec<f64>>,

    /// Source node (as a string key) to `[target, weight]` pairs
    #[serde(default)]
    pub adjacency: Option<BTreeMap<String, Vec<(usize, f64)>>>,
}

impl GraphFile {
    /// Read a graph file, choosing the parser by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let file: GraphFile = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(GraphError::invalid_graph_file(format!(
                    "{}: expected a .json or .toml file",
                    path.display()
                )))
            }
        };
        debug!(path = %path.display(), "loaded graph file");
        Ok(file)
    }

    /// Build the graph. Weights and node payloads are `f64`.
    pub fn into_graph(self) -> Result<Graph<f64, f64>> {
        let sources = [
            self.edges.is_some(),
            self.matrix.is_some(),
            self.adjacency.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        if sources != 1 {
            return Err(GraphError::invalid_graph_file(format!(
                "expected exactly one of `edges`, `matrix` or `adjacency`, found {}",
                sources
            )));
        }

        let GraphFile {
            nodes,
            values,
            edges,
            matrix,
            adjacency,
        } = self;

        if let Some(matrix) = matrix {
            if let Some(k) = matrix.iter().position(|w| !w.is_finite()) {
                return Err(GraphError::invalid_graph_file(format!(
                    "matrix cell {} has non-finite weight {}",
                    k, matrix[k]
                )));
            }
            let n = nodes
                .or(values.as_ref().map(Vec::len))
                .unwrap_or_else(|| (matrix.len() as f64).sqrt().round() as usize);
            // Checked before allocating `n` default payloads
            if n.checked_mul(n) != Some(matrix.len()) {
                let expected = n.checked_mul(n).unwrap_or(usize::MAX);
                return Err(GraphError::shape("adjacency matrix", expected, matrix.len()));
            }
            let values = values.unwrap_or_else(|| vec![0.0; n]);
            return Graph::from_adjacency_matrix(n, &matrix, values);
        }

        let triples: Vec<(usize, usize, f64)> = match (edges, adjacency) {
            (Some(edges), _) => edges,
            (None, Some(adjacency)) => flatten_adjacency(adjacency)?,
            (None, None) => Vec::new(),
        };

        let derived = triples
            .iter()
            .map(|&(from, to, _)| from.max(to) + 1)
            .max()
            .unwrap_or(0);
        let n = nodes.unwrap_or_else(|| derived.max(values.as_ref().map_or(0, Vec::len)));
        let values = match values {
            Some(values) if values.len() != n => {
                return Err(GraphError::shape("node values", n, values.len()))
            }
            Some(values) => values,
            None => vec![0.0; n],
        };

        let mut graph = Graph::with_nodes(values);
        for (from, to, weight) in triples {
            if !weight.is_finite() {
                return Err(GraphError::invalid_graph_file(format!(
                    "edge {} -> {} has non-finite weight {}",
                    from, to, weight
                )));
            }
            if !graph.add_edge(from, to, weight)? {
                debug!(from, to, "duplicate edge ignored");
            }
        }
        Ok(graph)
    }
}

fn flatten_adjacency(
    adjacency: BTreeMap<String, Vec<(usize, f64)>>,
) -> Result<Vec<(usize, usize, f64)>> {
    let mut sources = Vec::with_capacity(adjacency.len());
    for (key, targets) in adjacency {
        let from: usize = key.trim().parse().map_err(|_| {
            GraphError::invalid_graph_file(format!("adjacency key `{}` is not a node index", key))
        })?;
        sources.push((from, targets));
    }
    // String keys sort "10" before "2"
    sources.sort_by_key(|(from, _)| *from);

    Ok(sources
        .into_iter()
        .flat_map(|(from, targets)| {
            targets
                .into_iter()
                .map(move |(to, weight)| (from, to, weight))
        })
        .collect())
}

/// Load a graph file and build the graph
pub fn load_graph(path: &Path) -> Result<Graph<f64, f64>> {
    GraphFile::load(path)?.into_graph()
}
