//! Dense square matrices for all-pairs and derived results

use serde::Serialize;
use std::fmt;

/// Dense `n x n` matrix stored row-major.
///
/// Used for all-pairs distances, adjacency export and the Laplacian.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquareMatrix<V> {
    size: usize,
    cells: Vec<V>,
}

impl<V: Copy> SquareMatrix<V> {
    /// Matrix of side `size` with every cell set to `fill`
    pub fn filled(size: usize, fill: V) -> Self {
        SquareMatrix {
            size,
            cells: vec![fill; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> V {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: V) {
        self.cells[row * self.size + col] = value;
    }

    /// Flat row-major view
    pub fn as_slice(&self) -> &[V] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[V] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[V]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

impl<V: Copy + fmt::Display> fmt::Display for SquareMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}
