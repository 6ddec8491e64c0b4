//! The dynamic programming table, stored as one flat row-major buffer.

use core::ops::{Index, IndexMut};

use crate::number::Cost;

/// A `rows x cols` table of accumulated costs.
///
/// Cell `(i, j)` holds the cost of turning the first `i` symbols of the source
/// into the first `j` symbols of the target. All cells live in a single
/// allocation.
pub struct DistanceMatrix<F: Cost> {
    /// The number of columns, i.e. the length of each row.
    cols: usize,
    /// The cells, row after row.
    cells: Vec<F>,
}

impl<F: Cost> DistanceMatrix<F> {
    /// Creates a new matrix with every cell set to zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![F::ZERO; rows * cols],
        }
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.cells.len() / self.cols
        }
    }

    /// The number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The offset of cell `(i, j)` in the flat buffer.
    #[inline(always)]
    const fn offset(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }
}

impl<F: Cost> Index<(usize, usize)> for DistanceMatrix<F> {
    type Output = F;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &F {
        &self.cells[self.offset(i, j)]
    }
}

impl<F: Cost> IndexMut<(usize, usize)> for DistanceMatrix<F> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut F {
        let k = self.offset(i, j);
        &mut self.cells[k]
    }
}
