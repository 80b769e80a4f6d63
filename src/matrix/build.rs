//! Dense generators for bulk construction.

use crate::matrix::yale::YaleSparseMatrix;

/// A `rows x columns` grid whose cells come from `generator(row, column)`.
///
/// `cells` walks the grid lazily and can be called any number of times;
/// `build` consumes the grid into a matrix.
#[derive(Debug, Clone)]
pub struct DenseGrid<F> {
    rows: usize,
    columns: usize,
    generator: F,
}

impl<F> DenseGrid<F> {
    pub fn new(rows: usize, columns: usize, generator: F) -> Self {
        Self { rows, columns, generator }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row-major `(row, column, value)` triples over the whole grid.
    pub fn cells<T>(&self) -> impl Iterator<Item = (usize, usize, T)> + '_
    where
        F: Fn(usize, usize) -> T,
    {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| (row, column, (self.generator)(row, column)))
        })
    }

    /// Store every generated value that differs from `zero`.
    ///
    /// The row count of the result ends at the last row holding a stored
    /// value, not at `rows`.
    pub fn build<T>(self, zero: T) -> YaleSparseMatrix<T>
    where
        T: PartialEq,
        F: Fn(usize, usize) -> T,
    {
        let mut m = YaleSparseMatrix::new(zero);
        for (row, column, value) in self.cells() {
            if value != *m.zero() {
                m.set(row, column, value);
            }
        }
        m
    }
}
