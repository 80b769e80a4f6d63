//! Traversal over a [`YaleSparseMatrix`], either the stored entries only or
//! the full dense grid with `zero` filled in for unset cells.

use std::iter::FusedIterator;
use std::slice;

use crate::matrix::yale::YaleSparseMatrix;

/// Row-major cursor over the dense `rows x columns` grid.
#[derive(Clone)]
struct Grid<'a, T> {
    matrix: &'a YaleSparseMatrix<T>,
    rows: usize,
    columns: usize,
    row: usize,
    column: usize,
}

impl<'a, T> Grid<'a, T> {
    fn new(matrix: &'a YaleSparseMatrix<T>) -> Self {
        let (rows, columns) = matrix.shape();
        Self { matrix, rows, columns, row: 0, column: 0 }
    }

    fn next_cell(&mut self) -> Option<(&'a T, usize, usize)> {
        if self.columns == 0 || self.row >= self.rows {
            return None;
        }
        let (row, column) = (self.row, self.column);
        self.column += 1;
        if self.column == self.columns {
            self.column = 0;
            self.row += 1;
        }
        let matrix = self.matrix;
        Some((matrix.get(row, column), row, column))
    }

    fn remaining(&self) -> usize {
        if self.columns == 0 || self.row >= self.rows {
            return 0;
        }
        (self.rows - self.row)
            .saturating_mul(self.columns)
            .saturating_sub(self.column)
    }
}

/// Stored entries paired with their row, walking consecutive row offsets.
#[derive(Clone)]
struct Packed<'a, T> {
    matrix: &'a YaleSparseMatrix<T>,
    row: usize,
    index: usize,
}

impl<'a, T> Packed<'a, T> {
    fn next_entry(&mut self) -> Option<(&'a T, usize, usize)> {
        let matrix = self.matrix;
        let offsets = matrix.row_offsets();
        if self.index >= matrix.nonzero_count() {
            return None;
        }
        while self.index >= offsets[self.row + 1] {
            self.row += 1;
        }
        let k = self.index;
        self.index += 1;
        Some((&matrix.values()[k], self.row, matrix.columns()[k]))
    }

    fn remaining(&self) -> usize {
        self.matrix.nonzero_count() - self.index
    }
}

#[derive(Clone)]
enum ValuesInner<'a, T> {
    Stored(slice::Iter<'a, T>),
    Dense(Grid<'a, T>),
}

/// Iterator over matrix values; see [`YaleSparseMatrix::values_iter`].
#[derive(Clone)]
pub struct Values<'a, T> {
    inner: ValuesInner<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn stored(matrix: &'a YaleSparseMatrix<T>) -> Self {
        Self { inner: ValuesInner::Stored(matrix.values().iter()) }
    }

    pub(crate) fn dense(matrix: &'a YaleSparseMatrix<T>) -> Self {
        Self { inner: ValuesInner::Dense(Grid::new(matrix)) }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match &mut self.inner {
            ValuesInner::Stored(it) => it.next(),
            ValuesInner::Dense(grid) => grid.next_cell().map(|(v, _, _)| v),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match &self.inner {
            ValuesInner::Stored(it) => it.len(),
            ValuesInner::Dense(grid) => grid.remaining(),
        };
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}
impl<T> FusedIterator for Values<'_, T> {}

#[derive(Clone)]
enum IndexedInner<'a, T> {
    Stored(Packed<'a, T>),
    Dense(Grid<'a, T>),
}

/// Iterator over `(value, row, column)`; see [`YaleSparseMatrix::indexed_iter`].
#[derive(Clone)]
pub struct Indexed<'a, T> {
    inner: IndexedInner<'a, T>,
}

impl<'a, T> Indexed<'a, T> {
    pub(crate) fn stored(matrix: &'a YaleSparseMatrix<T>) -> Self {
        Self { inner: IndexedInner::Stored(Packed { matrix, row: 0, index: 0 }) }
    }

    pub(crate) fn dense(matrix: &'a YaleSparseMatrix<T>) -> Self {
        Self { inner: IndexedInner::Dense(Grid::new(matrix)) }
    }
}

impl<'a, T> Iterator for Indexed<'a, T> {
    type Item = (&'a T, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IndexedInner::Stored(packed) => packed.next_entry(),
            IndexedInner::Dense(grid) => grid.next_cell(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match &self.inner {
            IndexedInner::Stored(packed) => packed.remaining(),
            IndexedInner::Dense(grid) => grid.remaining(),
        };
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Indexed<'_, T> {}
impl<T> FusedIterator for Indexed<'_, T> {}
