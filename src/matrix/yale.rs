//! Yale (compressed sparse row) matrix.
//!
//! A matrix `M` with `NNZ` stored entries is kept in three arrays:
//!
//! - `values` (length `NNZ`): the stored entries, row-major, column-ascending.
//! - `row_offsets` (length `rows + 1`): `row_offsets[i]` is the index in
//!   `values` of the first entry of row `i`; the last slot is `NNZ`.
//! - `columns` (length `NNZ`): the column index of each entry of `values`.
//!
//! For example
//!
//! ```text
//! 0 0 0 0
//! 5 8 0 0
//! 0 0 3 0
//! 0 6 0 0
//! ```
//!
//! is stored as `values = [5, 8, 3, 6]`, `row_offsets = [0, 0, 2, 3, 4]`,
//! `columns = [0, 1, 2, 1]`.
//!
//! The column count is not stored: it is one past the largest column index
//! ever written.

use std::fmt;
use std::ops::Index;

use num_traits::Zero;
use tracing::{debug, trace};

use crate::config::InspectOptions;
use crate::core::traits::{MatShape, MatrixGet, SparseStorage};
use crate::error::YaleError;
use crate::matrix::build::DenseGrid;
use crate::matrix::iter::{Indexed, Values};
use crate::utils::inspect;

/// Sparse matrix in Yale (CSR) layout with a fixed "zero" sentinel.
#[derive(Debug, Clone)]
pub struct YaleSparseMatrix<T> {
    zero: T,
    values: Vec<T>,
    row_offsets: Vec<usize>,
    columns: Vec<usize>,
}

impl<T> YaleSparseMatrix<T> {
    /// Empty matrix with no rows; every cell reads as `zero`.
    pub fn new(zero: T) -> Self {
        Self {
            zero,
            values: Vec::new(),
            row_offsets: vec![0],
            columns: Vec::new(),
        }
    }

    /// Lazy dense generator over a `rows x columns` grid.
    ///
    /// Call [`DenseGrid::cells`] to walk `(row, column, value)` triples, or
    /// [`DenseGrid::build`] to populate a matrix.
    pub fn grid<F>(rows: usize, columns: usize, generator: F) -> DenseGrid<F>
    where
        F: Fn(usize, usize) -> T,
    {
        DenseGrid::new(rows, columns, generator)
    }

    /// Adopt raw Yale arrays after checking the layout invariants.
    pub fn from_raw_parts(
        zero: T,
        values: Vec<T>,
        row_offsets: Vec<usize>,
        columns: Vec<usize>,
    ) -> Result<Self, YaleError> {
        if let Err(e) = validate_layout(values.len(), &row_offsets, &columns) {
            debug!(error = %e, "rejected raw yale arrays");
            return Err(e);
        }
        Ok(Self { zero, values, row_offsets, columns })
    }

    pub fn zero(&self) -> &T {
        &self.zero
    }

    /// Stored entries in packed order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Row start offsets, `row_count() + 1` long.
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// Column index of each stored entry.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_offsets.len() - 1
    }

    /// One past the largest stored column index, or 0 when nothing is stored.
    /// Saturates at `usize::MAX` for an entry in column `usize::MAX`.
    pub fn column_count(&self) -> usize {
        self.columns.iter().max().map_or(0, |&c| c.saturating_add(1))
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Number of stored entries, read from the last row offset.
    pub fn nonzero_count(&self) -> usize {
        self.row_offsets[self.row_count()]
    }

    pub fn nnz(&self) -> usize {
        self.nonzero_count()
    }

    pub fn is_empty(&self) -> bool {
        self.nonzero_count() == 0
    }

    /// Stored fraction of the `rows x columns` grid. NaN when either is 0.
    pub fn density(&self) -> f64 {
        self.nonzero_count() as f64 / (self.row_count() as f64 * self.column_count() as f64)
    }

    /// Like [`density`](Self::density) but rejects an empty dimension.
    pub fn checked_density(&self) -> Result<f64, YaleError> {
        let (rows, columns) = self.shape();
        if rows == 0 || columns == 0 {
            return Err(YaleError::EmptyDimension { rows, columns });
        }
        Ok(self.density())
    }

    /// True when the packed arrays are smaller than a dense grid:
    /// `NNZ < (m (n - 1) - 1) / 2`.
    pub fn is_efficient(&self) -> bool {
        let m = self.row_count() as i128;
        let n = self.column_count() as i128;
        (self.nonzero_count() as i128) < (m * (n - 1) - 1) / 2
    }

    /// Value at `(row, column)`, or `zero` for unset or out of range cells.
    pub fn get(&self, row: usize, column: usize) -> &T {
        match self.element_index(row, column) {
            Some(k) => &self.values[k],
            None => &self.zero,
        }
    }

    /// Store `value` at `(row, column)`, growing the row count if needed.
    ///
    /// Columns stay sorted within the row. Writing `zero` stores an explicit
    /// entry; there is no removal.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> &T {
        let rows = self.row_count();
        if row >= rows {
            self.add_rows(row - rows + 1);
        }

        let (start, end) = (self.row_offsets[row], self.row_offsets[row + 1]);
        let index = match (start..end).find(|&k| self.columns[k] >= column) {
            Some(k) if self.columns[k] == column => {
                self.values[k] = value;
                return &self.values[k];
            }
            Some(k) => k,
            None => end,
        };

        self.values.insert(index, value);
        self.columns.insert(index, column);
        for offset in &mut self.row_offsets[row + 1..] {
            *offset += 1;
        }
        trace!(row, column, index, nnz = self.nonzero_count(), "inserted entry");
        &self.values[index]
    }

    /// Entries of one row as `(column, value)`; empty for rows out of range.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        let (start, end) = self.row_span(row).unwrap_or((0, 0));
        self.columns[start..end]
            .iter()
            .copied()
            .zip(&self.values[start..end])
    }

    /// Stored values in packed order.
    pub fn iter(&self) -> Values<'_, T> {
        Values::stored(self)
    }

    /// Values in packed order, or the full dense grid when `include_zeros`.
    pub fn values_iter(&self, include_zeros: bool) -> Values<'_, T> {
        if include_zeros {
            Values::dense(self)
        } else {
            Values::stored(self)
        }
    }

    /// `(value, row, column)` triples, stored entries only or the full grid.
    pub fn indexed_iter(&self, include_zeros: bool) -> Indexed<'_, T> {
        if include_zeros {
            Indexed::dense(self)
        } else {
            Indexed::stored(self)
        }
    }

    /// True if some stored entry equals `value`. Unset cells are not searched.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.contains(value)
    }

    /// First `(row, column)` in packed order whose stored value equals `value`.
    pub fn index_of(&self, value: &T) -> Option<(usize, usize)>
    where
        T: PartialEq,
    {
        self.indexed_iter(false)
            .find(|(v, _, _)| *v == value)
            .map(|(_, row, column)| (row, column))
    }

    /// New matrix with the same sparsity pattern and each stored value
    /// passed through `transform`. Entries mapped to `zero` stay stored.
    pub fn map<F>(&self, transform: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> T,
    {
        Self {
            zero: self.zero.clone(),
            values: self.values.iter().map(transform).collect(),
            row_offsets: self.row_offsets.clone(),
            columns: self.columns.clone(),
        }
    }

    /// Dense rendering annotated with efficiency and density.
    pub fn inspect(&self, include_zeros: bool) -> String
    where
        T: fmt::Debug + PartialEq,
    {
        self.inspect_with(&InspectOptions::with_zeros(include_zeros))
    }

    pub fn inspect_with(&self, opts: &InspectOptions) -> String
    where
        T: fmt::Debug + PartialEq,
    {
        inspect::render("YaleSparseMatrix", self, opts)
    }

    fn add_rows(&mut self, count: usize) {
        let nnz = self.nonzero_count();
        self.row_offsets.resize(self.row_offsets.len() + count, nnz);
        trace!(count, rows = self.row_count(), "grew row offsets");
    }

    fn row_span(&self, row: usize) -> Option<(usize, usize)> {
        let start = *self.row_offsets.get(row)?;
        let end = *self.row_offsets.get(row.checked_add(1)?)?;
        Some((start, end))
    }

    fn element_index(&self, row: usize, column: usize) -> Option<usize> {
        let (start, end) = self.row_span(row)?;
        for k in start..end {
            let current = self.columns[k];
            if current == column {
                return Some(k);
            }
            if current > column {
                return None;
            }
        }
        None
    }
}

impl<T: PartialEq> YaleSparseMatrix<T> {
    /// Populate a matrix from a dense generator, storing every value that
    /// differs from `zero`.
    pub fn build<F>(zero: T, rows: usize, columns: usize, generator: F) -> Self
    where
        F: Fn(usize, usize) -> T,
    {
        DenseGrid::new(rows, columns, generator).build(zero)
    }
}

impl<T: Zero> YaleSparseMatrix<T> {
    /// Empty matrix whose sentinel is the numeric zero.
    pub fn new_zeroed() -> Self {
        Self::new(T::zero())
    }
}

fn validate_layout(nnz: usize, row_offsets: &[usize], columns: &[usize]) -> Result<(), YaleError> {
    let first = *row_offsets.first().ok_or(YaleError::MissingRowOffsets)?;
    if first != 0 {
        return Err(YaleError::NonZeroFirstOffset(first));
    }
    if nnz != columns.len() {
        return Err(YaleError::LengthMismatch { values: nnz, columns: columns.len() });
    }
    for (row, w) in row_offsets.windows(2).enumerate() {
        if w[0] > w[1] {
            return Err(YaleError::DecreasingOffsets { row, start: w[0], end: w[1] });
        }
    }
    let last = row_offsets[row_offsets.len() - 1];
    if last != nnz {
        return Err(YaleError::OffsetCountMismatch { last, nnz });
    }
    for (row, w) in row_offsets.windows(2).enumerate() {
        for pair in columns[w[0]..w[1]].windows(2) {
            if pair[0] >= pair[1] {
                return Err(YaleError::UnsortedColumns { row, prev: pair[0], next: pair[1] });
            }
        }
    }
    Ok(())
}

/// Equality on the packed arrays; the sentinel is not compared.
impl<T: PartialEq> PartialEq for YaleSparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nonzero_count() == other.nonzero_count()
            && self.values == other.values
            && self.row_offsets == other.row_offsets
            && self.columns == other.columns
    }
}

impl<T: Eq> Eq for YaleSparseMatrix<T> {}

impl<T: Zero> Default for YaleSparseMatrix<T> {
    fn default() -> Self {
        Self::new_zeroed()
    }
}

impl<T> Index<(usize, usize)> for YaleSparseMatrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        self.get(row, column)
    }
}

impl<T> Extend<(usize, usize, T)> for YaleSparseMatrix<T> {
    fn extend<I: IntoIterator<Item = (usize, usize, T)>>(&mut self, iter: I) {
        for (row, column, value) in iter {
            self.set(row, column, value);
        }
    }
}

impl<T: Zero> FromIterator<(usize, usize, T)> for YaleSparseMatrix<T> {
    fn from_iter<I: IntoIterator<Item = (usize, usize, T)>>(iter: I) -> Self {
        let mut m = Self::new_zeroed();
        m.extend(iter);
        m
    }
}

impl<'a, T> IntoIterator for &'a YaleSparseMatrix<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Values<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug + PartialEq> fmt::Display for YaleSparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect(false))
    }
}

impl<T> MatShape for YaleSparseMatrix<T> {
    fn nrows(&self) -> usize {
        self.row_count()
    }
    fn ncols(&self) -> usize {
        self.column_count()
    }
}

impl<T> MatrixGet<T> for YaleSparseMatrix<T> {
    fn get(&self, i: usize, j: usize) -> &T {
        YaleSparseMatrix::get(self, i, j)
    }
    fn zero(&self) -> &T {
        &self.zero
    }
}

impl<T> SparseStorage for YaleSparseMatrix<T> {
    fn nnz(&self) -> usize {
        self.nonzero_count()
    }
    fn density(&self) -> f64 {
        YaleSparseMatrix::density(self)
    }
    fn is_efficient(&self) -> bool {
        YaleSparseMatrix::is_efficient(self)
    }
}
