//! Core matrix traits for yale-sparse.

/// Logical extent of a matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Element read at `(i, j)`.
pub trait MatrixGet<T> {
    /// Value at row `i`, column `j`; unset cells read as [`zero`](Self::zero).
    fn get(&self, i: usize, j: usize) -> &T;
    /// The value that stands for an unset cell.
    fn zero(&self) -> &T;
}

/// Storage accounting for packed formats.
pub trait SparseStorage {
    /// Number of explicitly stored entries.
    fn nnz(&self) -> usize;
    /// Stored fraction of the logical grid.
    fn density(&self) -> f64;
    /// Whether packed storage beats a dense array.
    fn is_efficient(&self) -> bool;
}
