//! Human-readable dense rendering of a sparse matrix.
//!
//! Output is diagnostic only, e.g.
//!
//! ```text
//! YaleSparseMatrix[
//! [],
//! [5, 8],
//! [3],
//! [6]] # not efficient 33.33% density
//! ```

use std::fmt::{Debug, Write};

use crate::config::{InspectFlags, InspectOptions};
use crate::core::traits::{MatShape, MatrixGet, SparseStorage};

/// Render `matrix` row by row through `get`, followed by the annotation
/// selected in `opts`.
pub fn render<M, T>(name: &str, matrix: &M, opts: &InspectOptions) -> String
where
    M: MatShape + MatrixGet<T> + SparseStorage,
    T: Debug + PartialEq,
{
    let keep_zeros = opts.flags.contains(InspectFlags::INCLUDE_ZEROS);
    let rows: Vec<String> = (0..matrix.nrows())
        .map(|i| {
            let cells: Vec<&T> = (0..matrix.ncols())
                .map(|j| matrix.get(i, j))
                .filter(|v| keep_zeros || *v != matrix.zero())
                .collect();
            format!("{cells:?}")
        })
        .collect();

    let mut out = format!("{name}[\n{}]", rows.join(",\n"));

    let mut notes = String::new();
    if opts.flags.contains(InspectFlags::EFFICIENCY) {
        notes.push_str(if matrix.is_efficient() { "efficient" } else { "not efficient" });
    }
    if opts.flags.contains(InspectFlags::DENSITY) {
        if !notes.is_empty() {
            notes.push(' ');
        }
        let _ = write!(notes, "{:.*}% density", opts.precision, matrix.density() * 100.0);
    }
    if !notes.is_empty() {
        let _ = write!(out, " # {notes}");
    }
    out
}
