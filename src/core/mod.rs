//! Core traits shared by the matrix type and the diagnostic helpers.

pub mod traits;
pub use traits::{MatShape, MatrixGet, SparseStorage};
