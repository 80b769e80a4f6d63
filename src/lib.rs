//! yale-sparse: a sparse matrix in the Yale (compressed sparse row) format.
//!
//! The matrix keeps its stored entries in three packed arrays (values, row
//! offsets, column indices) and answers every unset cell with a fixed "zero"
//! sentinel. Writes keep each row's column indices sorted, so the packed
//! layout for a given set of cells is canonical.
//!
//! The type is single-threaded; share it across threads behind one lock
//! that covers both reads and writes.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;
