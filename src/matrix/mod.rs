//! Matrix module: the Yale sparse matrix, its generators and iterators.

pub mod build;
pub mod iter;
pub mod yale;

pub use build::DenseGrid;
pub use iter::{Indexed, Values};
pub use yale::YaleSparseMatrix;
