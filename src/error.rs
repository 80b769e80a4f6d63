use thiserror::Error;

// Unified error type for yale-sparse

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YaleError {
    #[error("row offsets must contain at least the leading 0")]
    MissingRowOffsets,
    #[error("row offsets must start at 0, found {0}")]
    NonZeroFirstOffset(usize),
    #[error("row offsets decrease at row {row}: {start} > {end}")]
    DecreasingOffsets { row: usize, start: usize, end: usize },
    #[error("length mismatch: {values} values but {columns} column indices")]
    LengthMismatch { values: usize, columns: usize },
    #[error("last row offset {last} does not match stored entry count {nnz}")]
    OffsetCountMismatch { last: usize, nnz: usize },
    #[error("column indices not strictly increasing in row {row}: {prev} then {next}")]
    UnsortedColumns { row: usize, prev: usize, next: usize },
    #[error("matrix has an empty dimension ({rows} x {columns})")]
    EmptyDimension { rows: usize, columns: usize },
}
