use crate::algebra::Axis;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned when a compressed (CSR/CSC) matrix fails validation.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Major axis pointers are not non-decreasing from zero to nnz
    #[error("Bad major axis pointer values")]
    BadMajorPointers,
    /// A minor index exceeds the matrix minor dimension
    #[error("Minor index exceeds the matrix minor dimension")]
    BadMinorIndex,
    /// Minor indices are not strictly increasing within a major slice
    #[error("Minor indices are not strictly increasing within each major slice")]
    BadMinorOrdering,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse table construction and conversion.
pub enum SparseMatrixError {
    /// The row, column and value arrays have different lengths
    #[error("Triplet arrays have different lengths (rows = {rows}, cols = {cols}, values = {values})")]
    LengthMismatch {
        rows: usize,
        cols: usize,
        values: usize,
    },
    /// A coordinate is negative or not less than its dimension
    #[error("Triplet {entry} has {axis} index {index} outside of dimension {dim}")]
    InvalidIndex {
        entry: usize,
        axis: Axis,
        index: i128,
        dim: usize,
    },
    /// Dense materialization was requested above the configured cell limit
    #[error("Dense materialization of {cells} cells exceeds the limit of {limit}")]
    TooLarge { cells: usize, limit: usize },
    /// A set of labels does not match the matrix dimension it annotates
    #[error("Expected {expected} {axis} labels, found {found}")]
    LabelCountMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },
    /// A compressed input failed format validation
    #[error("Invalid compressed input: {0}")]
    Format(#[from] SparseFormatError),
}
