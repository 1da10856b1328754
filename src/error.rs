//! Error types for blockdiag

use thiserror::Error;

/// Errors that can occur during block matrix operations
#[derive(Debug, Error)]
pub enum BlockMatrixError {
    /// Construction input is empty, ragged, or has unevenly sized blocks
    #[error("Invalid block structure: {message}")]
    InvalidArgument { message: String },

    /// Block grids are incompatible for the requested operation
    #[error("Block grid mismatch: ({lhs_rows}, {lhs_cols}) is incompatible with ({rhs_rows}, {rhs_cols})")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Inversion requires a square matrix
    #[error("Cannot invert a non-square matrix of shape ({rows}, {cols})")]
    NotSquare { rows: usize, cols: usize },

    /// A diagonal block holds a zero entry, so the matrix has no inverse
    #[error("Matrix is not invertible: diagonal block {block} has a zero entry at position {entry}")]
    ZeroDiagonalEntry { block: usize, entry: usize },

    /// The dense fallback found the matrix to be singular
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,
}

/// Result type for block matrix operations
pub type Result<T> = std::result::Result<T, BlockMatrixError>;
