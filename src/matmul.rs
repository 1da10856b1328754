//! Block matrix multiplication.

use crate::block::DiagonalBlock;
use crate::error::{BlockMatrixError, Result};
use crate::matrix::DiagonalBlockMatrix;
use crate::scalar::Scalar;

impl<T: Scalar> DiagonalBlockMatrix<T> {
    /// Multiply with another block matrix.
    ///
    /// Two diagonal blocks multiply entry by entry on their diagonals, so
    /// block `(i, j)` of the product accumulates
    /// `self[i][k] * other[k][j]` element-wise over the inner index `k`.
    /// The result grid is `self.block_rows x other.block_cols` with the
    /// same block size.
    ///
    /// The computation stays on the compact diagonal vectors throughout
    /// (`O(block_rows * block_cols * inner * block_size)`); no dense form
    /// is materialized. Pairs with an all-zero operand contribute nothing
    /// and are skipped.
    ///
    /// # Errors
    /// Returns [`BlockMatrixError::DimensionMismatch`] if
    /// `self.block_cols != other.block_rows`. Block sizes are not
    /// separately checked; a mismatch panics at the block level.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.block_cols() != other.block_rows() {
            return Err(BlockMatrixError::DimensionMismatch {
                lhs_rows: self.block_rows(),
                lhs_cols: self.block_cols(),
                rhs_rows: other.block_rows(),
                rhs_cols: other.block_cols(),
            });
        }

        let size = self.block_size();
        let mut result: Vec<Vec<DiagonalBlock<T>>> = (0..self.block_rows())
            .map(|_| {
                (0..other.block_cols())
                    .map(|_| DiagonalBlock::zeros(size))
                    .collect()
            })
            .collect();

        for (i, result_row) in result.iter_mut().enumerate() {
            for (j, acc) in result_row.iter_mut().enumerate() {
                for k in 0..self.block_cols() {
                    let lhs = self.block(i, k);
                    let rhs = other.block(k, j);
                    if lhs.is_zero() || rhs.is_zero() {
                        continue;
                    }
                    acc.accumulate_product(lhs, rhs);
                }
            }
        }

        Self::new(result)
    }
}
