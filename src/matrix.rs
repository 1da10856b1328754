//! Block matrix with diagonal blocks.

use crate::block::DiagonalBlock;
use crate::dense::{self, DenseMatrix};
use crate::error::{BlockMatrixError, Result};
use crate::scalar::Scalar;

/// A block matrix whose blocks are all square, equally sized, and diagonal.
///
/// The matrix is partitioned into a `block_rows x block_cols` grid of
/// `block_size x block_size` blocks, each stored compactly as the vector
/// of its diagonal entries (see [`DiagonalBlock`]). The equivalent dense
/// matrix has shape `(block_rows * block_size, block_cols * block_size)`.
///
/// Values are immutable after construction: every operation takes `&self`
/// and returns a new matrix (or a dense fallback, for inversion).
#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalBlockMatrix<T: Scalar> {
    /// Block grid, rows outer, columns inner.
    blocks: Vec<Vec<DiagonalBlock<T>>>,
    /// Number of block rows.
    block_rows: usize,
    /// Number of block columns.
    block_cols: usize,
    /// Side length of every block.
    block_size: usize,
}

impl<T: Scalar> DiagonalBlockMatrix<T> {
    /// Create a block matrix from a grid of diagonal blocks.
    ///
    /// The grid must be non-empty and rectangular, and every block must
    /// have the same nonzero size; otherwise the derived dimensions would
    /// be meaningless.
    ///
    /// # Errors
    /// Returns [`BlockMatrixError::InvalidArgument`] if the grid is empty,
    /// ragged, or holds unevenly sized blocks.
    pub fn new(blocks: Vec<Vec<DiagonalBlock<T>>>) -> Result<Self> {
        let block_rows = blocks.len();
        if block_rows == 0 {
            return Err(BlockMatrixError::InvalidArgument {
                message: "block grid has no rows".to_string(),
            });
        }

        let block_cols = blocks[0].len();
        if block_cols == 0 {
            return Err(BlockMatrixError::InvalidArgument {
                message: "block grid has no columns".to_string(),
            });
        }

        let block_size = blocks[0][0].len();
        if block_size == 0 {
            return Err(BlockMatrixError::InvalidArgument {
                message: "blocks have no diagonal entries".to_string(),
            });
        }

        for (i, row) in blocks.iter().enumerate() {
            if row.len() != block_cols {
                return Err(BlockMatrixError::InvalidArgument {
                    message: format!(
                        "block row {i} has {} blocks, expected {block_cols}",
                        row.len()
                    ),
                });
            }
            for (j, block) in row.iter().enumerate() {
                if block.len() != block_size {
                    return Err(BlockMatrixError::InvalidArgument {
                        message: format!(
                            "block ({i}, {j}) has {} entries, expected {block_size}",
                            block.len()
                        ),
                    });
                }
            }
        }

        Ok(Self {
            blocks,
            block_rows,
            block_cols,
            block_size,
        })
    }

    /// Create a block matrix from nested vectors of diagonal entries
    /// (block rows outer, block columns inner).
    ///
    /// # Errors
    /// Same validation as [`DiagonalBlockMatrix::new`].
    pub fn from_diagonals(diagonals: Vec<Vec<Vec<T>>>) -> Result<Self> {
        let blocks = diagonals
            .into_iter()
            .map(|row| row.into_iter().map(DiagonalBlock::new).collect())
            .collect();
        Self::new(blocks)
    }

    /// All-zero block matrix with the given grid and block size.
    pub fn zeros(block_rows: usize, block_cols: usize, block_size: usize) -> Result<Self> {
        Self::new(vec![
            vec![DiagonalBlock::zeros(block_size); block_cols];
            block_rows
        ])
    }

    /// Block-diagonal identity matrix with the given grid and block size.
    pub fn identity(block_rows: usize, block_size: usize) -> Result<Self> {
        let mut blocks = vec![vec![DiagonalBlock::zeros(block_size); block_rows]; block_rows];
        for (i, row) in blocks.iter_mut().enumerate() {
            row[i] = DiagonalBlock::new(vec![T::one(); block_size]);
        }
        Self::new(blocks)
    }

    /// Number of block rows.
    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    /// Number of block columns.
    pub fn block_cols(&self) -> usize {
        self.block_cols
    }

    /// Side length of every block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Shape of the equivalent dense matrix.
    pub fn shape(&self) -> (usize, usize) {
        (
            self.block_rows * self.block_size,
            self.block_cols * self.block_size,
        )
    }

    /// Whether the dense shape is square.
    pub fn is_square(&self) -> bool {
        self.block_rows == self.block_cols
    }

    /// Get the block at grid position `(i, j)`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn block(&self, i: usize, j: usize) -> &DiagonalBlock<T> {
        &self.blocks[i][j]
    }

    /// Expand to the dense representation.
    ///
    /// Each block's entries land on the diagonal of its
    /// `block_size x block_size` sub-region; everything else stays zero.
    /// All-zero blocks are skipped, which leaves their (already zero)
    /// sub-region untouched.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let (rows, cols) = self.shape();
        let mut dense = dense::zeros(rows, cols);
        for i in 0..self.block_rows {
            for j in 0..self.block_cols {
                let block = &self.blocks[i][j];
                if block.is_zero() {
                    continue;
                }
                let start_row = i * self.block_size;
                let start_col = j * self.block_size;
                for (p, &v) in block.as_slice().iter().enumerate() {
                    dense[[start_row + p, start_col + p]] = v;
                }
            }
        }
        dense
    }

    /// Element-wise sum with another block matrix.
    ///
    /// # Errors
    /// Returns [`BlockMatrixError::DimensionMismatch`] if the block grids
    /// differ. Block sizes are not separately checked; a mismatch panics
    /// at the block level.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.block_rows != other.block_rows || self.block_cols != other.block_cols {
            return Err(BlockMatrixError::DimensionMismatch {
                lhs_rows: self.block_rows,
                lhs_cols: self.block_cols,
                rhs_rows: other.block_rows,
                rhs_cols: other.block_cols,
            });
        }

        let blocks = self
            .blocks
            .iter()
            .zip(&other.blocks)
            .map(|(lhs_row, rhs_row)| {
                lhs_row
                    .iter()
                    .zip(rhs_row)
                    .map(|(lhs, rhs)| lhs.add(rhs))
                    .collect()
            })
            .collect();
        Self::new(blocks)
    }

    /// Check if the matrix is block diagonal, i.e. every off-diagonal
    /// block position is entirely zero.
    pub fn is_block_diagonal(&self) -> bool {
        for i in 0..self.block_rows {
            for j in 0..self.block_cols {
                if i != j && !self.blocks[i][j].is_zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Invert the matrix.
    ///
    /// A structurally block-diagonal matrix inverts block by block: the
    /// inverse of a diagonal block is the element-wise reciprocal of its
    /// diagonal, so the result keeps the block structure and comes back as
    /// [`Inverse::BlockDiagonal`]. Any other matrix falls back to the
    /// dense LU routine and comes back as [`Inverse::Dense`], since its
    /// inverse has no diagonal-block structure in general.
    ///
    /// # Errors
    /// - [`BlockMatrixError::NotSquare`] if the block grid is not square.
    /// - [`BlockMatrixError::ZeroDiagonalEntry`] if a diagonal block holds
    ///   a zero entry (fast path).
    /// - [`BlockMatrixError::SingularMatrix`] if the dense fallback finds
    ///   the matrix singular.
    pub fn invert(&self) -> Result<Inverse<T>> {
        if !self.is_square() {
            let (rows, cols) = self.shape();
            return Err(BlockMatrixError::NotSquare { rows, cols });
        }

        if self.is_block_diagonal() {
            let mut blocks = Vec::with_capacity(self.block_rows);
            for i in 0..self.block_rows {
                let mut row = Vec::with_capacity(self.block_cols);
                for j in 0..self.block_cols {
                    if i == j {
                        let block = self.block(i, i);
                        let mut recip = Vec::with_capacity(self.block_size);
                        for (p, &v) in block.as_slice().iter().enumerate() {
                            if v.is_zero() {
                                return Err(BlockMatrixError::ZeroDiagonalEntry {
                                    block: i,
                                    entry: p,
                                });
                            }
                            recip.push(T::one() / v);
                        }
                        row.push(DiagonalBlock::new(recip));
                    } else {
                        row.push(DiagonalBlock::zeros(self.block_size));
                    }
                }
                blocks.push(row);
            }
            Ok(Inverse::BlockDiagonal(Self::new(blocks)?))
        } else {
            let inverted = dense::invert_dense(&self.to_dense())?;
            Ok(Inverse::Dense(inverted))
        }
    }
}

/// Result of [`DiagonalBlockMatrix::invert`].
///
/// The two cases make the shape of the result explicit: a block-diagonal
/// input keeps its structure, anything else degrades to a dense matrix.
#[derive(Debug, Clone)]
pub enum Inverse<T: Scalar> {
    /// The input was block diagonal; the inverse is too.
    BlockDiagonal(DiagonalBlockMatrix<T>),
    /// The input had off-diagonal blocks; the inverse is dense.
    Dense(DenseMatrix<T>),
}

impl<T: Scalar> Inverse<T> {
    /// Dense form of the inverse, whichever case it is.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        match self {
            Inverse::BlockDiagonal(m) => m.to_dense(),
            Inverse::Dense(m) => m.clone(),
        }
    }

    /// Whether the fast block-diagonal path produced this inverse.
    pub fn is_block_diagonal(&self) -> bool {
        matches!(self, Inverse::BlockDiagonal(_))
    }

    /// The structured inverse, if the fast path produced one.
    pub fn as_block_diagonal(&self) -> Option<&DiagonalBlockMatrix<T>> {
        match self {
            Inverse::BlockDiagonal(m) => Some(m),
            Inverse::Dense(_) => None,
        }
    }
}
