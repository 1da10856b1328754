//! Block matrices with diagonal blocks.
//!
//! This crate provides [`DiagonalBlockMatrix`], a matrix partitioned into
//! a grid of square, equally sized blocks where every block is itself
//! diagonal. Each block is stored compactly as the vector of its diagonal
//! entries, so a `block_rows x block_cols` grid of `block_size`-sized
//! blocks costs `block_rows * block_cols * block_size` scalars instead of
//! the full dense `(block_rows * block_size) * (block_cols * block_size)`.
//!
//! # Design
//!
//! - Values are immutable; operations take `&self` and return new values.
//! - Addition and multiplication work block-wise on the compact diagonal
//!   vectors and never expand to dense form. Two diagonal blocks multiply
//!   element-wise on their diagonals, which keeps the product of two block
//!   matrices in the same representation.
//! - Inversion is structured: a block-diagonal matrix inverts block by
//!   block via element-wise reciprocals, anything else falls back to a
//!   dense LU inverse. The [`Inverse`] enum makes the two result shapes
//!   explicit.
//!
//! # Core Types
//!
//! - [`DiagonalBlock`]: one diagonal block as a vector of diagonal entries
//! - [`DiagonalBlockMatrix`]: the block grid with derived dimensions
//! - [`Inverse`]: tagged result of [`DiagonalBlockMatrix::invert`]
//! - [`DenseMatrix`]: dense counterpart (mdarray `DTensor<T, 2>`)
//!
//! # Example
//!
//! ```
//! use blockdiag::DiagonalBlockMatrix;
//!
//! // 2x2 grid of 2x2 diagonal blocks; the second block row only has a
//! // contribution in its diagonal position.
//! let m = DiagonalBlockMatrix::from_diagonals(vec![
//!     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
//!     vec![vec![0.0, 0.0], vec![5.0, 6.0]],
//! ])
//! .unwrap();
//!
//! assert_eq!(m.shape(), (4, 4));
//! assert!(!m.is_block_diagonal());
//!
//! let product = m.multiply(&m).unwrap();
//! assert_eq!(product.block(0, 1).as_slice(), &[18.0, 32.0]);
//! ```

mod block;
pub mod dense;
mod error;
mod matmul;
mod matrix;
mod scalar;

pub use block::DiagonalBlock;
pub use dense::DenseMatrix;
pub use error::{BlockMatrixError, Result};
pub use matrix::{DiagonalBlockMatrix, Inverse};
pub use scalar::Scalar;
