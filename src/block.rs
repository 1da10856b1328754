//! A single diagonal block, stored as the vector of its diagonal entries.

use crate::scalar::Scalar;

/// One square block of a block matrix, with nonzero entries only on its
/// own main diagonal.
///
/// The block is stored compactly as the vector of diagonal values; its
/// expanded form is a `len() x len()` matrix that is zero off the
/// diagonal. A block whose entries are all zero stands for "no
/// contribution" at its grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalBlock<T: Scalar> {
    diag: Vec<T>,
}

impl<T: Scalar> DiagonalBlock<T> {
    /// Create a block from its diagonal entries.
    pub fn new(diag: Vec<T>) -> Self {
        Self { diag }
    }

    /// Create an all-zero block of the given size.
    pub fn zeros(len: usize) -> Self {
        Self {
            diag: vec![T::zero(); len],
        }
    }

    /// Number of diagonal entries (the side length of the expanded block).
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    /// Check if the block has no entries.
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Check if every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.diag.iter().all(|v| v.is_zero())
    }

    /// The diagonal entries.
    pub fn as_slice(&self) -> &[T] {
        &self.diag
    }

    /// Get the diagonal entry at `idx`.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    pub fn get(&self, idx: usize) -> T {
        self.diag[idx]
    }

    /// Element-wise sum of two blocks.
    ///
    /// # Panics
    /// Panics if the blocks have different sizes.
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.len(), other.len(), "Block size mismatch in add");
        Self {
            diag: self
                .diag
                .iter()
                .zip(&other.diag)
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }

    /// Accumulate the element-wise product of `lhs` and `rhs` into this block.
    ///
    /// Two diagonal blocks multiply entry by entry on their diagonals, so
    /// this is the per-block kernel of the block matrix product.
    ///
    /// # Panics
    /// Panics if the block sizes differ.
    pub(crate) fn accumulate_product(&mut self, lhs: &Self, rhs: &Self) {
        assert_eq!(lhs.len(), rhs.len(), "Block size mismatch in multiply");
        assert_eq!(self.len(), lhs.len(), "Block size mismatch in multiply");
        for (acc, (&a, &b)) in self.diag.iter_mut().zip(lhs.diag.iter().zip(&rhs.diag)) {
            *acc = *acc + a * b;
        }
    }
}

impl<T: Scalar> From<Vec<T>> for DiagonalBlock<T> {
    fn from(diag: Vec<T>) -> Self {
        Self::new(diag)
    }
}
