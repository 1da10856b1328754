//! Dense matrix helpers backed by mdarray.
//!
//! The dense representation is only ever produced on demand, either by
//! [`DiagonalBlockMatrix::to_dense`](crate::DiagonalBlockMatrix::to_dense)
//! or as the fallback result of inversion; the block operations themselves
//! never materialize it.

use mdarray::DTensor;

use crate::error::{BlockMatrixError, Result};
use crate::scalar::Scalar;

/// Dense row-major matrix.
pub type DenseMatrix<T> = DTensor<T, 2>;

/// Number of rows.
pub fn nrows<T: Scalar>(m: &DenseMatrix<T>) -> usize {
    m.shape().0
}

/// Number of columns.
pub fn ncols<T: Scalar>(m: &DenseMatrix<T>) -> usize {
    m.shape().1
}

/// Zero matrix of the given size.
pub fn zeros<T: Scalar>(nr: usize, nc: usize) -> DenseMatrix<T> {
    DTensor::<T, 2>::from_fn([nr, nc], |_| T::zero())
}

/// Identity matrix of size `n`.
pub fn eye<T: Scalar>(n: usize) -> DenseMatrix<T> {
    DTensor::<T, 2>::from_fn([n, n], |idx| if idx[0] == idx[1] { T::one() } else { T::zero() })
}

/// Build a matrix from nested rows.
///
/// # Panics
/// Panics if the rows are ragged.
pub fn from_vec2d<T: Scalar>(rows: Vec<Vec<T>>) -> DenseMatrix<T> {
    let nr = rows.len();
    let nc = if nr > 0 { rows[0].len() } else { 0 };
    DTensor::<T, 2>::from_fn([nr, nc], |idx| rows[idx[0]][idx[1]])
}

/// Naive dense product, used as a reference in tests and benches.
///
/// # Panics
/// Panics if the inner dimensions do not match.
pub fn mat_mul<T: Scalar>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    assert_eq!(ncols(a), nrows(b), "Inner dimensions must match");
    let m = nrows(a);
    let k = ncols(a);
    let n = ncols(b);

    let mut c = zeros(m, n);
    for i in 0..m {
        for l in 0..k {
            let a_il = a[[i, l]];
            for j in 0..n {
                let old = c[[i, j]];
                c[[i, j]] = old + a_il * b[[l, j]];
            }
        }
    }
    c
}

fn swap_rows<T: Scalar>(m: &mut DenseMatrix<T>, r1: usize, r2: usize) {
    for j in 0..ncols(m) {
        let tmp = m[[r1, j]];
        m[[r1, j]] = m[[r2, j]];
        m[[r2, j]] = tmp;
    }
}

/// Invert a square dense matrix.
///
/// Factors `P * A = L * U` in place with partial pivoting (pivot chosen by
/// largest absolute value in the column), then solves `L * U * x = P * e_c`
/// for each unit column by forward and back substitution.
///
/// # Errors
/// - [`BlockMatrixError::NotSquare`] if the matrix is not square.
/// - [`BlockMatrixError::SingularMatrix`] if a pivot falls below machine
///   epsilon, which would divide by (near) zero.
pub fn invert_dense<T: Scalar>(a: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    let n = nrows(a);
    if ncols(a) != n {
        return Err(BlockMatrixError::NotSquare {
            rows: n,
            cols: ncols(a),
        });
    }

    let mut lu = a.clone();
    let mut perm: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Find pivot with maximum absolute value in column k
        let mut pivot_row = k;
        let mut pivot_abs = lu[[k, k]].abs_val();
        for i in (k + 1)..n {
            let v = lu[[i, k]].abs_val();
            if v > pivot_abs {
                pivot_abs = v;
                pivot_row = i;
            }
        }

        // Guard against near-zero pivot to prevent NaN from division
        if pivot_abs < f64::EPSILON {
            return Err(BlockMatrixError::SingularMatrix);
        }

        if pivot_row != k {
            swap_rows(&mut lu, k, pivot_row);
            perm.swap(k, pivot_row);
        }

        let pivot = lu[[k, k]];

        // Eliminate below the pivot, storing the multipliers in place
        for i in (k + 1)..n {
            let factor = lu[[i, k]] / pivot;
            lu[[i, k]] = factor;
            for j in (k + 1)..n {
                let old = lu[[i, j]];
                lu[[i, j]] = old - factor * lu[[k, j]];
            }
        }
    }

    // Solve L * U * x = P * e_c for each unit column
    let mut inv = zeros(n, n);
    let mut col = vec![T::zero(); n];
    for c in 0..n {
        for i in 0..n {
            col[i] = if perm[i] == c { T::one() } else { T::zero() };
        }

        // Forward substitution (L has unit diagonal)
        for i in 0..n {
            let mut sum = col[i];
            for j in 0..i {
                sum = sum - lu[[i, j]] * col[j];
            }
            col[i] = sum;
        }

        // Back substitution
        for i in (0..n).rev() {
            let mut sum = col[i];
            for j in (i + 1)..n {
                sum = sum - lu[[i, j]] * col[j];
            }
            col[i] = sum / lu[[i, i]];
        }

        for i in 0..n {
            inv[[i, c]] = col[i];
        }
    }

    Ok(inv)
}
