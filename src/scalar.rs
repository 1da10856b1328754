//! Common scalar trait for block and dense matrix operations.

use std::fmt::Debug;

use num_complex::{Complex32, Complex64};
use num_traits::{One, Zero};

/// Scalar trait for matrix elements.
///
/// This trait defines the minimal requirements for element types used in
/// block matrices and their dense counterparts. The magnitude methods
/// drive pivot selection in the dense LU factorization.
pub trait Scalar:
    Clone
    + Copy
    + Debug
    + Default
    + PartialEq
    + Zero
    + One
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Square of the absolute value (for complex numbers, |z|^2).
    fn abs_sq(self) -> f64;

    /// Absolute value as f64.
    fn abs_val(self) -> f64 {
        self.abs_sq().sqrt()
    }

    /// Create from f64 value.
    fn from_f64(val: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn abs_sq(self) -> f64 {
        self * self
    }

    #[inline]
    fn abs_val(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val
    }
}

impl Scalar for f32 {
    #[inline]
    fn abs_sq(self) -> f64 {
        (self * self) as f64
    }

    #[inline]
    fn abs_val(self) -> f64 {
        self.abs() as f64
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val as f32
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn abs_sq(self) -> f64 {
        self.norm_sqr()
    }

    #[inline]
    fn abs_val(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        Complex64::new(val, 0.0)
    }
}

impl Scalar for Complex32 {
    #[inline]
    fn abs_sq(self) -> f64 {
        self.norm_sqr() as f64
    }

    #[inline]
    fn abs_val(self) -> f64 {
        self.norm() as f64
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        Complex32::new(val as f32, 0.0)
    }
}

/// Macro to generate f64 and Complex64 test variants from a generic test function.
///
/// # Example
///
/// ```ignore
/// fn test_operation_generic<T: Scalar>() {
///     // test implementation
/// }
///
/// blockdiag::scalar_tests!(test_operation, test_operation_generic);
/// // Generates:
/// // #[test] fn test_operation_f64() { test_operation_generic::<f64>(); }
/// // #[test] fn test_operation_c64() { test_operation_generic::<Complex64>(); }
/// ```
#[macro_export]
macro_rules! scalar_tests {
    ($name:ident, $test_fn:ident) => {
        paste::paste! {
            #[test]
            fn [<$name _f64>]() {
                $test_fn::<f64>();
            }

            #[test]
            fn [<$name _c64>]() {
                $test_fn::<num_complex::Complex64>();
            }
        }
    };
}
