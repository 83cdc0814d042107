//! Linear algebra operations
//!
//! Thin bridge between the `ndarray` response tensors and `nalgebra`
//! factorizations. All ndarray<->nalgebra conversions live here so no
//! conversion code leaks into the model layer.

use nalgebra::DMatrix;
use ndarray::Array2;
use num_complex::Complex64;

/// Convert ndarray Array2<Complex64> to nalgebra DMatrix.
#[inline]
fn to_na(a: &Array2<Complex64>) -> DMatrix<Complex64> {
    let (m, n) = a.dim();
    DMatrix::from_fn(m, n, |i, j| a[[i, j]])
}

/// Convert nalgebra DMatrix back to ndarray Array2<Complex64>.
#[inline]
fn from_na(m: &DMatrix<Complex64>) -> Array2<Complex64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// Solve `A X = B` for a square complex `A` and matrix right-hand side.
///
/// Uses LU factorization rather than forming `A^-1`. Returns None when
/// `A` is singular or the dimensions are inconsistent.
pub fn solve_complex(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Option<Array2<Complex64>> {
    let (m, n) = a.dim();
    if m != n || m == 0 || b.dim().0 != m {
        return None;
    }

    let lu = to_na(a).lu();
    lu.solve(&to_na(b)).map(|x| from_na(&x))
}
