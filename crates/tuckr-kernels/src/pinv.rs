//! SVD-based Moore-Penrose pseudo-inverse
//!
//! For `A` of shape M × N with M ≥ N and thin SVD `A = U Σ Vᵗ`,
//!
//! A⁺ = Σᵢ (1/σᵢ) vᵢ uᵢᵗ   over every σᵢ ≥ tol
//!
//! which is N × M. Singular values below the tolerance are treated as zero
//! (rank filtering), so a rank-deficient input is not an error.

use crate::error::{KernelError, KernelResult};
use crate::provider::{LinalgProvider, Scirs2Provider};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use tuckr_core::Scalar;

/// Pseudo-inverse of a tall (or square) matrix through `provider`
///
/// `tol` defaults to `T::epsilon()` when `None`.
///
/// # Errors
///
/// - [`KernelError::DimensionMismatch`] if `rows < columns`
/// - [`KernelError::OperationError`] if `tol` is negative or not finite
/// - [`KernelError::Provider`] if the SVD fails
pub fn pseudo_inverse_with<T, P>(
    provider: &P,
    a: &ArrayView2<T>,
    tol: Option<T>,
) -> KernelResult<Array2<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    let (m, n) = a.dim();
    if m < n {
        return Err(KernelError::dimension_mismatch(
            "pseudo_inverse",
            vec![n, n],
            vec![m, n],
            "rows < columns; the input must have at least as many rows as columns",
        ));
    }

    let tol = tol.unwrap_or_else(T::epsilon);
    if !tol.is_finite() || tol < T::zero() {
        return Err(KernelError::operation_error(
            "pseudo_inverse",
            format!("tolerance must be finite and non-negative, got {}", tol),
        ));
    }

    let mut result = Array2::<T>::zeros((n, m));
    if n == 0 {
        return Ok(result);
    }

    let (u, sigma, vt) = provider.svd_thin(a)?;

    let mut retained = 0usize;
    for (i, &s) in sigma.iter().enumerate() {
        if s < tol || s <= T::zero() {
            continue;
        }
        retained += 1;
        let inv = T::one() / s;
        // result += (1/σᵢ) · vᵢ uᵢᵗ
        for r in 0..n {
            let v = vt[[i, r]] * inv;
            for c in 0..m {
                result[[r, c]] += v * u[[c, i]];
            }
        }
    }

    if retained == 0 {
        log::warn!(
            "pseudo_inverse: all {} singular values below tolerance {}; returning zero matrix",
            sigma.len(),
            tol
        );
    } else if retained < sigma.len() {
        log::debug!(
            "pseudo_inverse: kept {} of {} singular values (tol {})",
            retained,
            sigma.len(),
            tol
        );
    }

    Ok(result)
}

/// Pseudo-inverse with the default provider
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{array, Array2};
/// use tuckr_kernels::pseudo_inverse;
///
/// let a: Array2<f64> = array![[4.0, 7.0], [2.0, 6.0]];
/// let inv = pseudo_inverse(&a.view(), None).unwrap();
/// assert!((inv[[0, 0]] - 0.6).abs() < 1e-8);
/// assert!((inv[[0, 1]] + 0.7).abs() < 1e-8);
/// ```
pub fn pseudo_inverse<T: Scalar>(a: &ArrayView2<T>, tol: Option<T>) -> KernelResult<Array2<T>> {
    pseudo_inverse_with(&Scirs2Provider, a, tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    fn assert_close(a: &Array2<f64>, b: &Array2<f64>, tol: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < tol, "{} vs {}", x, y);
        }
    }

    #[test]
    fn test_square_inverse() {
        let a: Array2<f64> = array![[4.0, 7.0], [2.0, 6.0]];
        let expected = array![[0.6, -0.7], [-0.2, 0.4]];
        let inv = pseudo_inverse(&a.view(), None).unwrap();
        assert_close(&inv, &expected, 1e-8);
    }

    #[test]
    fn test_tall_left_inverse() {
        let a: Array2<f64> = array![[1.0, 0.0], [0.0, 2.0], [0.0, 0.0]];
        let pinv = pseudo_inverse(&a.view(), None).unwrap();
        assert_eq!(pinv.shape(), &[2, 3]);
        assert_close(&pinv.dot(&a), &Array2::eye(2), 1e-10);
        assert_close(&pinv, &array![[1.0, 0.0, 0.0], [0.0, 0.5, 0.0]], 1e-10);
    }

    #[test]
    fn test_orthonormal_columns_give_transpose() {
        let s = 1.0 / 2.0_f64.sqrt();
        let q: Array2<f64> = array![[s, 0.0], [s, 0.0], [0.0, 1.0]];
        let pinv = pseudo_inverse(&q.view(), None).unwrap();
        assert_close(&pinv, &q.t().to_owned(), 1e-10);
    }

    #[test]
    fn test_rank_deficient_filters() {
        // Second column is a multiple of the first
        let a: Array2<f64> = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        let pinv = pseudo_inverse(&a.view(), Some(1e-8)).unwrap();
        // Moore-Penrose: A A⁺ A = A
        assert_close(&a.dot(&pinv).dot(&a), &a, 1e-8);
    }

    #[test]
    fn test_all_filtered_is_zero() {
        let a: Array2<f64> = array![[1e-3, 0.0], [0.0, 1e-3], [0.0, 0.0]];
        let pinv = pseudo_inverse(&a.view(), Some(1.0)).unwrap();
        assert_eq!(pinv.shape(), &[2, 3]);
        assert!(pinv.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_wide_rejected() {
        let a = Array2::<f64>::ones((2, 3));
        let err = pseudo_inverse(&a.view(), None).unwrap_err();
        assert!(err.to_string().contains("rows < columns"));
    }

    #[test]
    fn test_bad_tolerance_rejected() {
        let a = Array2::<f64>::eye(2);
        assert!(pseudo_inverse(&a.view(), Some(-1.0)).is_err());
        assert!(pseudo_inverse(&a.view(), Some(f64::NAN)).is_err());
    }
}
