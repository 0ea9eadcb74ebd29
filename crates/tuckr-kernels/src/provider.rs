//! Dense linear-algebra provider seam
//!
//! Matrix multiplication, symmetric eigendecomposition and thin SVD are
//! consumed through [`LinalgProvider`] so the contraction and decomposition
//! code never names a concrete backend. [`Scirs2Provider`] is the default
//! backend built on `scirs2-linalg`.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`. The eigensolver is
//! `scirs2_linalg::eigh`; the thin SVD is a one-sided Jacobi iteration, which
//! stays accurate when singular values repeat (orthonormal factors).

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView2};
use std::cmp::Ordering;
use tuckr_core::Scalar;

/// Dense linear-algebra services used by the tensor kernels
///
/// Implementors must be stateless (or internally synchronized): the same
/// provider is shared by every contraction of a decomposition run.
pub trait LinalgProvider<T: Scalar> {
    /// General matrix product `A · B`
    fn matmul(&self, a: &ArrayView2<T>, b: &ArrayView2<T>) -> KernelResult<Array2<T>>;

    /// Top `r` eigenpairs of a symmetric matrix, by eigenvalue magnitude
    ///
    /// Returns `(vectors, values)` with `vectors` of shape `N × r` holding one
    /// eigenvector per column, and `values` in descending magnitude order.
    /// Ties keep the order the underlying solver produced.
    fn eigh_top(&self, a: &ArrayView2<T>, r: usize) -> KernelResult<(Array2<T>, Array1<T>)>;

    /// Thin SVD `A = U Σ Vᵗ`
    ///
    /// For an `M × N` input with `K = min(M, N)`, returns `U` (`M × K`), the
    /// `K` singular values in descending order and `Vᵗ` (`K × N`). Columns of
    /// `U` paired with a zero singular value may be zero.
    fn svd_thin(&self, a: &ArrayView2<T>) -> KernelResult<(Array2<T>, Array1<T>, Array2<T>)>;
}

/// Default provider: `ndarray` products, `scirs2-linalg` eigensolver,
/// Jacobi thin SVD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scirs2Provider;

impl<T: Scalar> LinalgProvider<T> for Scirs2Provider {
    fn matmul(&self, a: &ArrayView2<T>, b: &ArrayView2<T>) -> KernelResult<Array2<T>> {
        if a.ncols() != b.nrows() {
            return Err(KernelError::dimension_mismatch(
                "matmul",
                vec![a.ncols()],
                vec![b.nrows()],
                "Inner dimensions must agree",
            ));
        }
        Ok(a.dot(b))
    }

    fn eigh_top(&self, a: &ArrayView2<T>, r: usize) -> KernelResult<(Array2<T>, Array1<T>)> {
        let n = a.nrows();
        if a.ncols() != n {
            return Err(KernelError::dimension_mismatch(
                "eigh_top",
                vec![n, n],
                a.shape().to_vec(),
                "Symmetric eigendecomposition requires a square matrix",
            ));
        }
        if r > n {
            return Err(KernelError::dimension_mismatch(
                "eigh_top",
                vec![n],
                vec![r],
                "Cannot request more eigenpairs than the matrix order",
            ));
        }

        let (values, vectors) =
            scirs2_linalg::eigh(a, None).map_err(|e| KernelError::provider("eigh", e))?;

        let order = magnitude_order(&values);
        let mut top_vectors = Array2::<T>::zeros((n, r));
        let mut top_values = Array1::<T>::zeros(r);
        for (col, &src) in order.iter().take(r).enumerate() {
            top_vectors.column_mut(col).assign(&vectors.column(src));
            top_values[col] = values[src];
        }

        Ok((top_vectors, top_values))
    }

    fn svd_thin(&self, a: &ArrayView2<T>) -> KernelResult<(Array2<T>, Array1<T>, Array2<T>)> {
        if a.iter().any(|x| !x.is_finite()) {
            return Err(KernelError::provider("svd", "input contains non-finite entries"));
        }
        if a.nrows() >= a.ncols() {
            jacobi_svd_tall(a)
        } else {
            // Aᵗ = U' Σ V'ᵗ  ⇒  A = V' Σ U'ᵗ
            let (u_t, sigma, vt_t) = jacobi_svd_tall(&a.t())?;
            Ok((vt_t.reversed_axes(), sigma, u_t.reversed_axes()))
        }
    }
}

const MAX_JACOBI_SWEEPS: usize = 100;

/// Rotate columns `p` and `q` of `m` by `[[c, s], [−s, c]]`
fn rotate_columns<T: Scalar>(m: &mut Array2<T>, p: usize, q: usize, c: T, s: T) {
    for i in 0..m.nrows() {
        let mp = m[[i, p]];
        let mq = m[[i, q]];
        m[[i, p]] = c * mp - s * mq;
        m[[i, q]] = s * mp + c * mq;
    }
}

/// One-sided Jacobi SVD of an `M × N` matrix with `M ≥ N`
///
/// Column pairs of a working copy of A are rotated until mutually
/// orthogonal; the column norms are then the singular values and the
/// accumulated rotations form V. Repeated singular values need no special
/// handling. A column of `U` whose singular value is exactly zero is zero.
fn jacobi_svd_tall<T: Scalar>(
    a: &ArrayView2<T>,
) -> KernelResult<(Array2<T>, Array1<T>, Array2<T>)> {
    let (m, n) = a.dim();
    let mut work = a.to_owned();
    let mut v = Array2::<T>::eye(n);
    let tol = T::epsilon() * T::from_f64_lossy(100.0);

    let mut converged = false;
    for _ in 0..MAX_JACOBI_SWEEPS {
        converged = true;
        for p in 0..n {
            for q in (p + 1)..n {
                let (mut app, mut aqq, mut apq) = (T::zero(), T::zero(), T::zero());
                for i in 0..m {
                    let wp = work[[i, p]];
                    let wq = work[[i, q]];
                    app += wp * wp;
                    aqq += wq * wq;
                    apq += wp * wq;
                }
                if apq.abs() <= tol * (app * aqq).sqrt() {
                    continue;
                }
                converged = false;

                let tau = (aqq - app) / (apq + apq);
                let root = (T::one() + tau * tau).sqrt();
                let t = if tau >= T::zero() {
                    T::one() / (tau + root)
                } else {
                    -T::one() / (root - tau)
                };
                let c = T::one() / (T::one() + t * t).sqrt();
                let s = t * c;

                rotate_columns(&mut work, p, q, c, s);
                rotate_columns(&mut v, p, q, c, s);
            }
        }
        if converged {
            break;
        }
    }
    if !converged {
        return Err(KernelError::provider(
            "svd",
            format!("Jacobi sweeps did not converge after {}", MAX_JACOBI_SWEEPS),
        ));
    }

    let norms: Array1<T> = work
        .columns()
        .into_iter()
        .map(|col| col.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt())
        .collect();
    if norms.iter().any(|x| !x.is_finite()) {
        return Err(KernelError::provider("svd", "non-finite singular value"));
    }

    let order = magnitude_order(&norms);
    let mut u = Array2::<T>::zeros((m, n));
    let mut sigma = Array1::<T>::zeros(n);
    let mut vt = Array2::<T>::zeros((n, n));
    for (dst, &src) in order.iter().enumerate() {
        let norm = norms[src];
        sigma[dst] = norm;
        if norm > T::zero() {
            u.column_mut(dst)
                .assign(&work.column(src).mapv(|x| x / norm));
        }
        vt.row_mut(dst).assign(&v.column(src));
    }

    Ok((u, sigma, vt))
}

/// Indices of `values` sorted by descending magnitude; stable for ties
pub(crate) fn magnitude_order<T: Scalar>(values: &Array1<T>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| {
        values[j]
            .abs()
            .partial_cmp(&values[i].abs())
            .unwrap_or(Ordering::Equal)
    });
    order
}
