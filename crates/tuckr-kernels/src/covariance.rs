//! Mode covariance (Gram) matrices
//!
//! The mode-k covariance of a tensor is `X₍ₖ₎ X₍ₖ₎ᵗ`, an Iₖ × Iₖ symmetric
//! positive semi-definite matrix. Its leading eigenvectors are the HOSVD
//! basis for that mode.

use crate::error::{KernelError, KernelResult};
use crate::provider::{LinalgProvider, Scirs2Provider};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use tuckr_core::{DenseND, Scalar, UnfoldOrder};

/// `A · Aᵗ`, symmetrized so that `G[i, j] == G[j, i]` holds exactly
pub fn gram_with<T, P>(provider: &P, a: &ArrayView2<T>) -> KernelResult<Array2<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    let mut gram = provider.matmul(a, &a.t())?;
    let n = gram.nrows();
    let half = T::from_f64_lossy(0.5);
    for i in 0..n {
        for j in (i + 1)..n {
            let avg = (gram[[i, j]] + gram[[j, i]]) * half;
            gram[[i, j]] = avg;
            gram[[j, i]] = avg;
        }
    }
    Ok(gram)
}

/// Covariance of the mode-`mode` unfolding of `tensor`
///
/// The result does not depend on `order` mathematically (a column
/// permutation of X₍ₖ₎ leaves X₍ₖ₎X₍ₖ₎ᵗ unchanged); the parameter fixes which
/// unfolding is materialized.
pub fn mode_covariance_with<T, P>(
    provider: &P,
    tensor: &DenseND<T>,
    mode: usize,
    order: UnfoldOrder,
) -> KernelResult<Array2<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    if mode >= tensor.rank() {
        return Err(KernelError::invalid_mode(
            mode,
            tensor.rank(),
            "Covariance mode out of bounds",
        ));
    }
    let unfolded = tensor
        .unfold_with(mode, order)
        .map_err(|e| KernelError::operation_error("mode_covariance", e))?;
    gram_with(provider, &unfolded.view())
}

/// Mode covariance with the default provider
pub fn mode_covariance<T: Scalar>(
    tensor: &DenseND<T>,
    mode: usize,
    order: UnfoldOrder,
) -> KernelResult<Array2<T>> {
    mode_covariance_with(&Scirs2Provider, tensor, mode, order)
}
