//! Mode-basis extraction (the HOSVD step)
//!
//! The basis of mode k is the set of leading eigenvectors of the mode-k
//! covariance `X₍ₖ₎ X₍ₖ₎ᵗ`, ordered by descending eigenvalue magnitude. These
//! are the leading left singular vectors of `X₍ₖ₎`, obtained without an SVD of
//! the (wide) unfolding.
//!
//! When the eigensolver fails, [`EigenFailurePolicy`] decides between a
//! degraded all-zero factor and an error.

use crate::error::TuckerError;
use scirs2_core::ndarray_ext::{Array1, Array2};
use tuckr_core::{DenseND, Scalar, UnfoldOrder};
use tuckr_kernels::{mode_covariance_with, KernelError, LinalgProvider};

/// What to do when the eigensolver reports a numerical failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EigenFailurePolicy {
    /// Use an all-zero Iₖ × Rₖ factor, flag it as degraded, keep going
    #[default]
    ZeroFactor,
    /// Return [`TuckerError::Eigen`]
    Propagate,
}

/// A mode basis together with its spectrum
#[derive(Debug, Clone)]
pub struct ModeBasis<T> {
    /// Iₖ × Rₖ factor, one eigenvector per column
    pub factor: Array2<T>,
    /// The Rₖ eigenvalues matching the factor columns
    pub eigenvalues: Array1<T>,
    /// Set when the factor is the zero fallback of a failed eigensolve
    pub degraded: bool,
}

impl<T: Scalar> ModeBasis<T> {
    fn zero(rows: usize, rank: usize) -> Self {
        Self {
            factor: Array2::zeros((rows, rank)),
            eigenvalues: Array1::zeros(rank),
            degraded: true,
        }
    }
}

/// Compute the rank-`rank` basis of `tensor` along `mode`
///
/// # Errors
///
/// - [`TuckerError::InvalidRanks`] if `rank` is 0 or exceeds the mode extent
/// - [`TuckerError::Kernel`] for a bad mode or a failed covariance product
/// - [`TuckerError::Eigen`] on eigensolver failure under
///   [`EigenFailurePolicy::Propagate`]
pub fn mode_basis<T, P>(
    provider: &P,
    tensor: &DenseND<T>,
    mode: usize,
    rank: usize,
    order: UnfoldOrder,
    policy: EigenFailurePolicy,
) -> Result<ModeBasis<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    if mode >= tensor.rank() {
        return Err(
            KernelError::invalid_mode(mode, tensor.rank(), "Basis mode out of bounds").into(),
        );
    }
    let extent = tensor.shape()[mode];
    if rank == 0 || rank > extent {
        return Err(TuckerError::InvalidRanks(format!(
            "Rank {} for mode {} must be in 1..={}",
            rank, mode, extent
        )));
    }

    let covariance = mode_covariance_with(provider, tensor, mode, order)?;

    match provider.eigh_top(&covariance.view(), rank) {
        Ok((factor, eigenvalues)) => Ok(ModeBasis {
            factor,
            eigenvalues,
            degraded: false,
        }),
        Err(err) if err.is_provider_failure() => match policy {
            EigenFailurePolicy::ZeroFactor => {
                log::warn!(
                    "mode {}: eigendecomposition failed ({}); using a zero {}x{} factor",
                    mode,
                    err,
                    extent,
                    rank
                );
                Ok(ModeBasis::zero(extent, rank))
            }
            EigenFailurePolicy::Propagate => Err(TuckerError::Eigen { mode, source: err }),
        },
        Err(err) => Err(err.into()),
    }
}
