//! Core-tensor derivation
//!
//! Given data X and factors U₀…Uₙ₋₁, the core is
//!
//! ```text
//! G = X ×₀ U₀⁺ ×₁ U₁⁺ … ×ₙ₋₁ Uₙ₋₁⁺
//! ```
//!
//! For orthonormal factors `Uₖ⁺ = Uₖᵗ`, which is the fast path. The general
//! path computes each pseudo-inverse by SVD and also handles factors that are
//! not orthonormal (or are degraded). Contractions run mode 0 → n−1.

use crate::error::TuckerError;
use scirs2_core::ndarray_ext::Array2;
use tuckr_core::{DenseND, Scalar, UnfoldOrder};
use tuckr_kernels::{pseudo_inverse_with, tucker_operator_with, LinalgProvider};

/// How the core is derived from the data and the factors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoreMethod {
    /// Contract with Uₖᵗ (exact for orthonormal factors)
    #[default]
    Orthogonal,
    /// Contract with the SVD pseudo-inverse of each Uₖ
    PseudoInverse,
}

fn check_factors<T: Scalar>(data: &DenseND<T>, factors: &[Array2<T>]) -> Result<(), TuckerError> {
    if factors.len() != data.rank() {
        return Err(TuckerError::ShapeMismatch(format!(
            "Expected {} factors, got {}",
            data.rank(),
            factors.len()
        )));
    }
    for (mode, (factor, &extent)) in factors.iter().zip(data.shape()).enumerate() {
        if factor.nrows() != extent {
            return Err(TuckerError::ShapeMismatch(format!(
                "Factor {} has {} rows, mode extent is {}",
                mode,
                factor.nrows(),
                extent
            )));
        }
    }
    Ok(())
}

/// `G = X ×₀ U₀ᵗ … ×ₙ₋₁ Uₙ₋₁ᵗ`
pub fn core_orthogonal<T, P>(
    provider: &P,
    data: &DenseND<T>,
    factors: &[Array2<T>],
    order: UnfoldOrder,
) -> Result<DenseND<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    check_factors(data, factors)?;
    let transposed: Vec<Array2<T>> = factors.iter().map(|u| u.t().to_owned()).collect();
    Ok(tucker_operator_with(provider, data, &transposed, order)?)
}

/// `G = X ×₀ U₀⁺ … ×ₙ₋₁ Uₙ₋₁⁺` with SVD pseudo-inverses
///
/// `tol` is the singular-value cutoff passed to the pseudo-inverse
/// (`T::epsilon()` when `None`).
pub fn core_pseudo_inverse<T, P>(
    provider: &P,
    data: &DenseND<T>,
    factors: &[Array2<T>],
    order: UnfoldOrder,
    tol: Option<T>,
) -> Result<DenseND<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    check_factors(data, factors)?;
    let inverses = factors
        .iter()
        .map(|u| pseudo_inverse_with(provider, &u.view(), tol))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tucker_operator_with(provider, data, &inverses, order)?)
}

/// Dispatch on `method`
pub fn derive_core<T, P>(
    provider: &P,
    data: &DenseND<T>,
    factors: &[Array2<T>],
    order: UnfoldOrder,
    method: CoreMethod,
    tol: Option<T>,
) -> Result<DenseND<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    match method {
        CoreMethod::Orthogonal => core_orthogonal(provider, data, factors, order),
        CoreMethod::PseudoInverse => core_pseudo_inverse(provider, data, factors, order, tol),
    }
}
