//! Tucker decomposition result and HOSVD
//!
//! The Tucker decomposition factorizes a tensor X into a core tensor G and
//! factor matrices:
//!
//! X ≈ G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ
//!
//! Where:
//! - G is the core tensor with shape (R₁, R₂, ..., Rₙ)
//! - Uᵢ are factor matrices with shape (Iᵢ, Rᵢ), orthonormal unless degraded
//! - ×ᵢ denotes the i-mode product
//!
//! # Algorithms
//!
//! ## HOSVD (Higher-Order SVD)
//! One pass: the leading eigenvectors of each mode covariance give the
//! factors, then the core is derived from them. Fast but suboptimal.
//!
//! ## HOOI (Higher-Order Orthogonal Iteration)
//! Iterative refinement, see [`crate::hooi`].
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`; eigendecomposition
//! and SVD go through [`tuckr_kernels::LinalgProvider`].

use crate::basis::mode_basis;
use crate::core_tensor::derive_core;
use crate::error::TuckerError;
use crate::hooi::{HooiConfig, HooiState};
use scirs2_core::ndarray_ext::Array2;
use tuckr_core::{DenseND, Scalar, UnfoldOrder};
use tuckr_kernels::{tucker_reconstruct_with, LinalgProvider, Scirs2Provider};

/// Tucker decomposition result
///
/// Represents a tensor as G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ
#[derive(Debug, Clone)]
pub struct TuckerDecomp<T: Scalar> {
    /// Core tensor with shape (R₁, R₂, ..., Rₙ)
    pub core: DenseND<T>,

    /// Factor matrices, one for each mode
    /// Each matrix Uᵢ has shape (Iᵢ, Rᵢ)
    pub factors: Vec<Array2<T>>,

    /// ‖X‖ of the decomposed data
    pub data_norm: T,

    /// ‖G‖ of the final core
    pub core_norm: T,

    /// `1 − ‖X − X̂‖ / ‖X‖`, with ‖X − X̂‖² taken as ‖X‖² − ‖G‖²
    pub fit: T,

    /// Fit after initialization (index 0), then after each sweep
    pub fit_history: Vec<T>,

    /// Number of completed sweeps
    pub iters: usize,

    /// Where the iteration stopped
    pub state: HooiState,

    /// Modes whose basis fell back to a zero factor at any point
    pub degraded_modes: Vec<usize>,

    /// The fit change grew for two consecutive sweeps
    pub diverging: bool,

    /// Ordering used for every unfold/fold of the run
    pub unfold_order: UnfoldOrder,
}

impl<T: Scalar> TuckerDecomp<T> {
    /// Reconstruct the tensor from the decomposition
    ///
    /// Computes X ≈ G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ, modes applied in ascending order.
    ///
    /// # Complexity
    ///
    /// Time: O(N × ∏ᵢ Rᵢ × Iᵢ)
    /// Space: O(∏ᵢ Iᵢ)
    pub fn reconstruct(&self) -> Result<DenseND<T>, TuckerError> {
        self.reconstruct_with(&Scirs2Provider)
    }

    /// [`reconstruct`](Self::reconstruct) through an explicit provider
    pub fn reconstruct_with<P>(&self, provider: &P) -> Result<DenseND<T>, TuckerError>
    where
        P: LinalgProvider<T> + ?Sized,
    {
        Ok(tucker_reconstruct_with(
            provider,
            &self.core,
            &self.factors,
            self.unfold_order,
        )?)
    }

    /// Exact reconstruction error ‖X − X̂‖ / ‖X‖
    pub fn relative_error(&self, original: &DenseND<T>) -> Result<T, TuckerError> {
        self.relative_error_with(&Scirs2Provider, original)
    }

    /// [`relative_error`](Self::relative_error) through an explicit provider
    pub fn relative_error_with<P>(
        &self,
        provider: &P,
        original: &DenseND<T>,
    ) -> Result<T, TuckerError>
    where
        P: LinalgProvider<T> + ?Sized,
    {
        let reconstructed = self.reconstruct_with(provider)?;
        original
            .relative_error(&reconstructed)
            .map_err(|e| TuckerError::ShapeMismatch(e.to_string()))
    }

    /// Compute compression ratio: original_elements / tucker_elements
    ///
    /// Tucker storage: core (∏ᵢ Rᵢ) + factors (∑ᵢ Iᵢ × Rᵢ)
    pub fn compression_ratio(&self) -> f64 {
        let original_elements: usize = self.shape().iter().product();
        let core_elements = self.core.len();
        let factors_elements: usize = self.factors.iter().map(|f| f.nrows() * f.ncols()).sum();

        original_elements as f64 / (core_elements + factors_elements) as f64
    }

    /// Target ranks (R₁, …, Rₙ)
    pub fn ranks(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.ncols()).collect()
    }

    /// Shape of the decomposed tensor (I₁, …, Iₙ)
    pub fn shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    /// True when any mode basis was replaced by a zero factor
    pub fn is_degraded(&self) -> bool {
        !self.degraded_modes.is_empty()
    }
}

/// `1 − sqrt(max(0, ‖X‖² − ‖G‖²)) / ‖X‖`; a zero tensor has fit 1
pub(crate) fn fit_from_norms<T: Scalar>(data_norm: T, core_norm: T) -> T {
    if data_norm == T::zero() {
        return T::one();
    }
    let residual_sq = data_norm * data_norm - core_norm * core_norm;
    let residual = residual_sq.max(T::zero()).sqrt();
    T::one() - residual / data_norm
}

/// Check `ranks` against `shape`: one per mode, each in `1..=Iₖ`
pub(crate) fn validate_ranks(shape: &[usize], ranks: &[usize]) -> Result<(), TuckerError> {
    if shape.is_empty() {
        return Err(TuckerError::InvalidRanks(
            "Cannot decompose a tensor of order 0".to_string(),
        ));
    }
    if ranks.len() != shape.len() {
        return Err(TuckerError::InvalidRanks(format!(
            "Expected {} ranks, got {}",
            shape.len(),
            ranks.len()
        )));
    }

    for (i, (&rank, &mode_size)) in ranks.iter().zip(shape.iter()).enumerate() {
        if rank == 0 {
            return Err(TuckerError::InvalidRanks(format!("Rank {} is zero", i)));
        }
        if rank > mode_size {
            return Err(TuckerError::InvalidRanks(format!(
                "Rank {} ({}) exceeds mode-{} size ({})",
                i, rank, i, mode_size
            )));
        }
    }
    Ok(())
}

/// Build a decomposition from factors: derive the core and score it
pub(crate) fn assemble<T, P>(
    provider: &P,
    data: &DenseND<T>,
    factors: Vec<Array2<T>>,
    degraded_modes: Vec<usize>,
    config: &HooiConfig,
) -> Result<TuckerDecomp<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    let order = config.unfold_order;
    let tol = config.pinv_tolerance.map(T::from_f64_lossy);
    let core = derive_core(provider, data, &factors, order, config.core_method, tol)?;

    let data_norm = data.frobenius_norm();
    let core_norm = core.frobenius_norm();
    let fit = fit_from_norms(data_norm, core_norm);

    Ok(TuckerDecomp {
        core,
        factors,
        data_norm,
        core_norm,
        fit,
        fit_history: vec![fit],
        iters: 0,
        state: HooiState::Initialized,
        degraded_modes,
        diverging: false,
        unfold_order: order,
    })
}

/// Compute Tucker-HOSVD through an explicit provider
///
/// Uses `config.unfold_order`, `config.eigen_failure`, `config.core_method`
/// and `config.pinv_tolerance`; the iteration settings are ignored.
pub fn tucker_hosvd_with<T, P>(
    provider: &P,
    tensor: &DenseND<T>,
    ranks: &[usize],
    config: &HooiConfig,
) -> Result<TuckerDecomp<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    validate_ranks(tensor.shape(), ranks)?;

    let mut factors = Vec::with_capacity(ranks.len());
    let mut degraded_modes = Vec::new();
    for (mode, &rank) in ranks.iter().enumerate() {
        let basis = mode_basis(
            provider,
            tensor,
            mode,
            rank,
            config.unfold_order,
            config.eigen_failure,
        )?;
        if basis.degraded {
            degraded_modes.push(mode);
        }
        factors.push(basis.factor);
    }

    assemble(provider, tensor, factors, degraded_modes, config)
}

/// Compute Tucker-HOSVD decomposition
///
/// One-pass algorithm based on the eigendecomposition of each mode covariance.
///
/// # Errors
///
/// Returns error if:
/// - Number of ranks doesn't match tensor rank
/// - Any rank is zero or exceeds corresponding mode size
///
/// # Complexity
///
/// Time: O(N × Imax × ∏ᵢ Iᵢ) for the covariance products
/// Space: O(Imax² + ∏ᵢ Iᵢ)
///
/// # Examples
///
/// ```
/// use tuckr_core::DenseND;
/// use tuckr_decomp::tucker_hosvd;
///
/// let tensor = DenseND::<f64>::random_uniform(&[10, 10, 10], 0.0, 1.0, 42);
/// let tucker = tucker_hosvd(&tensor, &[5, 5, 5]).unwrap();
///
/// assert_eq!(tucker.core.shape(), &[5, 5, 5]);
/// assert!(tucker.fit > 0.0 && tucker.fit <= 1.0);
/// ```
pub fn tucker_hosvd<T: Scalar>(
    tensor: &DenseND<T>,
    ranks: &[usize],
) -> Result<TuckerDecomp<T>, TuckerError> {
    tucker_hosvd_with(&Scirs2Provider, tensor, ranks, &HooiConfig::default())
}
