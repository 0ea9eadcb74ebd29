//! HOOI (Higher-Order Orthogonal Iteration) refinement
//!
//! Starting from HOSVD or random orthonormal factors, each sweep visits the
//! modes in ascending order and, for mode k,
//!
//! 1. projects the data on every other factor: Y = X ×ⱼ Uⱼᵗ (j ≠ k)
//! 2. replaces Uₖ with the rank-Rₖ basis of Y along mode k
//!
//! Factors are overwritten immediately (Gauss–Seidel), so later modes in the
//! same sweep see the updated ones. After the last mode the core is obtained
//! from that mode's projection, `G = Y ×ₙ Uₙᵗ`, which avoids a second full
//! contraction of X.
//!
//! Convergence is on the change of fit between sweeps. The loop never aborts
//! because a basis degraded; the fit shows the damage instead.

use crate::basis::{mode_basis, EigenFailurePolicy};
use crate::core_tensor::{core_pseudo_inverse, CoreMethod};
use crate::error::TuckerError;
use crate::init::random_factors;
use crate::tucker::{assemble, fit_from_norms, tucker_hosvd_with, validate_ranks, TuckerDecomp};
use tuckr_core::{DenseND, Scalar, UnfoldOrder};
use tuckr_kernels::{nmode_product_with, project_except_with, LinalgProvider, Scirs2Provider};

/// Where a HOOI run is (or stopped)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HooiState {
    /// Factors and core come from the initializer; no sweep has run
    Initialized,
    /// Sweeps in progress
    Sweeping,
    /// The fit change dropped below the tolerance
    Converged,
    /// Stopped at the sweep cap without converging
    MaxIterationsReached,
}

/// Initial factors for HOOI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HooiInit {
    /// Leading eigenvectors of each mode covariance
    #[default]
    Hosvd,
    /// Seeded random orthonormal factors
    Random { seed: u64 },
}

/// HOOI settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HooiConfig {
    /// Sweep cap (0 returns the initialization)
    pub max_iterations: usize,
    /// Stop once |fitₜ − fitₜ₋₁| falls below this
    pub fit_tolerance: f64,
    /// How factors are seeded before the first sweep
    pub init: HooiInit,
    /// What a failed per-mode eigensolve does
    pub eigen_failure: EigenFailurePolicy,
    /// Column ordering used for every matricization
    pub unfold_order: UnfoldOrder,
    /// Projection used to form the final core
    pub core_method: CoreMethod,
    /// Singular-value cutoff for [`CoreMethod::PseudoInverse`]
    pub pinv_tolerance: Option<f64>,
}

impl Default for HooiConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            fit_tolerance: 1e-4,
            init: HooiInit::Hosvd,
            eigen_failure: EigenFailurePolicy::ZeroFactor,
            unfold_order: UnfoldOrder::Backward,
            core_method: CoreMethod::Orthogonal,
            pinv_tolerance: None,
        }
    }
}

impl HooiConfig {
    /// Set the sweep cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the fit-change stopping threshold
    pub fn with_fit_tolerance(mut self, fit_tolerance: f64) -> Self {
        self.fit_tolerance = fit_tolerance;
        self
    }

    /// Set the factor initialization
    pub fn with_init(mut self, init: HooiInit) -> Self {
        self.init = init;
        self
    }

    /// Set the eigensolver failure policy
    pub fn with_eigen_failure(mut self, policy: EigenFailurePolicy) -> Self {
        self.eigen_failure = policy;
        self
    }

    /// Set the unfolding column ordering
    pub fn with_unfold_order(mut self, order: UnfoldOrder) -> Self {
        self.unfold_order = order;
        self
    }

    /// Set how the core is computed
    pub fn with_core_method(mut self, method: CoreMethod) -> Self {
        self.core_method = method;
        self
    }

    /// Set the pseudo-inverse singular-value cutoff
    pub fn with_pinv_tolerance(mut self, tol: f64) -> Self {
        self.pinv_tolerance = Some(tol);
        self
    }

    fn validate(&self) -> Result<(), TuckerError> {
        if !self.fit_tolerance.is_finite() || self.fit_tolerance < 0.0 {
            return Err(TuckerError::InvalidTolerance(format!(
                "fit tolerance must be finite and non-negative, got {}",
                self.fit_tolerance
            )));
        }
        if let Some(tol) = self.pinv_tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(TuckerError::InvalidTolerance(format!(
                    "pseudo-inverse tolerance must be finite and non-negative, got {}",
                    tol
                )));
            }
        }
        Ok(())
    }
}

/// Tracks whether |Δfit| keeps growing between sweeps
#[derive(Debug)]
struct DivergenceMonitor<T> {
    last_change: Option<T>,
    growth_streak: usize,
}

impl<T: Scalar> DivergenceMonitor<T> {
    fn new() -> Self {
        Self {
            last_change: None,
            growth_streak: 0,
        }
    }

    /// Record a fit change; true once it has grown on two consecutive sweeps
    fn observe(&mut self, change: T) -> bool {
        match self.last_change {
            Some(prev) if change > prev => self.growth_streak += 1,
            _ => self.growth_streak = 0,
        }
        self.last_change = Some(change);
        self.growth_streak >= 2
    }
}

fn initialize<T, P>(
    provider: &P,
    data: &DenseND<T>,
    ranks: &[usize],
    config: &HooiConfig,
) -> Result<TuckerDecomp<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    match config.init {
        HooiInit::Hosvd => tucker_hosvd_with(provider, data, ranks, config),
        HooiInit::Random { seed } => {
            let factors = random_factors(data.shape(), ranks, seed)?;
            assemble(provider, data, factors, Vec::new(), config)
        }
    }
}

/// Compute Tucker-HOOI through an explicit provider and configuration
///
/// # Errors
///
/// - [`TuckerError::InvalidRanks`] for a rank list that does not fit the data
/// - [`TuckerError::InvalidTolerance`] for a negative or non-finite tolerance
/// - [`TuckerError::Eigen`] under [`EigenFailurePolicy::Propagate`]
/// - kernel errors from the contractions
pub fn tucker_hooi_with<T, P>(
    provider: &P,
    data: &DenseND<T>,
    ranks: &[usize],
    config: &HooiConfig,
) -> Result<TuckerDecomp<T>, TuckerError>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    validate_ranks(data.shape(), ranks)?;
    config.validate()?;

    let mut decomp = initialize(provider, data, ranks, config)?;
    if config.max_iterations == 0 {
        return Ok(decomp);
    }

    let order = config.unfold_order;
    let tolerance = T::from_f64_lossy(config.fit_tolerance);
    let pinv_tol = config.pinv_tolerance.map(T::from_f64_lossy);
    let last_mode = ranks.len() - 1;
    let mut monitor = DivergenceMonitor::new();

    decomp.state = HooiState::Sweeping;
    for iter in 1..=config.max_iterations {
        for (mode, &rank) in ranks.iter().enumerate() {
            let projection = project_except_with(provider, data, &decomp.factors, mode, order)?;
            let basis = mode_basis(provider, &projection, mode, rank, order, config.eigen_failure)?;
            if basis.degraded && !decomp.degraded_modes.contains(&mode) {
                decomp.degraded_modes.push(mode);
            }
            decomp.factors[mode] = basis.factor;

            if mode == last_mode && config.core_method == CoreMethod::Orthogonal {
                let u_t = decomp.factors[mode].t();
                decomp.core = nmode_product_with(provider, &projection, &u_t, mode, order)?;
            }
        }
        if config.core_method == CoreMethod::PseudoInverse {
            decomp.core = core_pseudo_inverse(provider, data, &decomp.factors, order, pinv_tol)?;
        }

        let prev_fit = decomp.fit;
        decomp.core_norm = decomp.core.frobenius_norm();
        decomp.fit = fit_from_norms(decomp.data_norm, decomp.core_norm);
        decomp.fit_history.push(decomp.fit);
        decomp.iters = iter;

        let change = (decomp.fit - prev_fit).abs();
        log::debug!(
            "HOOI iteration {}: fit = {:.6}, change = {:.3e}",
            iter,
            decomp.fit.to_f64_lossy(),
            change.to_f64_lossy()
        );

        if monitor.observe(change) && !decomp.diverging {
            log::warn!(
                "HOOI iteration {}: fit change grew on two consecutive sweeps ({:.3e})",
                iter,
                change.to_f64_lossy()
            );
            decomp.diverging = true;
        }

        if change < tolerance {
            decomp.state = HooiState::Converged;
            break;
        }
    }

    if decomp.state == HooiState::Sweeping {
        decomp.state = HooiState::MaxIterationsReached;
    }
    decomp.degraded_modes.sort_unstable();
    Ok(decomp)
}

/// Compute Tucker-HOOI decomposition
///
/// HOSVD initialization, default provider, backward unfolding.
///
/// # Arguments
///
/// * `tensor` - Input tensor to decompose
/// * `ranks` - Target ranks for each mode [R₁, R₂, ..., Rₙ]
/// * `max_iters` - Maximum number of sweeps
/// * `tol` - Convergence tolerance on the fit change
///
/// # Examples
///
/// ```
/// use tuckr_core::DenseND;
/// use tuckr_decomp::tucker_hooi;
///
/// let tensor = DenseND::<f64>::random_uniform(&[10, 10, 10], 0.0, 1.0, 42);
/// let tucker = tucker_hooi(&tensor, &[5, 5, 5], 50, 1e-6).unwrap();
/// assert!(tucker.iters <= 50);
/// ```
pub fn tucker_hooi<T: Scalar>(
    tensor: &DenseND<T>,
    ranks: &[usize],
    max_iters: usize,
    tol: f64,
) -> Result<TuckerDecomp<T>, TuckerError> {
    let config = HooiConfig::default()
        .with_max_iterations(max_iters)
        .with_fit_tolerance(tol);
    tucker_hooi_with(&Scirs2Provider, tensor, ranks, &config)
}
