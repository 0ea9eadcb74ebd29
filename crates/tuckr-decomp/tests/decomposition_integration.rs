//! Integration tests for Tucker decompositions
//!
//! These tests verify HOSVD and HOOI end to end: exactness where the model
//! is exact, fit behaviour across sweeps, configuration variants and the
//! eigensolver failure policies.

use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView2};
use tuckr_core::{DenseND, UnfoldOrder};
use tuckr_decomp::{
    tucker_hooi, tucker_hooi_with, tucker_hosvd, CoreMethod, EigenFailurePolicy, HooiConfig,
    HooiInit, HooiState, TuckerError,
};
use tuckr_kernels::{KernelError, KernelResult, LinalgProvider, Scirs2Provider};

/// Fails the eigensolve for square matrices of one given order
struct FlakyEigen {
    failing_order: usize,
}

impl LinalgProvider<f64> for FlakyEigen {
    fn matmul(&self, a: &ArrayView2<f64>, b: &ArrayView2<f64>) -> KernelResult<Array2<f64>> {
        Scirs2Provider.matmul(a, b)
    }

    fn eigh_top(&self, a: &ArrayView2<f64>, r: usize) -> KernelResult<(Array2<f64>, Array1<f64>)> {
        if a.nrows() == self.failing_order {
            return Err(KernelError::provider("eigh", "no convergence"));
        }
        Scirs2Provider.eigh_top(a, r)
    }

    fn svd_thin(
        &self,
        a: &ArrayView2<f64>,
    ) -> KernelResult<(Array2<f64>, Array1<f64>, Array2<f64>)> {
        Scirs2Provider.svd_thin(a)
    }
}

fn rank_one_tensor(size: usize) -> DenseND<f64> {
    DenseND::from_fn(&[size, size, size], |idx| {
        (idx[0] + 1) as f64 * (idx[1] + 1) as f64 * (idx[2] + 1) as f64
    })
}

#[test]
fn test_rank1_tensor_exact() {
    let tensor = rank_one_tensor(5);
    let tucker = tucker_hooi(&tensor, &[1, 1, 1], 10, 1e-8).unwrap();

    assert_eq!(tucker.core.shape(), &[1, 1, 1]);
    assert!((tucker.fit - 1.0).abs() < 1e-5);

    let reconstructed = tucker.reconstruct().unwrap();
    let max_err = reconstructed.max_abs_diff(&tensor).unwrap();
    assert!(max_err < 1e-9 * 125.0, "max error {}", max_err);
}

#[test]
fn test_full_rank_reconstruction() {
    let tensor = DenseND::<f64>::random_normal(&[4, 3, 5], 0.0, 1.0, 10).unwrap();
    let tucker = tucker_hooi(&tensor, &[4, 3, 5], 3, 1e-8).unwrap();

    let reconstructed = tucker.reconstruct().unwrap();
    assert!(reconstructed.max_abs_diff(&tensor).unwrap() < 1e-10);
}

#[test]
fn test_fit_monotone_over_sweeps() {
    let tensor = DenseND::<f64>::random_uniform(&[4, 4, 4], 0.0, 1.0, 2024);
    let config = HooiConfig::default()
        .with_max_iterations(10)
        .with_fit_tolerance(0.0);
    let tucker = tucker_hooi_with(&Scirs2Provider, &tensor, &[2, 2, 2], &config).unwrap();

    assert_eq!(tucker.iters, 10);
    assert_eq!(tucker.state, HooiState::MaxIterationsReached);
    assert_eq!(tucker.fit_history.len(), 11);
    for pair in tucker.fit_history.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-6, "fit dropped: {:?}", pair);
    }
}

#[test]
fn test_converges_and_stops_early() {
    let tensor = rank_one_tensor(4);
    let tucker = tucker_hooi(&tensor, &[1, 1, 1], 50, 1e-6).unwrap();
    assert_eq!(tucker.state, HooiState::Converged);
    assert!(tucker.iters < 50);
    assert!(!tucker.diverging);
}

#[test]
fn test_fourth_order_hooi() {
    let tensor = DenseND::<f64>::random_uniform(&[4, 3, 5, 2], 0.0, 1.0, 5);
    let tucker = tucker_hooi(&tensor, &[2, 2, 3, 1], 10, 1e-6).unwrap();

    assert_eq!(tucker.core.shape(), &[2, 2, 3, 1]);
    assert_eq!(tucker.ranks(), vec![2, 2, 3, 1]);
    assert_eq!(tucker.shape(), vec![4, 3, 5, 2]);
    assert!(tucker.fit > 0.0 && tucker.fit <= 1.0);

    let exact = tucker.relative_error(&tensor).unwrap();
    assert!((1.0 - exact - tucker.fit).abs() < 1e-8);

    let full = tucker_hosvd(&tensor, &[4, 3, 5, 2]).unwrap();
    assert!(full.reconstruct().unwrap().max_abs_diff(&tensor).unwrap() < 1e-10);
}

#[test]
fn test_random_init_deterministic() {
    let tensor = DenseND::<f64>::random_uniform(&[5, 5, 5], 0.0, 1.0, 8);
    let config = HooiConfig::default()
        .with_init(HooiInit::Random { seed: 77 })
        .with_max_iterations(4);

    let a = tucker_hooi_with(&Scirs2Provider, &tensor, &[2, 3, 2], &config).unwrap();
    let b = tucker_hooi_with(&Scirs2Provider, &tensor, &[2, 3, 2], &config).unwrap();

    assert_eq!(a.factors, b.factors);
    assert_eq!(a.core, b.core);
    assert_eq!(a.fit_history, b.fit_history);
}

#[test]
fn test_orderings_and_core_methods_agree() {
    let tensor = DenseND::<f64>::random_uniform(&[5, 4, 6], 0.0, 1.0, 31);
    let base = HooiConfig::default()
        .with_max_iterations(5)
        .with_fit_tolerance(0.0);

    let backward = tucker_hooi_with(&Scirs2Provider, &tensor, &[2, 2, 3], &base).unwrap();
    let forward = tucker_hooi_with(
        &Scirs2Provider,
        &tensor,
        &[2, 2, 3],
        &base.clone().with_unfold_order(UnfoldOrder::Forward),
    )
    .unwrap();
    let pinv = tucker_hooi_with(
        &Scirs2Provider,
        &tensor,
        &[2, 2, 3],
        &base.with_core_method(CoreMethod::PseudoInverse),
    )
    .unwrap();

    assert!((backward.fit - forward.fit).abs() < 1e-8);
    assert!((backward.fit - pinv.fit).abs() < 1e-8);
}

#[test]
fn test_zero_factor_policy_keeps_going() {
    let tensor = DenseND::<f64>::random_uniform(&[3, 4, 5], 0.0, 1.0, 6);
    let provider = FlakyEigen { failing_order: 4 };
    let config = HooiConfig::default().with_eigen_failure(EigenFailurePolicy::ZeroFactor);

    let tucker = tucker_hooi_with(&provider, &tensor, &[2, 2, 2], &config).unwrap();

    assert_eq!(tucker.degraded_modes, vec![1]);
    assert!(tucker.is_degraded());
    assert!(tucker.factors[1].iter().all(|&x| x == 0.0));
    // A zero factor annihilates the core
    assert!(tucker.fit.abs() < 1e-12);
}

#[test]
fn test_propagate_policy_errors() {
    let tensor = DenseND::<f64>::random_uniform(&[3, 4, 5], 0.0, 1.0, 6);
    let provider = FlakyEigen { failing_order: 4 };
    let config = HooiConfig::default().with_eigen_failure(EigenFailurePolicy::Propagate);

    let err = tucker_hooi_with(&provider, &tensor, &[2, 2, 2], &config).unwrap_err();
    assert!(matches!(err, TuckerError::Eigen { mode: 1, .. }));
}

#[test]
fn test_compression_on_smooth_volume() {
    // Smooth separable-plus-noise volume compresses well at low rank
    let tensor = DenseND::from_fn(&[12, 12, 12], |idx| {
        let x = idx[0] as f64 / 11.0;
        let y = idx[1] as f64 / 11.0;
        let z = idx[2] as f64 / 11.0;
        (x * 3.0).sin() * (y * 2.0).cos() + z * x + 0.5
    });
    let tucker = tucker_hooi(&tensor, &[3, 3, 3], 10, 1e-8).unwrap();

    assert!(tucker.compression_ratio() > 10.0);
    assert!(tucker.fit > 0.999, "fit {}", tucker.fit);
}
