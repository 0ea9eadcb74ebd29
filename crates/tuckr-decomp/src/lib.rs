//! # tuckr-decomp - Tucker Decomposition
//!
//! Truncated Tucker decomposition of dense tensors:
//!
//! ```text
//! X ≈ G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ
//! ```
//!
//! **Use cases:**
//! - Volume and image compression
//! - Feature extraction from multi-way data
//! - Hyperspectral imaging
//!
//! **Algorithms:**
//! - [`tucker_hosvd`]: one pass over the mode covariances
//! - [`tucker_hooi`]: Higher-Order Orthogonal Iteration (ALS) refinement
//!
//! The building blocks are public too: [`mode_basis`] (one HOSVD step),
//! [`derive_core`] (orthogonal or pseudo-inverse core), [`random_factors`].
//!
//! ## Quick Start
//!
//! ```
//! use tuckr_core::DenseND;
//! use tuckr_decomp::{tucker_hooi_with, HooiConfig, HooiInit, HooiState};
//! use tuckr_kernels::Scirs2Provider;
//!
//! let tensor = DenseND::<f64>::random_uniform(&[8, 8, 8], 0.0, 1.0, 1);
//!
//! let config = HooiConfig::default()
//!     .with_max_iterations(25)
//!     .with_fit_tolerance(1e-8)
//!     .with_init(HooiInit::Random { seed: 3 });
//! let tucker = tucker_hooi_with(&Scirs2Provider, &tensor, &[3, 3, 3], &config).unwrap();
//!
//! assert_eq!(tucker.core.shape(), &[3, 3, 3]);
//! assert_ne!(tucker.state, HooiState::Initialized);
//! println!("fit {:.4} after {} sweeps", tucker.fit, tucker.iters);
//! ```
//!
//! ## Eigensolver failures
//!
//! By default a failed eigendecomposition yields an all-zero factor, the mode
//! is listed in [`TuckerDecomp::degraded_modes`] and a warning is logged.
//! Set [`EigenFailurePolicy::Propagate`] to get [`TuckerError::Eigen`] instead.
//!
//! ## Logging
//!
//! Per-sweep fit is logged at `debug`, degraded results at `warn`, through the
//! `log` facade. No logger is installed by this crate.
//!
//! ## Features
//!
//! - `serde`: derive serialization for [`HooiConfig`] and its enums
//!
//! ## SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`; QR comes from
//! `scirs2_linalg`. Direct use of `ndarray` or `rand` is not permitted.

#![deny(warnings)]

pub mod basis;
pub mod core_tensor;
pub mod error;
pub mod hooi;
pub mod init;
pub mod tucker;


// Re-exports
pub use basis::*;
pub use core_tensor::*;
pub use error::*;
pub use hooi::*;
pub use init::*;
pub use tucker::*;
