//! # tuckr - Dense Tucker Decomposition
//!
//! Meta crate that re-exports the tuckr components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tuckr::prelude::*;
//!
//! let tensor = DenseND::<f64>::random_uniform(&[6, 5, 4], 0.0, 1.0, 7);
//!
//! // One-shot HOSVD, then HOOI refinement
//! let hosvd = tucker_hosvd(&tensor, &[3, 3, 2])?;
//! let hooi = tucker_hooi(&tensor, &[3, 3, 2], 20, 1e-6)?;
//!
//! assert_eq!(hooi.core.shape(), &[3, 3, 2]);
//! assert!(hooi.fit + 1e-9 >= hosvd.fit);
//! # Ok::<(), TuckerError>(())
//! ```
//!
//! ## Components
//!
//! ### Dense tensors ([`core`])
//!
//! Fixed-shape row-major container, checked element access, sub-blocks,
//! unfold/fold in both column orderings, raw element I/O.
//!
//! ### Kernels ([`kernels`])
//!
//! n-mode products, the Tucker operator, mode covariance, SVD pseudo-inverse,
//! and the [`LinalgProvider`](kernels::LinalgProvider) seam that routes every
//! dense product and factorization.
//!
//! ### Decompositions ([`decomp`])
//!
//! HOSVD mode bases, core derivation, and the HOOI alternating loop with
//! fit tracking and convergence state.
//!
//! ## Features
//!
//! - `serde`: serialization of configuration types

#![deny(warnings)]

pub use tuckr_core as core;
pub use tuckr_decomp as decomp;
pub use tuckr_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tuckr::prelude::*;
    //!
    //! let config = HooiConfig::default().with_unfold_order(UnfoldOrder::Forward);
    //! assert_eq!(config.unfold_order, UnfoldOrder::Forward);
    //! ```

    // Core types
    pub use crate::core::{DenseND, Scalar, UnfoldOrder};

    // Decomposition
    pub use crate::decomp::{
        tucker_hooi, tucker_hooi_with, tucker_hosvd, tucker_hosvd_with, CoreMethod,
        EigenFailurePolicy, HooiConfig, HooiInit, HooiState, TuckerDecomp, TuckerError,
    };

    // Kernels
    pub use crate::kernels::{
        mode_covariance, nmode_product, pseudo_inverse, tucker_operator, LinalgProvider,
        Scirs2Provider,
    };
}
