//! # tuckr-kernels
//!
//! Tensor kernels for Tucker decomposition.
//!
//! ## Overview
//!
//! - **N-mode products (TTM)**: tensor-matrix multiplication along any mode,
//!   sequenced products, the Tucker operator and the HOOI projection
//!   ([`project_except_with`])
//! - **Mode covariance**: `X₍ₖ₎ X₍ₖ₎ᵗ` per mode, exactly symmetric
//! - **Pseudo-inverse**: SVD-based with rank filtering
//! - **Provider seam**: [`LinalgProvider`] abstracts matrix multiply,
//!   symmetric eigendecomposition and thin SVD; [`Scirs2Provider`] is the
//!   default
//!
//! Functions ending in `_with` take an explicit provider and ordering; the
//! short forms use [`Scirs2Provider`].
//!
//! ## Quick Start
//!
//! ```rust
//! use scirs2_core::ndarray_ext::Array2;
//! use tuckr_core::{DenseND, UnfoldOrder};
//! use tuckr_kernels::{mode_covariance, nmode_product};
//!
//! // N-mode product (tensor-matrix multiplication)
//! let tensor = DenseND::<f64>::ones(&[3, 4, 5]);
//! let matrix = Array2::<f64>::ones((2, 3));
//! let result = nmode_product(&tensor, &matrix.view(), 0).unwrap();
//! assert_eq!(result.shape(), &[2, 4, 5]); // mode-0 changed from 3 to 2
//!
//! // Mode covariance (HOSVD input)
//! let cov = mode_covariance(&tensor, 1, UnfoldOrder::Backward).unwrap();
//! assert_eq!(cov.shape(), &[4, 4]);
//! assert_eq!(cov[[0, 0]], 15.0);
//! ```
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array operations and numerical
//! computations, and `scirs2-linalg` for decompositions. Direct use of
//! `ndarray`, `rand`, or `num-traits` is not permitted.

#![deny(warnings)]

pub mod covariance;
pub mod error;
pub mod nmode;
pub mod pinv;
pub mod provider;

// Re-exports
pub use covariance::*;
pub use error::*;
pub use nmode::*;
pub use pinv::*;
pub use provider::*;
