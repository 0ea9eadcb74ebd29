//! # tuckr-core
//!
//! Dense tensor container and matricization for the tuckr decomposition stack.
//!
//! - **Dense tensor representation** ([`DenseND`]): fixed shape, mutable
//!   content, row-major storage, deep-copy semantics
//! - **Element access**: coordinate ↔ offset mapping, checked get/set, mode
//!   slices, rectangular sub-blocks, zero-padded block reads
//! - **Matricization** (unfold/fold) in two column orderings ([`UnfoldOrder`])
//! - **Raw persistence** ([`io`]): headerless little-endian element streams
//!
//! ## SciRS2 Integration
//!
//! Array storage and random numbers come from `scirs2-core`
//! (`ndarray_ext`, `numeric`, `random`). Direct use of `ndarray`, `rand` or
//! `num-traits` is not permitted.
//!
//! ## Quick Start
//!
//! ```
//! use tuckr_core::{DenseND, UnfoldOrder};
//!
//! let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
//! assert_eq!(tensor.rank(), 3);
//!
//! // Mode-0 unfolding, ascending column modes
//! let unfolded = tensor.unfold_with(0, UnfoldOrder::Forward).unwrap();
//! assert_eq!(unfolded.shape(), &[2, 12]);
//! assert_eq!(unfolded[[0, 11]], 11.0);
//!
//! // Fold back with the same ordering
//! let folded = DenseND::fold_with(&unfolded, &[2, 3, 4], 0, UnfoldOrder::Forward).unwrap();
//! assert_eq!(folded, tensor);
//! ```
//!
//! ## Indexing
//!
//! Indexing with `tensor[&[i, j, k]]` panics with "index out of range" on a bad
//! coordinate; that is a programming error. Use [`DenseND::get`] or
//! [`DenseND::set`] for checked access.
//!
//! ## Errors
//!
//! Fallible container operations return `anyhow::Result`.
//!
//! ## Features
//!
//! - `serde`: derive serialization for [`UnfoldOrder`]

#![deny(warnings)]

pub mod dense;
pub mod io;
pub mod scalar;

#[cfg(test)]
mod property_tests;

pub use dense::{DenseND, UnfoldOrder};
pub use scalar::Scalar;
