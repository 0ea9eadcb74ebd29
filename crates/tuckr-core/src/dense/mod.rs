//! Dense tensor implementation and operations
//!
//! The `DenseND` type and its operations, split by concern.

// Core type definition
pub mod types;

// Operation modules
mod creation;
mod indexing;
mod shape_ops;
mod statistics;

// Supporting modules
pub mod densend_traits;

pub use shape_ops::UnfoldOrder;
pub use types::DenseND;
