//! Error type for Tucker decompositions

use scirs2_linalg::LinalgError;
use thiserror::Error;
use tuckr_kernels::KernelError;

#[derive(Error, Debug)]
pub enum TuckerError {
    #[error("Invalid ranks: {0}")]
    InvalidRanks(String),

    /// The eigensolver failed and the configured policy is to propagate
    #[error("Eigendecomposition failed for mode {mode}: {source}")]
    Eigen {
        mode: usize,
        #[source]
        source: KernelError,
    },

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("Linear algebra error: {0}")]
    Linalg(#[from] LinalgError),
}
