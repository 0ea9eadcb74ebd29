//! Error types for tensor kernel operations
//!
//! Structured errors for the contraction and linear-algebra kernels. Container
//! errors from `tuckr-core` (which are `anyhow`) are folded into
//! [`KernelError::OperationError`] with the failing operation named.

use thiserror::Error;

/// Error type for tensor kernel operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Dimension mismatch between operands
    #[error("{operation}: dimension mismatch - expected {expected:?}, got {actual:?}. {context}")]
    DimensionMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: String,
    },

    /// Invalid mode/axis specification
    #[error("Invalid mode {mode}: must be < {max_mode}. {context}")]
    InvalidMode {
        mode: usize,
        max_mode: usize,
        context: String,
    },

    /// Empty input not allowed
    #[error("{operation}: empty input not allowed for parameter '{parameter}'")]
    EmptyInput { operation: String, parameter: String },

    /// A linear-algebra provider reported a numerical failure
    #[error("{operation}: provider failure: {message}")]
    Provider { operation: String, message: String },

    /// Generic operation error with context
    #[error("{operation}: {message}")]
    OperationError { operation: String, message: String },
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: impl Into<String>,
    ) -> Self {
        KernelError::DimensionMismatch {
            operation: operation.into(),
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create an invalid mode error
    pub fn invalid_mode(mode: usize, max_mode: usize, context: impl Into<String>) -> Self {
        KernelError::InvalidMode {
            mode,
            max_mode,
            context: context.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        KernelError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a provider failure error
    pub fn provider(operation: impl Into<String>, message: impl std::fmt::Display) -> Self {
        KernelError::Provider {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    /// Create a generic operation error
    pub fn operation_error(operation: impl Into<String>, message: impl std::fmt::Display) -> Self {
        KernelError::OperationError {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    /// True for numerical failures reported by a provider
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, KernelError::Provider { .. })
    }
}
