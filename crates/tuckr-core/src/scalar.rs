//! Element bound shared by the numerical crates
//!
//! The decomposition kernels call into `scirs2_linalg`, which needs the same
//! family of traits on every entry point. `Scalar` bundles them once so the
//! rest of the stack can write `T: Scalar` instead of repeating the list.

use scirs2_core::ndarray_ext::ScalarOperand;
use scirs2_core::numeric::{Float, FromPrimitive, NumAssign, NumCast};
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Floating-point element type usable by every tensor kernel (`f32`, `f64`).
pub trait Scalar:
    Float
    + FromPrimitive
    + NumCast
    + NumAssign
    + Sum
    + ScalarOperand
    + Send
    + Sync
    + Debug
    + Display
    + 'static
{
    /// Convert an `f64` constant into this type.
    ///
    /// Every `Scalar` can represent (a rounding of) any finite `f64`, so the
    /// conversion cannot fail for finite input.
    fn from_f64_lossy(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Widen this value to `f64` for diagnostics and logging.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Scalar for T where
    T: Float
        + FromPrimitive
        + NumCast
        + NumAssign
        + Sum
        + ScalarOperand
        + Send
        + Sync
        + Debug
        + Display
        + 'static
{
}
