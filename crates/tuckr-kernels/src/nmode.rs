//! N-mode product implementation (TTM - Tensor Times Matrix)
//!
//! The N-mode product multiplies a tensor by a matrix along a specific mode.
//! For tensor X ∈ ℝ^(I₁×...×Iₙ) and matrix M ∈ ℝ^(J×Iₖ), the result
//! Y = X ×ₖ M has shape (I₁×...×Iₖ₋₁×J×Iₖ₊₁×...×Iₙ).
//!
//! Every product here is unfold → `provider.matmul` → fold, with the same mode
//! and [`UnfoldOrder`] on both sides. Multi-mode contractions always run in
//! ascending mode order so intermediate shapes (and rounding) are reproducible.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use crate::provider::{LinalgProvider, Scirs2Provider};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use tuckr_core::{DenseND, Scalar, UnfoldOrder};

/// Compute the N-mode product `X ×ₖ M` through `provider`
///
/// # Algorithm
///
/// 1. Unfold X along `mode` (ordering `order`) to X₍ₖ₎ of shape (Iₖ, ∏ᵢ≠ₖ Iᵢ)
/// 2. Y₍ₖ₎ = M · X₍ₖ₎ with shape (J, ∏ᵢ≠ₖ Iᵢ)
/// 3. Fold Y₍ₖ₎ with the same mode and ordering
///
/// # Errors
///
/// - [`KernelError::InvalidMode`] if `mode >= tensor.rank()`
/// - [`KernelError::DimensionMismatch`] if `matrix.ncols() != extent[mode]`
/// - [`KernelError::Provider`] if the multiplication fails
///
/// # Complexity
///
/// Time: O(J · total_elements), Space: O(J · ∏ᵢ≠ₖ Iᵢ)
pub fn nmode_product_with<T, P>(
    provider: &P,
    tensor: &DenseND<T>,
    matrix: &ArrayView2<T>,
    mode: usize,
    order: UnfoldOrder,
) -> KernelResult<DenseND<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    let rank = tensor.rank();
    if mode >= rank {
        return Err(KernelError::invalid_mode(
            mode,
            rank,
            "N-mode product mode out of bounds",
        ));
    }

    let mode_size = tensor.shape()[mode];
    if matrix.ncols() != mode_size {
        return Err(KernelError::dimension_mismatch(
            "nmode_product",
            vec![mode_size],
            vec![matrix.ncols()],
            format!("Matrix columns must match tensor mode-{} size", mode),
        ));
    }

    let unfolded = tensor
        .unfold_with(mode, order)
        .map_err(|e| KernelError::operation_error("nmode_product", e))?;
    let product = provider.matmul(matrix, &unfolded.view())?;

    let mut new_shape = tensor.shape_vec();
    new_shape[mode] = matrix.nrows();
    DenseND::fold_with(&product, &new_shape, mode, order)
        .map_err(|e| KernelError::operation_error("nmode_product", e))
}

/// N-mode product with the default provider and forward ordering
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tuckr_core::DenseND;
/// use tuckr_kernels::nmode_product;
///
/// let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
///
/// // 5×3 matrix replaces the mode-1 extent
/// let matrix = array![[1.0, 0.0, 0.0],
///                      [0.0, 1.0, 0.0],
///                      [0.0, 0.0, 1.0],
///                      [1.0, 1.0, 0.0],
///                      [0.0, 1.0, 1.0]];
///
/// let result = nmode_product(&tensor, &matrix.view(), 1).unwrap();
/// assert_eq!(result.shape(), &[2, 5, 4]);
/// ```
pub fn nmode_product<T: Scalar>(
    tensor: &DenseND<T>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> KernelResult<DenseND<T>> {
    nmode_product_with(&Scirs2Provider, tensor, matrix, mode, UnfoldOrder::Forward)
}

/// Apply `(matrix, mode)` pairs in the order given
pub fn nmode_products_seq<T, P>(
    provider: &P,
    tensor: &DenseND<T>,
    matrices: &[(&ArrayView2<T>, usize)],
    order: UnfoldOrder,
) -> KernelResult<DenseND<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    let mut result = tensor.clone();
    for (matrix, mode) in matrices {
        result = nmode_product_with(provider, &result, matrix, *mode, order)?;
    }
    Ok(result)
}

/// Tucker operator `X ×₀ M₀ ×₁ M₁ … ×ₙ₋₁ Mₙ₋₁`
///
/// One matrix per mode, applied in ascending mode order.
///
/// # Errors
///
/// [`KernelError::EmptyInput`] for an empty `matrices` list,
/// [`KernelError::DimensionMismatch`] if `matrices.len() != tensor.rank()`,
/// plus anything [`nmode_product_with`] reports.
pub fn tucker_operator_with<T, P>(
    provider: &P,
    tensor: &DenseND<T>,
    matrices: &[Array2<T>],
    order: UnfoldOrder,
) -> KernelResult<DenseND<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    if matrices.is_empty() {
        return Err(KernelError::empty_input("tucker_operator", "matrices"));
    }
    if matrices.len() != tensor.rank() {
        return Err(KernelError::dimension_mismatch(
            "tucker_operator",
            vec![tensor.rank()],
            vec![matrices.len()],
            "Need exactly one matrix per mode",
        ));
    }

    let mut result = tensor.clone();
    for (mode, matrix) in matrices.iter().enumerate() {
        result = nmode_product_with(provider, &result, &matrix.view(), mode, order)?;
    }
    Ok(result)
}

/// Tucker operator with the default provider
pub fn tucker_operator<T: Scalar>(
    tensor: &DenseND<T>,
    matrices: &[Array2<T>],
    order: UnfoldOrder,
) -> KernelResult<DenseND<T>> {
    tucker_operator_with(&Scirs2Provider, tensor, matrices, order)
}

/// Reconstruct `G ×₀ U₀ ×₁ U₁ … ×ₙ₋₁ Uₙ₋₁` from a core and its factors
///
/// Each factor Uₖ has shape (Iₖ, Rₖ); the result has shape (I₀, …, Iₙ₋₁).
pub fn tucker_reconstruct_with<T, P>(
    provider: &P,
    core: &DenseND<T>,
    factors: &[Array2<T>],
    order: UnfoldOrder,
) -> KernelResult<DenseND<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    tucker_operator_with(provider, core, factors, order)
}

/// Contract with `Uₖᵗ` on every mode except `skip`, ascending
///
/// This is the HOOI projection `Y = X ×₀ U₀ᵗ … ×ₛₖᵢₚ I … ×ₙ₋₁ Uₙ₋₁ᵗ`. The
/// result keeps extent `Iₛₖᵢₚ` on mode `skip` and `Rₖ` everywhere else.
///
/// # Errors
///
/// [`KernelError::DimensionMismatch`] if `factors.len() != tensor.rank()`,
/// [`KernelError::InvalidMode`] if `skip` is out of range.
pub fn project_except_with<T, P>(
    provider: &P,
    tensor: &DenseND<T>,
    factors: &[Array2<T>],
    skip: usize,
    order: UnfoldOrder,
) -> KernelResult<DenseND<T>>
where
    T: Scalar,
    P: LinalgProvider<T> + ?Sized,
{
    if factors.len() != tensor.rank() {
        return Err(KernelError::dimension_mismatch(
            "project_except",
            vec![tensor.rank()],
            vec![factors.len()],
            "Need exactly one factor per mode",
        ));
    }
    if skip >= tensor.rank() {
        return Err(KernelError::invalid_mode(
            skip,
            tensor.rank(),
            "Skipped mode out of bounds",
        ));
    }

    let mut result = tensor.clone();
    for (mode, factor) in factors.iter().enumerate() {
        if mode == skip {
            continue;
        }
        result = nmode_product_with(provider, &result, &factor.t(), mode, order)?;
    }
    Ok(result)
}

/// HOOI projection with the default provider
pub fn project_except<T: Scalar>(
    tensor: &DenseND<T>,
    factors: &[Array2<T>],
    skip: usize,
    order: UnfoldOrder,
) -> KernelResult<DenseND<T>> {
    project_except_with(&Scirs2Provider, tensor, factors, skip, order)
}
