//! Random orthonormal factor initialization
//!
//! A Gaussian matrix is orthonormalized with QR and truncated to its first
//! Rₖ columns. The generator is seeded, so a given seed always produces the
//! same factors.

use crate::error::TuckerError;
use scirs2_core::ndarray_ext::{s, Array2};
use scirs2_core::random::{rngs::StdRng, Distribution, RandNormal as Normal, SeedableRng};
use scirs2_linalg::qr;
use tuckr_core::Scalar;
use tuckr_kernels::KernelError;

/// One `rows × cols` matrix with orthonormal columns drawn from `rng`
pub fn random_orthonormal<T: Scalar>(
    rows: usize,
    cols: usize,
    rng: &mut StdRng,
) -> Result<Array2<T>, TuckerError> {
    if cols == 0 || cols > rows {
        return Err(TuckerError::InvalidRanks(format!(
            "Cannot draw {} orthonormal columns of length {}",
            cols, rows
        )));
    }

    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        KernelError::operation_error("random_orthonormal", format!("{:?}", e))
    })?;
    let gaussian =
        Array2::<T>::from_shape_fn((rows, cols), |_| T::from_f64_lossy(normal.sample(rng)));

    // Q may come back as rows × rows; keep the first `cols` columns
    let (q_full, _r) = qr(&gaussian.view(), None)?;
    Ok(q_full.slice(s![.., ..cols]).to_owned())
}

/// One orthonormal factor per `(extent, rank)` pair, from a single seeded stream
pub fn random_factors<T: Scalar>(
    shape: &[usize],
    ranks: &[usize],
    seed: u64,
) -> Result<Vec<Array2<T>>, TuckerError> {
    let mut rng = StdRng::seed_from_u64(seed);
    shape
        .iter()
        .zip(ranks)
        .map(|(&rows, &cols)| random_orthonormal(rows, cols, &mut rng))
        .collect()
}
