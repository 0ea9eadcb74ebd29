//! Norms and comparison diagnostics
//!
//! These feed the fit computation of the decomposition loop and the
//! reconstruction checks in tests.

use super::types::DenseND;
use scirs2_core::numeric::Float;

impl<T> DenseND<T>
where
    T: Float,
{
    /// Squared Frobenius norm: Σ x²
    pub fn frobenius_norm_sq(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }

    /// Frobenius norm: sqrt(Σ x²)
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 3]);
    /// assert!((tensor.frobenius_norm() - 6.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_sq().sqrt()
    }

    /// Largest absolute elementwise difference between two same-shaped tensors
    pub fn max_abs_diff(&self, other: &Self) -> anyhow::Result<T> {
        self.check_same_shape(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.max((a - b).abs())))
    }

    /// Relative error ‖self − other‖_F / ‖self‖_F
    ///
    /// When `self` is all zeros the absolute error ‖other‖_F is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let a = DenseND::<f64>::ones(&[2, 2]);
    /// let b = DenseND::<f64>::from_elem(&[2, 2], 1.5);
    /// assert!((a.relative_error(&b).unwrap() - 0.5).abs() < 1e-12);
    /// ```
    pub fn relative_error(&self, other: &Self) -> anyhow::Result<T> {
        self.check_same_shape(other)?;
        let diff_sq = self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b));
        let norm = self.frobenius_norm();
        if norm == T::zero() {
            Ok(diff_sq.sqrt())
        } else {
            Ok(diff_sq.sqrt() / norm)
        }
    }

    fn check_same_shape(&self, other: &Self) -> anyhow::Result<()> {
        if self.shape() != other.shape() {
            anyhow::bail!(
                "Shape mismatch: {:?} vs {:?}",
                self.shape(),
                other.shape()
            );
        }
        Ok(())
    }
}
