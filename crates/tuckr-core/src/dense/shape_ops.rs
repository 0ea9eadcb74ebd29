//! Shape manipulation: reshape, permute, and matricization
//!
//! Mode-k unfolding arranges the mode-k fibers of a tensor as the columns of
//! an `Iₖ × Πⱼ≠ₖ Iⱼ` matrix. Two column orderings are supported (see
//! [`UnfoldOrder`]); an unfold and the fold that undoes it must use the same
//! ordering, otherwise the elements land in the wrong places without any error.

use super::types::DenseND;
use scirs2_core::ndarray_ext::{Array2, Ix2, IxDyn};
use scirs2_core::numeric::Num;

/// Column ordering of a mode-k unfolding
///
/// Both orderings list the remaining modes and enumerate their coordinates
/// in row-major fashion over that list, so the last listed mode varies
/// fastest along a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnfoldOrder {
    /// Remaining modes in ascending order: `0, …, k−1, k+1, …, n−1`
    Forward,
    /// Remaining modes cyclically after k: `k+1, …, n−1, 0, …, k−1`
    /// (De Lathauwer et al. convention)
    #[default]
    Backward,
}

impl UnfoldOrder {
    /// The modes spanning the columns of a mode-`mode` unfolding of a
    /// rank-`rank` tensor, slowest-varying first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::UnfoldOrder;
    ///
    /// assert_eq!(UnfoldOrder::Forward.column_modes(1, 4), vec![0, 2, 3]);
    /// assert_eq!(UnfoldOrder::Backward.column_modes(1, 4), vec![2, 3, 0]);
    /// ```
    pub fn column_modes(self, mode: usize, rank: usize) -> Vec<usize> {
        match self {
            UnfoldOrder::Forward => (0..rank).filter(|&m| m != mode).collect(),
            UnfoldOrder::Backward => (1..rank).map(|offset| (mode + offset) % rank).collect(),
        }
    }

    /// Axis permutation that brings `mode` to the front followed by the
    /// column modes.
    fn permutation(self, mode: usize, rank: usize) -> Vec<usize> {
        let mut perm = Vec::with_capacity(rank);
        perm.push(mode);
        perm.extend(self.column_modes(mode, rank));
        perm
    }
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Reshape the tensor to a new shape (row-major element order is kept)
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let reshaped = tensor.reshape(&[6, 4]).unwrap();
    /// assert_eq!(reshaped.shape(), &[6, 4]);
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> anyhow::Result<Self> {
        let new_size: usize = new_shape.iter().product();
        let old_size = self.len();
        if new_size != old_size {
            anyhow::bail!(
                "Cannot reshape tensor of size {} into shape {:?} (size {})",
                old_size,
                new_shape,
                new_size
            );
        }
        Self::from_vec(self.to_vec(), new_shape)
    }

    /// Permute the axes of the tensor
    ///
    /// The result is materialized in row-major layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let permuted = tensor.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(permuted.shape(), &[4, 2, 3]);
    /// ```
    pub fn permute(&self, axes: &[usize]) -> anyhow::Result<Self> {
        if axes.len() != self.rank() {
            anyhow::bail!(
                "Permutation axes length {} does not match tensor rank {}",
                axes.len(),
                self.rank()
            );
        }
        let mut seen = vec![false; self.rank()];
        for &axis in axes {
            if axis >= self.rank() {
                anyhow::bail!("Invalid axis {} for rank {}", axis, self.rank());
            }
            if seen[axis] {
                anyhow::bail!("Duplicate axis {} in permutation", axis);
            }
            seen[axis] = true;
        }
        let permuted = self.data.view().permuted_axes(IxDyn(axes));
        Ok(Self {
            data: permuted.as_standard_layout().into_owned(),
        })
    }

    /// Unfold along `mode` with [`UnfoldOrder::Forward`] column ordering
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 3, 4]);
    /// let unfolded = tensor.unfold(1).unwrap();
    /// assert_eq!(unfolded.shape(), &[3, 8]);
    /// ```
    pub fn unfold(&self, mode: usize) -> anyhow::Result<Array2<T>> {
        self.unfold_with(mode, UnfoldOrder::Forward)
    }

    /// Unfold (matricize) the tensor along `mode` using the given ordering
    ///
    /// Returns an `I[mode] × Π(j≠mode) I[j]` matrix. A mode of extent 1 yields a
    /// single row; a rank-1 tensor yields a single column.
    ///
    /// # Errors
    ///
    /// Returns an error if `mode` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::{DenseND, UnfoldOrder};
    ///
    /// let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
    /// let m = tensor.unfold_with(1, UnfoldOrder::Backward).unwrap();
    /// assert_eq!(m.shape(), &[3, 8]);
    /// // columns walk mode 2 (slow) then mode 0 (fast)
    /// assert_eq!(m[[0, 1]], tensor[&[1, 0, 0]]);
    /// ```
    pub fn unfold_with(&self, mode: usize, order: UnfoldOrder) -> anyhow::Result<Array2<T>> {
        if mode >= self.rank() {
            anyhow::bail!("Mode {} out of bounds for rank {}", mode, self.rank());
        }

        let shape = self.shape();
        let rows = shape[mode];
        let cols: usize = shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mode)
            .map(|(_, &s)| s)
            .product();

        let perm = order.permutation(mode, self.rank());
        let permuted = self.data.view().permuted_axes(IxDyn(&perm));
        let flat: Vec<T> = permuted.iter().cloned().collect();

        Array2::from_shape_vec((rows, cols), flat)
            .map_err(|e| anyhow::anyhow!("Failed to build mode-{} unfolding: {}", mode, e))
    }

    /// Fold a [`UnfoldOrder::Forward`] unfolding back into a tensor
    pub fn fold(matrix: &Array2<T>, shape: &[usize], mode: usize) -> anyhow::Result<Self> {
        Self::fold_with(matrix, shape, mode, UnfoldOrder::Forward)
    }

    /// Fold (tensorize) a matrix back into a tensor of `shape`
    ///
    /// Exact inverse of [`unfold_with`](Self::unfold_with) for the same
    /// `(mode, order)` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if `mode` is out of bounds or the matrix is not
    /// `shape[mode] × Π(j≠mode) shape[j]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::{DenseND, UnfoldOrder};
    ///
    /// let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
    /// let m = tensor.unfold_with(2, UnfoldOrder::Backward).unwrap();
    /// let back = DenseND::fold_with(&m, &[2, 3, 4], 2, UnfoldOrder::Backward).unwrap();
    /// assert_eq!(back, tensor);
    /// ```
    pub fn fold_with(
        matrix: &Array2<T>,
        shape: &[usize],
        mode: usize,
        order: UnfoldOrder,
    ) -> anyhow::Result<Self> {
        if mode >= shape.len() {
            anyhow::bail!("Mode {} out of bounds for target shape {:?}", mode, shape);
        }

        let expected_rows = shape[mode];
        let expected_cols: usize = shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mode)
            .map(|(_, &s)| s)
            .product();

        if matrix.nrows() != expected_rows || matrix.ncols() != expected_cols {
            anyhow::bail!(
                "Matrix shape {:?} incompatible with target shape {:?} at mode {}",
                matrix.shape(),
                shape,
                mode
            );
        }

        let perm = order.permutation(mode, shape.len());
        let permuted_shape: Vec<usize> = perm.iter().map(|&p| shape[p]).collect();

        // Axis `perm[i]` of the target sits at position `i` of the
        // intermediate tensor
        let mut inverse_perm = vec![0; perm.len()];
        for (i, &p) in perm.iter().enumerate() {
            inverse_perm[p] = i;
        }

        let flat: Vec<T> = matrix.iter().cloned().collect();
        let intermediate = Self::from_vec(flat, &permuted_shape)?;
        intermediate.permute(&inverse_perm)
    }

    /// View a rank-2 tensor as a matrix
    pub fn to_matrix(&self) -> anyhow::Result<Array2<T>> {
        if self.rank() != 2 {
            anyhow::bail!("Expected a rank-2 tensor, got rank {}", self.rank());
        }
        self.data
            .clone()
            .into_dimensionality::<Ix2>()
            .map_err(|e| anyhow::anyhow!("Failed to convert to 2D: {}", e))
    }
}
