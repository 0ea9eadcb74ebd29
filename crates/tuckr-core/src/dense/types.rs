//! Dense tensor type definition and basic operations
//!
//! This module defines the core `DenseND<T>` type and provides basic creation
//! and accessor methods. Slicing, unfolding and norms live in sibling modules.

use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, Dimension, IxDyn};
use scirs2_core::numeric::Num;

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// The shape is fixed at construction; the content is mutable. Elements are
/// stored contiguously in row-major order, so the flat offset of a coordinate
/// `(i₀, …, iₙ₋₁)` is `Σₖ iₖ · Πⱼ>ₖ Iⱼ` (the last mode varies fastest).
///
/// `Clone` produces an independent deep copy; tensors never alias.
///
/// # Examples
///
/// ```
/// use tuckr_core::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone, PartialEq)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing ndarray
    ///
    /// Non-standard layouts are copied into row-major order so that flat
    /// offsets stay meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array;
    /// use tuckr_core::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(vec![2, 3]);
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        if array.is_standard_layout() {
            Self { data: array }
        } else {
            Self {
                data: array.as_standard_layout().into_owned(),
            }
        }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a tensor from row data
    ///
    /// Each row holds `shape[last]` consecutive elements; rows are laid out
    /// in row-major order over the leading modes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
    /// let tensor = DenseND::from_rows(&rows, &[3, 2]).unwrap();
    /// assert_eq!(tensor[&[2, 1]], 6.0);
    /// ```
    pub fn from_rows(rows: &[Vec<T>], shape: &[usize]) -> anyhow::Result<Self> {
        let Some(&row_len) = shape.last() else {
            anyhow::bail!("Cannot build a rank-0 tensor from rows");
        };
        let expected_rows: usize = shape[..shape.len() - 1].iter().product();
        if rows.len() != expected_rows {
            anyhow::bail!(
                "Shape {:?} requires {} rows, but got {}",
                shape,
                expected_rows,
                rows.len()
            );
        }

        let mut flat = Vec::with_capacity(expected_rows * row_len);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != row_len {
                anyhow::bail!(
                    "Row {} has {} elements, expected {}",
                    r,
                    row.len(),
                    row_len
                );
            }
            flat.extend(row.iter().cloned());
        }
        Self::from_vec(flat, shape)
    }

    /// Create a tensor whose elements are produced from their coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let t = DenseND::from_fn(&[2, 3], |idx| (idx[0] * 3 + idx[1]) as f64);
    /// assert_eq!(t[&[1, 2]], 5.0);
    /// ```
    pub fn from_fn<F>(shape: &[usize], mut f: F) -> Self
    where
        F: FnMut(&[usize]) -> T,
    {
        Self {
            data: Array::from_shape_fn(IxDyn(shape), |idx| f(idx.slice())),
        }
    }

    /// Get the rank (number of modes) of this tensor
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get a copy of the shape as a vector.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    /// Get the total number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.len(), 24);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if two tensors have the same shape
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Consume the tensor and return the underlying ndarray
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    /// Get an immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Get a mutable view of the tensor
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, IxDyn> {
        self.data.view_mut()
    }

    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3], 5.0);
    /// assert_eq!(tensor[&[1, 2]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a tensor of zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Create a tensor of ones
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// Overwrite every element with `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let mut tensor = DenseND::<f64>::ones(&[2, 2]);
    /// tensor.fill(3.0);
    /// assert!(tensor.iter().all(|&x| x == 3.0));
    /// ```
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Reset every element to zero
    pub fn set_zero(&mut self) {
        self.fill(T::zero());
    }

    /// Fill the tensor with values produced by a function of the coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let mut tensor = DenseND::<f64>::zeros(&[2, 3]);
    /// tensor.fill_with(|idx| (idx[0] + idx[1]) as f64);
    /// assert_eq!(tensor[&[1, 2]], 3.0);
    /// ```
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(&[usize]) -> T,
    {
        for (idx, elem) in self.data.indexed_iter_mut() {
            *elem = f(idx.slice());
        }
    }

    /// Convert the tensor to a flat vector in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Consume the tensor and return its elements in row-major order
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_iter().collect()
    }

    /// Iterate over all elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Get the number of bytes used by the tensor data
    pub fn size_bytes(&self) -> usize {
        self.len() * std::mem::size_of::<T>()
    }
}
