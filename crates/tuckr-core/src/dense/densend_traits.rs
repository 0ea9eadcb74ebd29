//! # DenseND - Trait Implementations
//!
//! - `Index` / `IndexMut` by coordinate slice
//! - `Debug`

use super::types::DenseND;
use scirs2_core::ndarray_ext::IxDyn;
use scirs2_core::numeric::Num;
use std::fmt;

/// Panic with an index-out-of-range message if `index` is not a valid
/// coordinate for `shape`.
#[track_caller]
fn check_coordinate(shape: &[usize], index: &[usize]) {
    if index.len() != shape.len() || index.iter().zip(shape).any(|(&i, &n)| i >= n) {
        panic!(
            "index out of range: coordinate {:?} for tensor of shape {:?}",
            index, shape
        );
    }
}

impl<T> std::ops::Index<&[usize]> for DenseND<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: &[usize]) -> &Self::Output {
        check_coordinate(self.data.shape(), index);
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for DenseND<T> {
    #[track_caller]
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        check_coordinate(self.data.shape(), index);
        &mut self.data[IxDyn(index)]
    }
}

impl<T, const N: usize> std::ops::Index<&[usize; N]> for DenseND<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: &[usize; N]) -> &Self::Output {
        &self[&index[..]]
    }
}

impl<T, const N: usize> std::ops::IndexMut<&[usize; N]> for DenseND<T> {
    #[track_caller]
    fn index_mut(&mut self, index: &[usize; N]) -> &mut Self::Output {
        &mut self[&index[..]]
    }
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("data", &self.data)
            .finish()
    }
}
