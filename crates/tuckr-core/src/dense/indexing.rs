//! Coordinate mapping, element access, slices and rectangular sub-blocks
//!
//! Flat offsets follow the row-major layout documented on [`DenseND`]. Slices
//! fix one mode at one index; sub-blocks cut an axis-aligned box out of the
//! tensor. [`DenseND::block_padded`] reads a box that may extend past the
//! stored extents and fills the overhang with zeros.

use super::types::DenseND;
use scirs2_core::ndarray::{Slice, SliceInfoElem};
use scirs2_core::ndarray_ext::{Axis, IxDyn};
use scirs2_core::numeric::Num;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Map a coordinate tuple to its flat row-major offset
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate has the wrong arity or any
    /// component is outside its extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.offset_of(&[1, 2, 3]).unwrap(), 23);
    /// assert!(tensor.offset_of(&[2, 0, 0]).is_err());
    /// ```
    pub fn offset_of(&self, coords: &[usize]) -> anyhow::Result<usize> {
        self.check_coords(coords)?;
        Ok(coords
            .iter()
            .zip(self.shape())
            .fold(0, |acc, (&i, &n)| acc * n + i))
    }

    /// Map a flat row-major offset back to its coordinate tuple
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.coords_of(23).unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn coords_of(&self, offset: usize) -> anyhow::Result<Vec<usize>> {
        if offset >= self.len() {
            anyhow::bail!(
                "Offset {} out of range for tensor with {} elements",
                offset,
                self.len()
            );
        }
        let shape = self.shape();
        let mut coords = vec![0; shape.len()];
        let mut remaining = offset;
        for d in (0..shape.len()).rev() {
            coords[d] = remaining % shape[d];
            remaining /= shape[d];
        }
        Ok(coords)
    }

    /// Get an element by coordinate without panicking
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[5, 5]), None);
    /// ```
    pub fn get(&self, coords: &[usize]) -> Option<&T> {
        if coords.len() != self.rank() {
            return None;
        }
        self.data.get(IxDyn(coords))
    }

    /// Get a mutable reference to an element by coordinate without panicking
    pub fn get_mut(&mut self, coords: &[usize]) -> Option<&mut T> {
        if coords.len() != self.rank() {
            return None;
        }
        self.data.get_mut(IxDyn(coords))
    }

    /// Write a single element, reporting an out-of-range coordinate as an error
    pub fn set(&mut self, coords: &[usize], value: T) -> anyhow::Result<()> {
        self.check_coords(coords)?;
        self.data[IxDyn(coords)] = value;
        Ok(())
    }

    /// Get the underlying data as a contiguous row-major slice
    pub fn as_slice(&self) -> Option<&[T]> {
        self.data.as_slice()
    }

    /// Extract the slice at `index` along `mode`
    ///
    /// The result has rank `n − 1` (the fixed mode is removed).
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
    /// let front = tensor.slice(0, 1).unwrap();
    /// assert_eq!(front.shape(), &[3, 4]);
    /// assert_eq!(front[&[0, 0]], 12.0);
    /// ```
    pub fn slice(&self, mode: usize, index: usize) -> anyhow::Result<Self> {
        self.check_slice(mode, index)?;
        Ok(Self::from_array(
            self.data.index_axis(Axis(mode), index).to_owned(),
        ))
    }

    /// Overwrite the slice at `index` along `mode` with `values`
    ///
    /// `values` must have this tensor's shape with `mode` removed.
    pub fn set_slice(&mut self, mode: usize, index: usize, values: &Self) -> anyhow::Result<()> {
        self.check_slice(mode, index)?;
        let mut target = self.data.index_axis_mut(Axis(mode), index);
        if target.shape() != values.shape() {
            anyhow::bail!(
                "Slice shape {:?} does not match values shape {:?}",
                target.shape(),
                values.shape()
            );
        }
        target.assign(&values.data);
        Ok(())
    }

    /// Copy out the rectangular block starting at `offsets` with `extents`
    ///
    /// # Errors
    ///
    /// Returns an error if the block does not lie entirely inside the tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
    /// let block = tensor.sub_block(&[1, 1, 2], &[1, 2, 2]).unwrap();
    /// assert_eq!(block.to_vec(), vec![18.0, 19.0, 22.0, 23.0]);
    /// ```
    pub fn sub_block(&self, offsets: &[usize], extents: &[usize]) -> anyhow::Result<Self> {
        self.check_block(offsets, extents)?;
        let info = block_slice_info(offsets, extents);
        Ok(Self::from_array(
            self.data.slice(info.as_slice()).to_owned(),
        ))
    }

    /// Write `block` into this tensor starting at `offsets`
    pub fn set_sub_block(&mut self, offsets: &[usize], block: &Self) -> anyhow::Result<()> {
        self.check_block(offsets, block.shape())?;
        let info = block_slice_info(offsets, block.shape());
        self.data
            .slice_mut(info.as_slice())
            .assign(&block.data);
        Ok(())
    }

    /// Read a block that may extend past the stored extents
    ///
    /// Elements whose coordinate is at or beyond the stored extent on any
    /// axis are zero. Only the arity of `offsets`/`extents` is validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 2]);
    /// let block = tensor.block_padded(&[1, 1], &[2, 2]).unwrap();
    /// assert_eq!(block.to_vec(), vec![1.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn block_padded(&self, offsets: &[usize], extents: &[usize]) -> anyhow::Result<Self> {
        if offsets.len() != self.rank() || extents.len() != self.rank() {
            anyhow::bail!(
                "Block offsets {:?} / extents {:?} do not match tensor rank {}",
                offsets,
                extents,
                self.rank()
            );
        }

        let mut block = Self::zeros(extents);
        // Intersection of the requested box with the stored extents
        let overlap: Vec<usize> = offsets
            .iter()
            .zip(extents)
            .zip(self.shape())
            .map(|((&o, &e), &n)| e.min(n.saturating_sub(o)))
            .collect();
        if overlap.iter().any(|&e| e == 0) {
            return Ok(block);
        }

        let source = block_slice_info(offsets, &overlap);
        let target = block_slice_info(&vec![0; overlap.len()], &overlap);
        block
            .data
            .slice_mut(target.as_slice())
            .assign(&self.data.slice(source.as_slice()));
        Ok(block)
    }

    fn check_coords(&self, coords: &[usize]) -> anyhow::Result<()> {
        if coords.len() != self.rank() {
            anyhow::bail!(
                "Coordinate {:?} has arity {}, tensor rank is {}",
                coords,
                coords.len(),
                self.rank()
            );
        }
        for (axis, (&i, &n)) in coords.iter().zip(self.shape()).enumerate() {
            if i >= n {
                anyhow::bail!(
                    "Index out of range: coordinate {} on axis {} (extent {})",
                    i,
                    axis,
                    n
                );
            }
        }
        Ok(())
    }

    fn check_slice(&self, mode: usize, index: usize) -> anyhow::Result<()> {
        if mode >= self.rank() {
            anyhow::bail!("Mode {} out of bounds for rank {}", mode, self.rank());
        }
        if index >= self.shape()[mode] {
            anyhow::bail!(
                "Index out of range: slice {} along mode {} (extent {})",
                index,
                mode,
                self.shape()[mode]
            );
        }
        Ok(())
    }

    fn check_block(&self, offsets: &[usize], extents: &[usize]) -> anyhow::Result<()> {
        if offsets.len() != self.rank() || extents.len() != self.rank() {
            anyhow::bail!(
                "Block offsets {:?} / extents {:?} do not match tensor rank {}",
                offsets,
                extents,
                self.rank()
            );
        }
        for (axis, ((&o, &e), &n)) in offsets.iter().zip(extents).zip(self.shape()).enumerate() {
            if o + e > n {
                anyhow::bail!(
                    "Index out of range: block [{}, {}) on axis {} (extent {})",
                    o,
                    o + e,
                    axis,
                    n
                );
            }
        }
        Ok(())
    }
}

fn block_slice_info(offsets: &[usize], extents: &[usize]) -> Vec<SliceInfoElem> {
    offsets
        .iter()
        .zip(extents)
        .map(|(&o, &e)| SliceInfoElem::from(Slice::from(o..o + e)))
        .collect()
}
