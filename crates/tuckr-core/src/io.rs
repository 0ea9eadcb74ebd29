//! Raw tensor persistence
//!
//! Tensors are stored as a flat little-endian element stream in row-major
//! order, with no header. The shape is agreed out-of-band: `read_raw` takes it
//! as an argument and rejects files whose length does not match.
//!
//! ```no_run
//! use tuckr_core::{io, DenseND};
//!
//! let tensor = DenseND::<f64>::random_uniform(&[8, 8, 8], 0.0, 1.0, 1);
//! io::write_raw("volume.raw", &tensor)?;
//! let back = io::read_raw::<f64, _>("volume.raw", &[8, 8, 8])?;
//! assert_eq!(back, tensor);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::DenseND;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Element types with a fixed little-endian byte encoding
pub trait RawElement: Copy {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// Append the little-endian encoding of `self` to `out`
    fn write_le(self, out: &mut Vec<u8>);

    /// Decode one element from exactly `WIDTH` bytes
    fn read_le(bytes: &[u8]) -> Self;
}

impl RawElement for f32 {
    const WIDTH: usize = 4;

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        f32::from_le_bytes(buf)
    }
}

impl RawElement for f64 {
    const WIDTH: usize = 8;

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        f64::from_le_bytes(buf)
    }
}

/// Write `tensor` to `path` as a headerless row-major element stream
pub fn write_raw<T, P>(path: P, tensor: &DenseND<T>) -> Result<()>
where
    T: RawElement + scirs2_core::numeric::Num,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut bytes = Vec::with_capacity(tensor.len() * T::WIDTH);
    for &value in tensor.iter() {
        value.write_le(&mut bytes);
    }
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a tensor of `shape` from a headerless row-major element stream
///
/// # Errors
///
/// Returns an error if the file cannot be read or its length is not exactly
/// `Π shape · WIDTH` bytes.
pub fn read_raw<T, P>(path: P, shape: &[usize]) -> Result<DenseND<T>>
where
    T: RawElement + scirs2_core::numeric::Num,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let count: usize = shape.iter().product();
    let expected = count * T::WIDTH;
    if bytes.len() != expected {
        bail!(
            "{} holds {} bytes, shape {:?} needs {}",
            path.display(),
            bytes.len(),
            shape,
            expected
        );
    }

    let values: Vec<T> = bytes.chunks_exact(T::WIDTH).map(T::read_le).collect();
    DenseND::from_vec(values, shape)
}
