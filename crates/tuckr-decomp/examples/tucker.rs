//! Tucker compression of a smooth 3-D volume
//!
//! HOSVD gives a one-shot decomposition; HOOI refines it and reports the fit
//! after every sweep. The core is then written out as raw elements.
//!
//! Run with:
//! ```bash
//! cargo run --example tucker
//! ```

use tuckr_core::{io, DenseND};
use tuckr_decomp::{tucker_hooi_with, tucker_hosvd, HooiConfig};
use tuckr_kernels::Scirs2Provider;

fn smooth_volume(n: usize) -> DenseND<f64> {
    let scale = 1.0 / n as f64;
    DenseND::from_fn(&[n, n, n], |idx| {
        let (x, y, z) = (
            idx[0] as f64 * scale,
            idx[1] as f64 * scale,
            idx[2] as f64 * scale,
        );
        (3.0 * x).sin() * (2.0 * y).cos() + (x * z).exp() + 0.5 * y * z
    })
}

fn main() -> anyhow::Result<()> {
    let volume = smooth_volume(32);
    let ranks = [6, 6, 6];

    println!("=== HOSVD ===");
    let hosvd = tucker_hosvd(&volume, &ranks)?;
    println!("fit:               {:.8}", hosvd.fit);
    println!("compression ratio: {:.1}", hosvd.compression_ratio());

    println!("\n=== HOOI ===");
    let config = HooiConfig::default()
        .with_max_iterations(25)
        .with_fit_tolerance(1e-10);
    let hooi = tucker_hooi_with(&Scirs2Provider, &volume, &ranks, &config)?;
    for (sweep, fit) in hooi.fit_history.iter().enumerate() {
        println!("sweep {:>2}: fit {:.10}", sweep, fit);
    }
    println!("state: {:?} after {} sweeps", hooi.state, hooi.iters);
    println!("relative error: {:.3e}", hooi.relative_error(&volume)?);

    let path = std::env::temp_dir().join("tuckr_core_6x6x6.f64");
    io::write_raw(&path, &hooi.core)?;
    let restored: DenseND<f64> = io::read_raw(&path, &ranks)?;
    assert_eq!(restored, hooi.core);
    println!("core written to {}", path.display());

    Ok(())
}
