//! Matricization in both column orderings
//!
//! Run with:
//! ```bash
//! cargo run --example unfold_fold
//! ```

use tuckr_core::{DenseND, UnfoldOrder};

fn main() -> anyhow::Result<()> {
    let shape = [2, 3, 4];
    let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &shape)?;

    for order in [UnfoldOrder::Forward, UnfoldOrder::Backward] {
        println!("=== {:?} ordering ===", order);
        for mode in 0..tensor.rank() {
            let unfolded = tensor.unfold_with(mode, order)?;
            println!(
                "mode {} (columns over modes {:?}): {}x{}",
                mode,
                order.column_modes(mode, tensor.rank()),
                unfolded.nrows(),
                unfolded.ncols()
            );
            println!("  row 0: {:?}", unfolded.row(0).to_vec());

            let folded = DenseND::fold_with(&unfolded, &shape, mode, order)?;
            assert_eq!(folded, tensor);
        }
        println!();
    }

    // Orderings only agree on the outermost modes of a 3-way tensor
    let forward = tensor.unfold_with(1, UnfoldOrder::Forward)?;
    let backward = tensor.unfold_with(1, UnfoldOrder::Backward)?;
    println!("mode 1 orderings identical: {}", forward == backward);

    // Folding with the wrong ordering scrambles the tensor
    let mixed = DenseND::fold_with(&forward, &shape, 1, UnfoldOrder::Backward)?;
    println!(
        "mixed-ordering round trip max error: {}",
        tensor.max_abs_diff(&mixed)?
    );

    Ok(())
}
