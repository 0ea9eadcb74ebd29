//! Benchmarks for unfold/fold (matricization) in both column orderings.
//!
//! Every TTM contraction and covariance build goes through these, so their
//! cost bounds HOSVD and HOOI sweep time.
//!
//! Run with:
//! ```bash
//! cargo bench --bench unfold_fold
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tuckr_core::{DenseND, UnfoldOrder};

fn orders() -> [(&'static str, UnfoldOrder); 2] {
    [
        ("forward", UnfoldOrder::Forward),
        ("backward", UnfoldOrder::Backward),
    ]
}

/// Benchmark unfold for each mode and ordering
fn bench_unfold(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold");

    let test_cases = vec![
        ("3d_small", vec![10, 20, 30]),
        ("3d_medium", vec![50, 60, 70]),
        ("3d_rect", vec![200, 50, 25]),
        ("4d_small", vec![10, 10, 10, 10]),
        ("4d_medium", vec![20, 30, 40, 50]),
    ];

    for (name, shape) in test_cases {
        let tensor = DenseND::<f64>::random_uniform(&shape, 0.0, 1.0, 7);
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        for mode in 0..shape.len() {
            for (order_name, order) in orders() {
                group.bench_with_input(
                    BenchmarkId::new(name, format!("mode_{}_{}", mode, order_name)),
                    &(&tensor, mode, order),
                    |b, (tensor, mode, order)| {
                        b.iter(|| {
                            let unfolded = tensor.unfold_with(black_box(*mode), *order).unwrap();
                            black_box(unfolded);
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

/// Benchmark fold back from a precomputed unfolding
fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    for (name, shape) in [("3d_medium", vec![50, 60, 70]), ("4d_small", vec![10, 10, 10, 10])] {
        let tensor = DenseND::<f64>::random_uniform(&shape, 0.0, 1.0, 11);
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        for (order_name, order) in orders() {
            let unfolded = tensor.unfold_with(1, order).unwrap();
            group.bench_with_input(
                BenchmarkId::new(name, order_name),
                &(unfolded, shape.clone(), order),
                |b, (matrix, shape, order)| {
                    b.iter(|| {
                        let folded = DenseND::fold_with(black_box(matrix), shape, 1, *order).unwrap();
                        black_box(folded);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the zero-padded block read used at stored-extent boundaries
fn bench_block_padded(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_padded");
    let tensor = DenseND::<f64>::random_uniform(&[64, 64, 64], 0.0, 1.0, 5);

    for (name, offsets) in [("interior", [16, 16, 16]), ("boundary", [48, 48, 48])] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &offsets, |b, offsets| {
            b.iter(|| {
                let block = tensor.block_padded(black_box(offsets), &[32, 32, 32]).unwrap();
                black_box(block);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unfold, bench_fold, bench_block_padded);
criterion_main!(benches);
