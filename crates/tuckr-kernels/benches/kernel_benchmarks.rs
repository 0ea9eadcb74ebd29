//! Performance benchmarks for tuckr-kernels
//!
//! Run with: cargo bench -p tuckr-kernels
//!
//! Benchmarks cover:
//! - N-mode product (both orderings)
//! - Tucker operator
//! - Mode covariance
//! - Pseudo-inverse

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scirs2_core::ndarray_ext::Array2;
use std::hint::black_box;
use tuckr_core::{DenseND, UnfoldOrder};
use tuckr_kernels::*;

fn bench_nmode_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("nmode_product");

    for &size in [10, 20, 40].iter() {
        let tensor = DenseND::<f64>::random_uniform(&[size, size, size], 0.0, 1.0, 1);
        let matrix = Array2::<f64>::from_shape_fn((size / 2, size), |(i, j)| (i + j) as f64);
        group.throughput(Throughput::Elements((size * size * size) as u64));

        for (name, order) in [("forward", UnfoldOrder::Forward), ("backward", UnfoldOrder::Backward)] {
            group.bench_with_input(
                BenchmarkId::new(name, format!("{}^3", size)),
                &size,
                |bencher, _| {
                    bencher.iter(|| {
                        black_box(
                            nmode_product_with(&Scirs2Provider, &tensor, &matrix.view(), 1, order)
                                .unwrap(),
                        );
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_tucker_operator(c: &mut Criterion) {
    let mut group = c.benchmark_group("tucker_operator");

    for &size in [10, 20, 30].iter() {
        let rank = size / 2;
        let core = DenseND::<f64>::random_uniform(&[rank, rank, rank], 0.0, 1.0, 2);
        let factors: Vec<Array2<f64>> = (0..3)
            .map(|m| Array2::<f64>::from_shape_fn((size, rank), |(i, j)| ((i * j + m) % 7) as f64))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}^3_r{}", size, rank)),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    black_box(tucker_operator(&core, &factors, UnfoldOrder::Backward).unwrap());
                });
            },
        );
    }

    group.finish();
}

fn bench_mode_covariance(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode_covariance");

    for &size in [10, 20, 40].iter() {
        let tensor = DenseND::<f64>::random_normal(&[size, size, size], 0.0, 1.0, 3).unwrap();
        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(mode_covariance(&tensor, 0, UnfoldOrder::Backward).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_pseudo_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_inverse");

    for &(m, n) in [(20, 5), (100, 10), (200, 50)].iter() {
        let a = DenseND::<f64>::random_uniform(&[m, n], -1.0, 1.0, 4)
            .to_matrix()
            .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", m, n)),
            &a,
            |bencher, a| {
                bencher.iter(|| {
                    black_box(pseudo_inverse(&a.view(), None).unwrap());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_nmode_product,
    bench_tucker_operator,
    bench_mode_covariance,
    bench_pseudo_inverse
);
criterion_main!(benches);
