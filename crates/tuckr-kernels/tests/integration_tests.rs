//! Integration tests for tuckr-kernels with tuckr-core
//!
//! These tests verify that the kernels compose correctly on `DenseND`
//! tensors: contractions, covariance-driven bases and pseudo-inverses.

use scirs2_core::ndarray_ext::{s, Array2};
use tuckr_core::{DenseND, UnfoldOrder};
use tuckr_kernels::{
    mode_covariance, nmode_product, project_except, pseudo_inverse, tucker_operator,
    LinalgProvider, Scirs2Provider,
};

fn iota(shape: &[usize]) -> DenseND<f64> {
    let n: usize = shape.iter().product();
    DenseND::from_vec((0..n).map(|x| x as f64).collect(), shape).unwrap()
}

#[test]
fn test_nmode_product_with_densend() {
    let tensor = iota(&[2, 3, 4]);
    let matrix = Array2::from_shape_vec(
        (5, 3),
        vec![
            1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0,
        ],
    )
    .unwrap();

    let result = nmode_product(&tensor, &matrix.view(), 1).unwrap();
    assert_eq!(result.shape(), &[2, 5, 4]);
    for i in 0..2 {
        for k in 0..4 {
            assert_eq!(result[&[i, 0, k]], tensor[&[i, 0, k]]);
            assert_eq!(result[&[i, 4, k]], tensor[&[i, 1, k]] + tensor[&[i, 2, k]]);
        }
    }
}

#[test]
fn test_full_basis_roundtrip() {
    // Full-rank eigenbases are orthogonal: X = (X ×ₖ Uₖᵗ) ×ₖ Uₖ for all k
    let tensor = DenseND::<f64>::random_normal(&[4, 3, 5], 0.0, 1.0, 17).unwrap();
    let order = UnfoldOrder::Backward;

    let mut bases = Vec::new();
    for mode in 0..3 {
        let cov = mode_covariance(&tensor, mode, order).unwrap();
        let n = tensor.shape()[mode];
        let (vectors, _) = Scirs2Provider.eigh_top(&cov.view(), n).unwrap();
        bases.push(vectors);
    }

    let transposed: Vec<Array2<f64>> = bases.iter().map(|u| u.t().to_owned()).collect();
    let core = tucker_operator(&tensor, &transposed, order).unwrap();
    let back = tucker_operator(&core, &bases, order).unwrap();

    assert!(back.max_abs_diff(&tensor).unwrap() < 1e-10);
}

#[test]
fn test_pinv_matches_transpose_for_orthonormal_factor() {
    let tensor = DenseND::<f64>::random_normal(&[6, 4, 4], 0.0, 1.0, 3).unwrap();
    let cov = mode_covariance(&tensor, 0, UnfoldOrder::Forward).unwrap();
    let (vectors, _) = Scirs2Provider.eigh_top(&cov.view(), 3).unwrap();

    let pinv = pseudo_inverse(&vectors.view(), None).unwrap();
    let transpose = vectors.t();
    for (x, y) in pinv.iter().zip(transpose.iter()) {
        assert!((x - y).abs() < 1e-10);
    }
}

#[test]
fn test_projection_equals_full_contraction_on_skipped_mode() {
    let tensor = DenseND::<f64>::random_uniform(&[3, 4, 5], -1.0, 1.0, 8);
    let factors: Vec<Array2<f64>> = [3usize, 4, 5]
        .iter()
        .map(|&n| Array2::<f64>::eye(n).slice(s![.., ..2]).to_owned())
        .collect();

    // Projecting all-but-mode-2 then contracting mode 2 equals the full core
    let projected = project_except(&tensor, &factors, 2, UnfoldOrder::Backward).unwrap();
    let core_from_projection =
        nmode_product(&projected, &factors[2].t(), 2).unwrap();

    let transposed: Vec<Array2<f64>> = factors.iter().map(|u| u.t().to_owned()).collect();
    let core = tucker_operator(&tensor, &transposed, UnfoldOrder::Backward).unwrap();

    assert_eq!(core_from_projection.shape(), &[2, 2, 2]);
    assert!(core_from_projection.max_abs_diff(&core).unwrap() < 1e-12);
}
