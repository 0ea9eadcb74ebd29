//! Property-based tests for tensor operations
//!
//! Verifies the unfold/fold, offset and block invariants over randomly
//! generated shapes and contents.

#[cfg(test)]
mod tests {
    use crate::{DenseND, UnfoldOrder};
    use proptest::prelude::*;

    // Ranks 1-4, small extents (extent 1 included on purpose)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    fn tensor_strategy() -> impl Strategy<Value = DenseND<f64>> {
        shape_strategy().prop_flat_map(|shape| {
            let n: usize = shape.iter().product();
            prop::collection::vec(-100i32..100, n).prop_map(move |values| {
                let data = values.into_iter().map(f64::from).collect();
                DenseND::from_vec(data, &shape).unwrap()
            })
        })
    }

    fn order_strategy() -> impl Strategy<Value = UnfoldOrder> {
        prop_oneof![Just(UnfoldOrder::Forward), Just(UnfoldOrder::Backward)]
    }

    proptest! {
        #[test]
        fn prop_unfold_fold_roundtrip(
            tensor in tensor_strategy(),
            order in order_strategy(),
            mode_seed in 0usize..16,
        ) {
            let mode = mode_seed % tensor.rank();
            let matrix = tensor.unfold_with(mode, order).unwrap();
            prop_assert_eq!(matrix.nrows(), tensor.shape()[mode]);
            prop_assert_eq!(matrix.nrows() * matrix.ncols(), tensor.len());

            let folded = DenseND::fold_with(&matrix, tensor.shape(), mode, order).unwrap();
            prop_assert_eq!(folded, tensor);
        }

        #[test]
        fn prop_unfold_rows_are_mode_slices(
            tensor in tensor_strategy(),
            order in order_strategy(),
            mode_seed in 0usize..16,
        ) {
            let mode = mode_seed % tensor.rank();
            let matrix = tensor.unfold_with(mode, order).unwrap();
            for index in 0..tensor.shape()[mode] {
                let slice = tensor.slice(mode, index).unwrap();
                let mut row: Vec<f64> = matrix.row(index).to_vec();
                let mut expected = slice.to_vec();
                row.sort_by(|a, b| a.partial_cmp(b).unwrap());
                expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
                prop_assert_eq!(row, expected);
            }
        }

        #[test]
        fn prop_offset_coords_bijection(tensor in tensor_strategy(), pick in 0usize..1000) {
            let offset = pick % tensor.len();
            let coords = tensor.coords_of(offset).unwrap();
            prop_assert_eq!(tensor.offset_of(&coords).unwrap(), offset);
            prop_assert_eq!(tensor.as_slice().unwrap()[offset], tensor[&coords[..]]);
        }

        #[test]
        fn prop_padded_block_inside_matches_sub_block(tensor in tensor_strategy()) {
            let offsets: Vec<usize> = tensor.shape().iter().map(|&n| n / 2).collect();
            let extents: Vec<usize> = tensor
                .shape()
                .iter()
                .zip(&offsets)
                .map(|(&n, &o)| n - o)
                .collect();
            let exact = tensor.sub_block(&offsets, &extents).unwrap();
            let padded = tensor.block_padded(&offsets, &extents).unwrap();
            prop_assert_eq!(exact, padded);
        }

        #[test]
        fn prop_padded_block_overhang_is_zero(tensor in tensor_strategy(), extra in 1usize..3) {
            let offsets = vec![0; tensor.rank()];
            let extents: Vec<usize> = tensor.shape().iter().map(|&n| n + extra).collect();
            let padded = tensor.block_padded(&offsets, &extents).unwrap();
            for offset in 0..padded.len() {
                let coords = padded.coords_of(offset).unwrap();
                let inside = coords.iter().zip(tensor.shape()).all(|(&i, &n)| i < n);
                let expected = if inside { tensor[&coords[..]] } else { 0.0 };
                prop_assert_eq!(padded[&coords[..]], expected);
            }
        }

        #[test]
        fn prop_reshape_roundtrip(tensor in tensor_strategy()) {
            let flat = tensor.reshape(&[tensor.len()]).unwrap();
            let restored = flat.reshape(tensor.shape()).unwrap();
            prop_assert_eq!(restored, tensor);
        }
    }
}
