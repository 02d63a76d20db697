#![allow(non_snake_case)]

use biomsparse::{algebra::*, table::*};
use proptest::prelude::*;
use std::collections::HashMap;

// shape and triplets with every coordinate inside the shape.  Small
// shapes so that repeated coordinates are common.
fn triplets() -> impl Strategy<Value = ((usize, usize), Vec<usize>, Vec<usize>, Vec<f64>)> {
    (0usize..6, 0usize..6).prop_flat_map(|(m, n)| {
        let len = if m == 0 || n == 0 { 0..1 } else { 0..40 };
        prop::collection::vec((0..m.max(1), 0..n.max(1), -100i32..100), len).prop_map(
            move |t| {
                let rows: Vec<usize> = t.iter().map(|e| e.0).collect();
                let cols: Vec<usize> = t.iter().map(|e| e.1).collect();
                let vals: Vec<f64> = t.iter().map(|e| e.2 as f64).collect();
                ((m, n), rows, cols, vals)
            },
        )
    })
}

fn check_structure(A: &CompressedMatrix<f64>, ntriplets: usize) {
    let major_dim = A.major_dim();
    assert_eq!(A.major_pointers.len(), major_dim + 1);
    assert_eq!(A.major_pointers[0], 0);
    assert_eq!(A.major_pointers[major_dim], A.values.len());
    assert_eq!(A.minor_indices.len(), A.values.len());
    assert!(A.major_pointers.windows(2).all(|w| w[0] <= w[1]));
    for k in 0..major_dim {
        let minors = &A.minor_indices[A.major_range(k)];
        assert!(minors.windows(2).all(|w| w[0] < w[1]));
        assert!(minors.iter().all(|&j| j < A.minor_dim()));
    }
    assert!(A.nnz() <= ntriplets);
}

proptest! {
    #[test]
    fn prop_views_are_well_formed((shape, rows, cols, vals) in triplets()) {
        let ntriplets = vals.len();
        let mut A = SparseMatrix::new(shape, rows, cols, vals).unwrap();
        check_structure(A.to_csr(), ntriplets);
        check_structure(A.to_csc(), ntriplets);
    }

    #[test]
    fn prop_duplicates_are_summed((shape, rows, cols, vals) in triplets()) {
        // integer valued, so any summation order is exact
        let mut sums: HashMap<(usize, usize), f64> = HashMap::new();
        for ((&r, &c), &v) in rows.iter().zip(cols.iter()).zip(vals.iter()) {
            *sums.entry((r, c)).or_insert(0.0) += v;
        }

        let mut A = SparseMatrix::new(shape, rows, cols, vals).unwrap();
        for axis in [Axis::Row, Axis::Col] {
            let view = A.view(axis);
            prop_assert_eq!(view.nnz(), sums.len());
            for (r, c, v) in view.iter() {
                prop_assert_eq!(Some(&v), sums.get(&(r, c)));
            }
        }
    }

    #[test]
    fn prop_views_agree((shape, rows, cols, vals) in triplets()) {
        let mut A = SparseMatrix::new(shape, rows, cols, vals).unwrap();
        let limit = A.settings().max_dense_cells;
        let from_csr = A.to_csr().to_dense(limit).unwrap();
        let from_csc = A.to_csc().to_dense(limit).unwrap();
        prop_assert_eq!(from_csr, from_csc);
    }

    #[test]
    fn prop_distinct_coordinates_are_kept((m, n) in (1usize..6, 1usize..6)) {
        // every cell exactly once, in column major order
        let rows: Vec<usize> = (0..m * n).map(|p| p % m).collect();
        let cols: Vec<usize> = (0..m * n).map(|p| p / m).collect();
        let vals: Vec<f64> = (0..m * n).map(|p| p as f64 + 1.0).collect();

        let mut A = SparseMatrix::new((m, n), rows, cols, vals).unwrap();
        prop_assert_eq!(A.to_csr().nnz(), m * n);
        prop_assert_eq!(A.to_csc().nnz(), m * n);
        prop_assert_eq!(A.info(Axis::Row).unwrap().duplicates_merged, 0);
    }

    #[test]
    fn prop_roundtrip_through_compressed((shape, rows, cols, vals) in triplets()) {
        let mut A = SparseMatrix::new(shape, rows, cols, vals).unwrap();
        let csr = A.to_csr().clone();
        let mut B = SparseMatrix::from_compressed(&csr).unwrap();
        prop_assert_eq!(B.to_csr(), &csr);
        prop_assert_eq!(B.to_csc(), A.to_csc());
    }
}

#[test]
fn test_empty_shape_property() {
    let mut A = SparseMatrix::<f64>::new((0, 0), vec![], vec![], vec![]).unwrap();
    assert_eq!(A.to_csr().major_pointers, vec![0]);
    assert_eq!(A.to_csc().major_pointers, vec![0]);
}
