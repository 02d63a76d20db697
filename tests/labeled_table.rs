#![allow(non_snake_case)]

use biomsparse::{algebra::*, table::*};

fn test_labeled() -> LabeledTable<f64> {
    LabeledTable::new(
        &["OTU_2", "OTU_1", "OTU_2", "OTU_3"],
        &["gut", "gut", "skin", "gut"],
        vec![4.0, 1.0, 2.0, 8.0],
    )
    .unwrap()
}

#[test]
fn test_first_appearance_order() {
    let table = test_labeled();
    assert_eq!(table.size(), (3, 2));
    assert_eq!(
        table.feature_ids().collect::<Vec<_>>(),
        vec!["OTU_2", "OTU_1", "OTU_3"]
    );
    assert_eq!(table.sample_ids().collect::<Vec<_>>(), vec!["gut", "skin"]);
    assert_eq!(table.feature_index("OTU_3"), Some(2));
    assert_eq!(table.sample_index("skin"), Some(1));
    assert_eq!(table.feature_index("OTU_9"), None);
}

#[test]
fn test_labeled_views() {
    let mut table = test_labeled();

    let csr = table.to_csr();
    assert_eq!(csr.major_pointers, vec![0, 2, 3, 4]);
    assert_eq!(csr.minor_indices, vec![0, 1, 0, 0]);
    assert_eq!(csr.values, vec![4.0, 2.0, 1.0, 8.0]);

    let csc = table.to_csc();
    assert_eq!(csc.major_pointers, vec![0, 3, 4]);
    assert_eq!(csc.minor_indices, vec![0, 1, 2, 0]);
    assert_eq!(csc.values, vec![4.0, 1.0, 8.0, 2.0]);

    let D = table.to_dense().unwrap();
    assert_eq!(D.row(0), &[4.0, 2.0]);
}

#[test]
fn test_repeated_labels_are_summed() {
    let mut table = LabeledTable::new(&["a", "a"], &["s", "s"], vec![2.0, 3.0]).unwrap();
    assert_eq!(table.to_csr().values, vec![5.0]);
    assert_eq!(table.triplet_ids(), vec![("a", "s", 2.0), ("a", "s", 3.0)]);
}

#[test]
fn test_labeled_length_mismatch() {
    let err = LabeledTable::<f64>::new(&["a", "b"], &["s"], vec![1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        SparseMatrixError::LengthMismatch {
            rows: 2,
            cols: 1,
            values: 2
        }
    );
}

#[test]
fn test_labeled_from_compressed() {
    let csr = CompressedMatrix::new(2, 2, Axis::Row, vec![0, 1, 2], vec![1, 0], vec![9., 7.]).unwrap();

    let mut table = LabeledTable::from_compressed(&csr, &["f0", "f1"], &["s0", "s1"]).unwrap();
    assert_eq!(table.triplet_ids(), vec![("f0", "s1", 9.), ("f1", "s0", 7.)]);
    assert_eq!(table.to_csc().values, vec![7., 9.]);

    let err = LabeledTable::from_compressed(&csr, &["f0", "f0"], &["s0", "s1"]).unwrap_err();
    assert_eq!(
        err,
        SparseMatrixError::LabelCountMismatch {
            axis: Axis::Row,
            expected: 2,
            found: 1
        }
    );

    let err = LabeledTable::from_compressed(&csr, &["f0", "f1"], &["s0"]).unwrap_err();
    assert!(matches!(
        err,
        SparseMatrixError::LabelCountMismatch { axis: Axis::Col, .. }
    ));
}

#[test]
fn test_labeled_settings() {
    let mut table = LabeledTable::new(&["a", "a", "b"], &["s", "s", "s"], vec![1.0, -1.0, 4.0]).unwrap();
    assert_eq!(table.to_csr().nnz(), 2);

    let settings = ConversionSettingsBuilder::default()
        .drop_zeros(true)
        .build()
        .unwrap();
    table.matrix_mut().update_settings(settings);
    assert_eq!(table.to_csr().nnz(), 1);
    assert_eq!(table.matrix().info(Axis::Row).unwrap().zeros_dropped, 1);
}
