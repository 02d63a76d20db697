#![allow(non_snake_case)]

use biomsparse::{algebra::*, io::ConfigurablePrintTarget, table::*};

fn test_table() -> SparseMatrix<f64> {
    // A =
    //[ 1.0   ⋅   2.0-2.0]
    //[  ⋅   3.0    ⋅    ]
    SparseMatrix::new(
        (2, 3),
        vec![0, 1, 0, 0],
        vec![0, 1, 2, 2],
        vec![1.0, 3.0, 2.0, -2.0],
    )
    .unwrap()
}

#[test]
fn test_views_are_cached() {
    let mut A = test_table();
    assert!(A.cached(Axis::Row).is_none());
    assert!(A.cached(Axis::Col).is_none());

    let csr = A.to_csr().clone();
    assert_eq!(A.cached(Axis::Row), Some(&csr));
    assert!(A.cached(Axis::Col).is_none());

    // repeated requests return the same content
    assert_eq!(A.to_csr(), &csr);
    assert_eq!(A.view(Axis::Row), &csr);

    let csc = A.to_csc().clone();
    assert_eq!(A.cached(Axis::Col), Some(&csc));
    assert_eq!(csc.major_pointers, vec![0, 1, 2, 3]);
}

#[test]
fn test_rebuild_invalidates_views() {
    let mut A = test_table();
    A.to_csr();
    A.to_csc();

    A.rebuild((1, 2), vec![0, 0], vec![1, 0], vec![7.0, 8.0]).unwrap();
    assert!(A.cached(Axis::Row).is_none());
    assert!(A.cached(Axis::Col).is_none());
    assert!(A.info(Axis::Row).is_none());
    assert_eq!(A.size(), (1, 2));
    assert_eq!(A.ntriplets(), 2);

    assert_eq!(A.to_csr().major_pointers, vec![0, 2]);
    assert_eq!(A.to_csr().values, vec![8.0, 7.0]);
    assert_eq!(A.to_csc().major_pointers, vec![0, 1, 2]);
}

#[test]
fn test_conversion_info() {
    let mut A = test_table();
    A.to_csr();

    let info = A.info(Axis::Row).unwrap();
    assert_eq!(info.format_name(), "CSR");
    assert_eq!(info.size, (2, 3));
    assert_eq!(info.triplets, 4);
    assert_eq!(info.duplicates_merged, 1);
    assert_eq!(info.zeros_dropped, 0);
    assert_eq!(info.nnz, 3);
}

#[test]
fn test_drop_zeros_setting() {
    let mut A = test_table();
    assert_eq!(A.to_csr().values, vec![1.0, 0.0, 3.0]);

    let settings = ConversionSettingsBuilder::default()
        .drop_zeros(true)
        .build()
        .unwrap();
    A.update_settings(settings);
    assert!(A.cached(Axis::Row).is_none());

    let csr = A.to_csr();
    assert_eq!(csr.major_pointers, vec![0, 1, 2]);
    assert_eq!(csr.minor_indices, vec![0, 1]);
    assert_eq!(csr.values, vec![1.0, 3.0]);
    assert_eq!(A.info(Axis::Row).unwrap().zeros_dropped, 1);
}

#[test]
fn test_settings_without_view_changes_keep_cache() {
    let mut A = test_table();
    A.to_csc();

    let settings = ConversionSettingsBuilder::default()
        .max_dense_cells(2)
        .build()
        .unwrap();
    A.update_settings(settings);
    assert!(A.cached(Axis::Col).is_some());
    assert_eq!(A.settings().max_dense_cells, 2);
}

#[test]
fn test_dense_materialization() {
    let mut A = test_table();
    let D = A.to_dense().unwrap();
    assert_eq!(D.size(), (2, 3));
    assert_eq!(D.data, vec![1.0, 0.0, 0.0, 0.0, 3.0, 0.0]);
    assert_eq!(D[(1, 1)], 3.0);
}

#[test]
fn test_dense_threshold() {
    let settings = ConversionSettingsBuilder::default()
        .max_dense_cells(5)
        .build()
        .unwrap();
    let mut A = test_table().with_settings(settings);

    assert_eq!(
        A.to_dense().unwrap_err(),
        SparseMatrixError::TooLarge { cells: 6, limit: 5 }
    );
    // nothing was converted
    assert!(A.cached(Axis::Row).is_none());

    // a limit equal to the cell count is allowed
    let settings = ConversionSettingsBuilder::default()
        .max_dense_cells(6)
        .build()
        .unwrap();
    A.update_settings(settings);
    assert!(A.to_dense().is_ok());
}

#[test]
fn test_verbose_print_to_buffer() {
    let settings = ConversionSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    let mut A = test_table().with_settings(settings);
    A.print_to_buffer();

    A.to_csr();
    A.to_csr();
    A.to_csc();

    let result = A.get_print_buffer().unwrap();
    assert!(result.contains("biomsparse"));
    assert_eq!(result.matches("CSR conversion").count(), 1);
    assert_eq!(result.matches("CSC conversion").count(), 1);
    assert!(result.contains("duplicates merged = 1"));
}

#[test]
fn test_quiet_by_default() {
    let mut A = test_table();
    A.print_to_buffer();
    A.to_csr();
    assert_eq!(A.get_print_buffer().unwrap(), "");
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let settings = ConversionSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    let mut A = test_table().with_settings(settings);

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    A.print_to_file(file.into_file());
    A.to_csc();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("CSC conversion"));
}

#[test]
fn test_print_to_sink() {
    let settings = ConversionSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    let mut A = test_table().with_settings(settings);
    A.print_to_sink();
    A.to_csr();
    assert!(A.get_print_buffer().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_json() {
    let settings: ConversionSettings =
        serde_json::from_str(r#"{"max_dense_cells": 12, "drop_zeros": true}"#).unwrap();
    assert_eq!(settings.max_dense_cells, 12);
    assert!(settings.drop_zeros);
    assert!(!settings.verbose);

    let settings: ConversionSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, ConversionSettings::default());

    let mut A = test_table();
    let json = serde_json::to_string(A.to_csc()).unwrap();
    let csc: CompressedMatrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(&csc, A.to_csc());
}
