#![allow(non_snake_case)]

use crate::algebra::{
    Axis, CompressedMatrix, CooMatrix, DenseMatrix, FloatT, ShapedMatrix, SparseMatrixError,
};
use crate::table::SparseMatrix;
use indexmap::IndexSet;
use itertools::izip;

/// A feature-by-sample table addressed by string identifiers.
///
/// Features are the rows of the underlying [`SparseMatrix`] and samples
/// are its columns.  Identifiers are assigned indices in order of first
/// appearance.
///
/// ```
/// use biomsparse::table::LabeledTable;
///
/// let mut table = LabeledTable::new(
///     &["F1", "F0", "F1"],
///     &["S0", "S0", "S1"],
///     vec![3., 1., 2.],
/// ).unwrap();
///
/// assert_eq!(table.feature_index("F0"), Some(1));
/// assert_eq!(table.to_csr().major_pointers, vec![0, 2, 3]);
/// ```
#[derive(Debug)]
pub struct LabeledTable<T = f64> {
    features: IndexSet<String>,
    samples: IndexSet<String>,
    matrix: SparseMatrix<T>,
}

impl<T> LabeledTable<T>
where
    T: FloatT,
{
    /// Constructs a table from parallel arrays of feature identifiers,
    /// sample identifiers and values.  Repeated (feature, sample) pairs
    /// are summed on conversion.
    pub fn new<S>(feature_ids: &[S], sample_ids: &[S], values: Vec<T>) -> Result<Self, SparseMatrixError>
    where
        S: AsRef<str>,
    {
        if feature_ids.len() != values.len() || sample_ids.len() != values.len() {
            return Err(SparseMatrixError::LengthMismatch {
                rows: feature_ids.len(),
                cols: sample_ids.len(),
                values: values.len(),
            });
        }

        let (features, rowval) = index_ids(feature_ids);
        let (samples, colval) = index_ids(sample_ids);
        let coo = CooMatrix::new(features.len(), samples.len(), rowval, colval, values)?;

        Ok(Self {
            features,
            samples,
            matrix: SparseMatrix::from_coo(coo),
        })
    }

    /// Constructs a table from a compressed matrix and the identifiers
    /// of its rows and columns.  Identifiers must be distinct and match
    /// the matrix dimensions.
    pub fn from_compressed<S>(
        A: &CompressedMatrix<T>,
        feature_ids: &[S],
        sample_ids: &[S],
    ) -> Result<Self, SparseMatrixError>
    where
        S: AsRef<str>,
    {
        let features = unique_labels(feature_ids, Axis::Row, A.nrows())?;
        let samples = unique_labels(sample_ids, Axis::Col, A.ncols())?;

        Ok(Self {
            features,
            samples,
            matrix: SparseMatrix::from_compressed(A)?,
        })
    }

    /// feature identifiers in row order
    pub fn feature_ids(&self) -> impl ExactSizeIterator<Item = &str> {
        self.features.iter().map(String::as_str)
    }

    /// sample identifiers in column order
    pub fn sample_ids(&self) -> impl ExactSizeIterator<Item = &str> {
        self.samples.iter().map(String::as_str)
    }

    /// row index of a feature
    pub fn feature_index(&self, id: &str) -> Option<usize> {
        self.features.get_index_of(id)
    }

    /// column index of a sample
    pub fn sample_index(&self, id: &str) -> Option<usize> {
        self.samples.get_index_of(id)
    }

    /// The coordinate input with indices replaced by identifiers, as
    /// `(feature, sample, value)` in input order.
    pub fn triplet_ids(&self) -> Vec<(&str, &str, T)> {
        let coo = self.matrix.coo();
        izip!(coo.rowval(), coo.colval(), coo.nzval())
            .map(|(&r, &c, &v)| (self.features[r].as_str(), self.samples[c].as_str(), v))
            .collect()
    }

    /// compressed sparse row view, features major
    pub fn to_csr(&mut self) -> &CompressedMatrix<T> {
        self.matrix.to_csr()
    }

    /// compressed sparse column view, samples major
    pub fn to_csc(&mut self) -> &CompressedMatrix<T> {
        self.matrix.to_csc()
    }

    /// row major dense copy, subject to the matrix settings
    pub fn to_dense(&mut self) -> Result<DenseMatrix<T>, SparseMatrixError> {
        self.matrix.to_dense()
    }

    /// the underlying numeric table
    pub fn matrix(&self) -> &SparseMatrix<T> {
        &self.matrix
    }

    /// the underlying numeric table, e.g. to change its settings
    pub fn matrix_mut(&mut self) -> &mut SparseMatrix<T> {
        &mut self.matrix
    }
}

impl<T> ShapedMatrix for LabeledTable<T> {
    fn nrows(&self) -> usize {
        self.features.len()
    }
    fn ncols(&self) -> usize {
        self.samples.len()
    }
}

// assigns each distinct id an index in order of first appearance
fn index_ids<S: AsRef<str>>(ids: &[S]) -> (IndexSet<String>, Vec<usize>) {
    let mut set = IndexSet::new();
    let idx = ids
        .iter()
        .map(|id| match set.get_index_of(id.as_ref()) {
            Some(i) => i,
            None => set.insert_full(id.as_ref().to_owned()).0,
        })
        .collect();
    (set, idx)
}

fn unique_labels<S: AsRef<str>>(
    ids: &[S],
    axis: Axis,
    expected: usize,
) -> Result<IndexSet<String>, SparseMatrixError> {
    let set: IndexSet<String> = ids.iter().map(|id| id.as_ref().to_owned()).collect();
    if ids.len() != expected || set.len() != expected {
        return Err(SparseMatrixError::LabelCountMismatch {
            axis,
            expected,
            found: set.len(),
        });
    }
    Ok(set)
}
