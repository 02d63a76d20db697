// Compressed views are stored in a single type tagged with their
// major axis, so CSR and CSC share every routine.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Matrix axis marker.
///
/// Used to select the major axis of a compressed view: `Row` gives
/// compressed sparse row (CSR) format and `Col` gives compressed sparse
/// column (CSC) format.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Row axis (features in a BIOM table)
    Row,
    /// Column axis (samples in a BIOM table)
    Col,
}

impl Axis {
    /// the other axis
    pub fn other(self) -> Self {
        match self {
            Axis::Row => Axis::Col,
            Axis::Col => Axis::Row,
        }
    }

    /// picks the extent of this axis from a `(nrows, ncols)` pair
    pub(crate) fn extent(self, size: (usize, usize)) -> usize {
        match self {
            Axis::Row => size.0,
            Axis::Col => size.1,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// Sparse matrix in compressed format, either CSR or CSC
///
/// __Example__ : the 2 x 3 matrix
/// ```text
/// A = [1.  2.  4.]
///     [3.  0.  0.]
/// ```
/// in compressed sparse row format is
///
/// ```
/// use biomsparse::algebra::{Axis, CompressedMatrix};
///
/// let A : CompressedMatrix<f64> = CompressedMatrix::new(
///    2,                      // m
///    3,                      // n
///    Axis::Row,              // major axis
///    vec![0, 3, 4],          // major_pointers
///    vec![0, 1, 2, 0],       // minor_indices
///    vec![1., 2., 4., 3.],   // values
/// ).unwrap();
///
/// assert_eq!(A.nnz(), 4);
/// ```
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct CompressedMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// major axis.  `Axis::Row` for CSR, `Axis::Col` for CSC.
    pub axis: Axis,
    /// offsets into `minor_indices` and `values`.
    ///
    /// This field has length `major_dim + 1`.  The last entry is the
    /// number of stored entries and agrees with the lengths of the
    /// `minor_indices` and `values` fields.
    pub major_pointers: Vec<usize>,
    /// column index (CSR) or row index (CSC) of each entry
    pub minor_indices: Vec<usize>,
    /// vector of stored matrix elements
    pub values: Vec<T>,
}

/// Dense matrix in row-major format
///
/// Produced by dense materialization of a sparse table.  Intended for
/// verification and printing only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct DenseMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in row major format
    pub data: Vec<T>,
}

/// Sparse matrix in coordinate (COO) format
///
/// Entries are `(rowval[i], colval[i], nzval[i])` triplets in no
/// particular order.  Repeated coordinates are allowed and are summed
/// when the matrix is compressed.  Construct with
/// [`CooMatrix::new`](CooMatrix::new) to have indices checked against
/// the declared size.
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// row index of each triplet
    pub(crate) rowval: Vec<usize>,
    /// column index of each triplet
    pub(crate) colval: Vec<usize>,
    /// value of each triplet
    pub(crate) nzval: Vec<T>,
}
