#![allow(non_snake_case)]

use crate::algebra::{
    Axis, CompressedMatrix, DenseMatrix, FloatT, ShapedMatrix, SparseFormatError,
    SparseMatrixError,
};
use std::ops::Range;

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// `CompressedMatrix` constructor.
    ///
    /// The supplied arrays are validated with
    /// [`check_format`](CompressedMatrix::check_format) and an error is
    /// returned if they do not describe a well formed CSR (`Axis::Row`)
    /// or CSC (`Axis::Col`) matrix of size `m x n`.
    pub fn new(
        m: usize,
        n: usize,
        axis: Axis,
        major_pointers: Vec<usize>,
        minor_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, SparseFormatError> {
        let A = CompressedMatrix {
            m,
            n,
            axis,
            major_pointers,
            minor_indices,
            values,
        };
        A.check_format()?;
        Ok(A)
    }

    /// An `m x n` matrix with no stored entries
    pub fn zeros(m: usize, n: usize, axis: Axis) -> Self {
        let major_dim = axis.extent((m, n));
        CompressedMatrix {
            m,
            n,
            axis,
            major_pointers: vec![0; major_dim + 1],
            minor_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// true if stored in compressed sparse row format
    pub fn is_csr(&self) -> bool {
        self.axis == Axis::Row
    }

    /// true if stored in compressed sparse column format
    pub fn is_csc(&self) -> bool {
        self.axis == Axis::Col
    }

    /// number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// extent of the major axis (rows for CSR, columns for CSC)
    pub fn major_dim(&self) -> usize {
        self.axis.extent(self.size())
    }

    /// extent of the minor axis (columns for CSR, rows for CSC)
    pub fn minor_dim(&self) -> usize {
        self.axis.other().extent(self.size())
    }

    /// Range of positions in `minor_indices` / `values` holding the
    /// entries of major index `k`.
    ///
    /// # Panics
    /// Panics if `k` is not less than the major dimension.
    pub fn major_range(&self, k: usize) -> Range<usize> {
        self.major_pointers[k]..self.major_pointers[k + 1]
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.minor_indices.len() != self.values.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        let major_dim = self.major_dim();
        if self.major_pointers.len() != major_dim + 1
            || self.major_pointers[major_dim] != self.values.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for pointer monotonicity from zero
        if self.major_pointers[0] != 0 || self.major_pointers.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadMajorPointers);
        }

        //check for minor indices out of bounds
        let minor_dim = self.minor_dim();
        if !self.minor_indices.iter().all(|i| *i < minor_dim) {
            return Err(SparseFormatError::BadMinorIndex);
        }

        //check for minor index monotonicity within each slice
        for k in 0..major_dim {
            let rng = self.major_range(k);
            if self.minor_indices[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadMinorOrdering);
            }
        }

        Ok(())
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a stored entry.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let (major, minor) = match self.axis {
            Axis::Row => (row, col),
            Axis::Col => (col, row),
        };

        let first = self.major_pointers[major];
        let minors_in_this_slice = &self.minor_indices[self.major_range(major)];
        match minors_in_this_slice.binary_search(&minor) {
            Ok(idx) => Some(self.values[first + idx]),
            Err(_) => None,
        }
    }

    /// Iterator over the stored entries as `(row, col, value)`, in
    /// major then minor index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let axis = self.axis;
        (0..self.major_dim()).flat_map(move |k| {
            self.major_range(k).map(move |p| {
                let j = self.minor_indices[p];
                let (row, col) = match axis {
                    Axis::Row => (k, j),
                    Axis::Col => (j, k),
                };
                (row, col, self.values[p])
            })
        })
    }

    /// Expands the stored entries into coordinate format
    /// `(rows, cols, values)`, in major then minor index order.
    pub fn to_triplets(&self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        let nnz = self.nnz();
        let mut rows = Vec::with_capacity(nnz);
        let mut cols = Vec::with_capacity(nnz);
        let mut vals = Vec::with_capacity(nnz);

        for (r, c, v) in self.iter() {
            rows.push(r);
            cols.push(c);
            vals.push(v);
        }
        (rows, cols, vals)
    }

    /// Materializes the matrix in dense row major format.
    ///
    /// Fails with [`TooLarge`](SparseMatrixError::TooLarge) if the
    /// matrix has more than `max_cells` cells.
    pub fn to_dense(&self, max_cells: usize) -> Result<DenseMatrix<T>, SparseMatrixError> {
        let cells = self.ncells().unwrap_or(usize::MAX);
        if cells > max_cells {
            return Err(SparseMatrixError::TooLarge {
                cells,
                limit: max_cells,
            });
        }

        let mut D = DenseMatrix::zeros((self.m, self.n));
        for (r, c, v) in self.iter() {
            D[(r, c)] = v;
        }
        Ok(D)
    }
}

impl<T> ShapedMatrix for CompressedMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_compressed_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CompressedMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        Axis::Col,                                                         // CSC
        vec![0, 3, 9, 11, 11, 14],                                         // major_pointers
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // minor_indices
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // values
    )
    .unwrap();

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((3, 1)).unwrap(), 7.);
    assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
    assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((4, 0)).is_none());
    assert!(A.get_entry((2, 2)).is_none());
    assert!(A.get_entry((1, 3)).is_none());
    assert!(A.get_entry((4, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());
}
