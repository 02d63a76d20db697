#![allow(non_snake_case)]

use crate::algebra::{
    Axis, CompressedMatrix, CooMatrix, FloatT, ShapedMatrix, SparseMatrixError,
};
use num_traits::ToPrimitive;

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// `CooMatrix` constructor.
    ///
    /// Fails with [`LengthMismatch`](SparseMatrixError::LengthMismatch) if
    /// the three triplet arrays differ in length, or with
    /// [`InvalidIndex`](SparseMatrixError::InvalidIndex) if any coordinate
    /// falls outside of the `m x n` shape.  No matrix is produced on failure.
    ///
    /// ```
    /// use biomsparse::algebra::CooMatrix;
    ///
    /// let A = CooMatrix::new(2, 3, vec![0, 0, 0, 1], vec![0, 1, 2, 0], vec![1., 2., 4., 3.]);
    /// assert!(A.is_ok());
    ///
    /// let B = CooMatrix::new(2, 3, vec![2], vec![0], vec![1.]);
    /// assert!(B.is_err());
    /// ```
    pub fn new(
        m: usize,
        n: usize,
        rowval: Vec<usize>,
        colval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Result<Self, SparseMatrixError> {
        check_lengths(rowval.len(), colval.len(), nzval.len())?;
        check_bounds(&rowval, Axis::Row, m)?;
        check_bounds(&colval, Axis::Col, n)?;

        Ok(CooMatrix {
            m,
            n,
            rowval,
            colval,
            nzval,
        })
    }

    /// Constructor for signed or otherwise non-`usize` index arrays,
    /// e.g. the `i32` indices stored in BIOM files.
    ///
    /// Negative indices are rejected with
    /// [`InvalidIndex`](SparseMatrixError::InvalidIndex), in addition
    /// to the checks made by [`new`](CooMatrix::new).
    pub fn from_indices<I>(
        m: usize,
        n: usize,
        rows: &[I],
        cols: &[I],
        nzval: Vec<T>,
    ) -> Result<Self, SparseMatrixError>
    where
        I: ToPrimitive + Copy,
    {
        check_lengths(rows.len(), cols.len(), nzval.len())?;
        let rowval = to_unsigned(rows, Axis::Row, m)?;
        let colval = to_unsigned(cols, Axis::Col, n)?;
        Self::new(m, n, rowval, colval, nzval)
    }

    /// An `m x n` matrix with no triplets
    pub fn zeros(m: usize, n: usize) -> Self {
        CooMatrix {
            m,
            n,
            rowval: Vec::new(),
            colval: Vec::new(),
            nzval: Vec::new(),
        }
    }

    /// Expands a compressed matrix back into coordinate format.
    ///
    /// The input is validated with
    /// [`check_format`](CompressedMatrix::check_format) first.
    pub fn from_compressed(A: &CompressedMatrix<T>) -> Result<Self, SparseMatrixError> {
        A.check_format()?;
        let (rowval, colval, nzval) = A.to_triplets();
        Ok(CooMatrix {
            m: A.m,
            n: A.n,
            rowval,
            colval,
            nzval,
        })
    }

    /// number of stored triplets, counting repeated coordinates separately
    pub fn ntriplets(&self) -> usize {
        self.nzval.len()
    }

    /// row index of each triplet
    pub fn rowval(&self) -> &[usize] {
        &self.rowval
    }

    /// column index of each triplet
    pub fn colval(&self) -> &[usize] {
        &self.colval
    }

    /// value of each triplet
    pub fn nzval(&self) -> &[T] {
        &self.nzval
    }
}

impl<T> ShapedMatrix for CooMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

fn check_lengths(rows: usize, cols: usize, values: usize) -> Result<(), SparseMatrixError> {
    if rows != values || cols != values {
        return Err(SparseMatrixError::LengthMismatch { rows, cols, values });
    }
    Ok(())
}

fn check_bounds(idx: &[usize], axis: Axis, dim: usize) -> Result<(), SparseMatrixError> {
    match idx.iter().position(|&i| i >= dim) {
        Some(entry) => Err(SparseMatrixError::InvalidIndex {
            entry,
            axis,
            index: idx[entry] as i128,
            dim,
        }),
        None => Ok(()),
    }
}

fn to_unsigned<I>(idx: &[I], axis: Axis, dim: usize) -> Result<Vec<usize>, SparseMatrixError>
where
    I: ToPrimitive + Copy,
{
    idx.iter()
        .enumerate()
        .map(|(entry, i)| {
            i.to_usize().ok_or_else(|| SparseMatrixError::InvalidIndex {
                entry,
                axis,
                index: i.to_i128().unwrap_or(i128::MIN),
                dim,
            })
        })
        .collect()
}
