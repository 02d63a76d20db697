#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, ShapedMatrix};
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// the entries of row `i`
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[(i * self.n)..((i + 1) * self.n)]
    }

    fn index_linear(&self, idx: (usize, usize)) -> usize {
        let (i, j) = idx;
        assert!(i < self.m && j < self.n);
        i * self.n + j
    }
}

impl<T> ShapedMatrix for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> std::fmt::Display for DenseMatrix<T>
where
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for v in self.row(i) {
                write!(f, " {:?}", v)?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[test]
fn test_dense_index_and_display() {
    let mut A = DenseMatrix::<f64>::zeros((2, 3));
    A[(0, 2)] = 4.;
    A[(1, 0)] = 3.;

    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.data(), &[0., 0., 4., 3., 0., 0.]);
    assert_eq!(A.row(1), &[3., 0., 0.]);
    assert_eq!(format!("{}", A), "\n[  0.0 0.0 4.0]\n[  3.0 0.0 0.0]\n\n");
}
