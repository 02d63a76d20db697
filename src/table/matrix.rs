#![allow(non_snake_case)]

use crate::algebra::{
    Axis, CompressedMatrix, CooMatrix, DenseMatrix, FloatT, ShapedMatrix, SparseMatrixError,
};
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::table::{ConversionInfo, ConversionSettings};
use num_traits::ToPrimitive;
use std::io::Write;

#[derive(Debug)]
struct CachedView<T> {
    matrix: CompressedMatrix<T>,
    info: ConversionInfo,
}

/// A sparse feature-by-sample table held in coordinate format, with
/// lazily computed and cached CSR and CSC views.
///
/// __Example usage__ : the 2 x 3 table
/// ```text
///         S0   S1   S2
///   F0    1.0  2.0  4.0
///   F1    3.0   ⋅    ⋅
/// ```
///
/// ```
/// use biomsparse::table::SparseMatrix;
///
/// let mut A = SparseMatrix::new(
///     (2, 3),
///     vec![0, 0, 0, 1],       // rows
///     vec![0, 1, 2, 0],       // cols
///     vec![1., 2., 4., 3.],   // values
/// ).unwrap();
///
/// let csr = A.to_csr();
/// assert_eq!(csr.major_pointers, vec![0, 3, 4]);
///
/// let csc = A.to_csc();
/// assert_eq!(csc.values, vec![1., 3., 2., 4.]);
/// ```
///
/// Views are computed through `&mut self` and are dropped whenever the
/// coordinate input is replaced with [`rebuild`](SparseMatrix::rebuild).
#[derive(Debug)]
pub struct SparseMatrix<T = f64> {
    coo: CooMatrix<T>,
    csr: Option<CachedView<T>>,
    csc: Option<CachedView<T>>,
    settings: ConversionSettings,
    stream: PrintTarget,
}

impl<T> SparseMatrix<T>
where
    T: FloatT,
{
    /// Constructs an `nrows x ncols` table from `(rows[i], cols[i], values[i])`
    /// triplets.
    ///
    /// Fails with [`LengthMismatch`](SparseMatrixError::LengthMismatch) or
    /// [`InvalidIndex`](SparseMatrixError::InvalidIndex); see
    /// [`CooMatrix::new`].
    pub fn new(
        shape: (usize, usize),
        rows: Vec<usize>,
        cols: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, SparseMatrixError> {
        let coo = CooMatrix::new(shape.0, shape.1, rows, cols, values)?;
        Ok(Self::from_coo(coo))
    }

    /// As [`new`](SparseMatrix::new), but for signed index arrays.
    /// Negative indices fail with [`InvalidIndex`](SparseMatrixError::InvalidIndex).
    pub fn from_indices<I>(
        shape: (usize, usize),
        rows: &[I],
        cols: &[I],
        values: Vec<T>,
    ) -> Result<Self, SparseMatrixError>
    where
        I: ToPrimitive + Copy,
    {
        let coo = CooMatrix::from_indices(shape.0, shape.1, rows, cols, values)?;
        Ok(Self::from_coo(coo))
    }

    /// Constructs a table from an existing compressed (CSR or CSC) matrix.
    pub fn from_compressed(A: &CompressedMatrix<T>) -> Result<Self, SparseMatrixError> {
        let coo = CooMatrix::from_compressed(A)?;
        Ok(Self::from_coo(coo))
    }

    /// Wraps already validated coordinate data, using default settings.
    pub fn from_coo(coo: CooMatrix<T>) -> Self {
        Self {
            coo,
            csr: None,
            csc: None,
            settings: ConversionSettings::default(),
            stream: PrintTarget::default(),
        }
    }

    /// Replaces the default settings.
    pub fn with_settings(mut self, settings: ConversionSettings) -> Self {
        self.update_settings(settings);
        self
    }

    /// Replaces the coordinate input wholesale.
    ///
    /// The new input is validated exactly as in [`new`](SparseMatrix::new).
    /// On failure the existing input and any cached views are kept.  On
    /// success all cached views are dropped.
    pub fn rebuild(
        &mut self,
        shape: (usize, usize),
        rows: Vec<usize>,
        cols: Vec<usize>,
        values: Vec<T>,
    ) -> Result<(), SparseMatrixError> {
        self.coo = CooMatrix::new(shape.0, shape.1, rows, cols, values)?;
        self.invalidate();
        Ok(())
    }

    /// compressed sparse row view, rows major
    pub fn to_csr(&mut self) -> &CompressedMatrix<T> {
        self.view(Axis::Row)
    }

    /// compressed sparse column view, columns major
    pub fn to_csc(&mut self) -> &CompressedMatrix<T> {
        self.view(Axis::Col)
    }

    /// Compressed view along `axis`, computed on first request and
    /// cached until the input or the view-affecting settings change.
    pub fn view(&mut self, axis: Axis) -> &CompressedMatrix<T> {
        let coo = &self.coo;
        let settings = &self.settings;
        let stream = &mut self.stream;

        let slot = match axis {
            Axis::Row => &mut self.csr,
            Axis::Col => &mut self.csc,
        };

        let cached = slot.get_or_insert_with(|| {
            let (matrix, counts) = coo.compress(axis, settings.drop_zeros);
            let info = ConversionInfo::new(coo, &matrix, counts);
            if settings.verbose {
                // print failures are not conversion failures
                let _ = info.print(&mut *stream).and_then(|_| stream.flush());
            }
            CachedView { matrix, info }
        });
        &cached.matrix
    }

    /// The view along `axis` if it has already been computed.
    pub fn cached(&self, axis: Axis) -> Option<&CompressedMatrix<T>> {
        self.slot(axis).map(|c| &c.matrix)
    }

    /// Statistics for the view along `axis` if it has already been computed.
    pub fn info(&self, axis: Axis) -> Option<&ConversionInfo> {
        self.slot(axis).map(|c| &c.info)
    }

    /// Row major dense copy of the table.
    ///
    /// Fails with [`TooLarge`](SparseMatrixError::TooLarge) if the table has
    /// more than `settings.max_dense_cells` cells, in which case no view is
    /// computed.
    pub fn to_dense(&mut self) -> Result<DenseMatrix<T>, SparseMatrixError> {
        let limit = self.settings.max_dense_cells;
        let cells = self.ncells().unwrap_or(usize::MAX);
        if cells > limit {
            return Err(SparseMatrixError::TooLarge { cells, limit });
        }
        self.to_csr().to_dense(limit)
    }

    /// Replaces the current settings.  Cached views are dropped if the
    /// new settings would produce different views.
    pub fn update_settings(&mut self, settings: ConversionSettings) {
        if settings.changes_views(&self.settings) {
            self.invalidate();
        }
        self.settings = settings;
    }

    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// the coordinate input
    pub fn coo(&self) -> &CooMatrix<T> {
        &self.coo
    }

    /// number of stored triplets, counting repeated coordinates separately
    pub fn ntriplets(&self) -> usize {
        self.coo.ntriplets()
    }

    fn slot(&self, axis: Axis) -> Option<&CachedView<T>> {
        match axis {
            Axis::Row => self.csr.as_ref(),
            Axis::Col => self.csc.as_ref(),
        }
    }

    fn invalidate(&mut self) {
        self.csr = None;
        self.csc = None;
    }
}

impl<T> ShapedMatrix for SparseMatrix<T> {
    fn nrows(&self) -> usize {
        self.coo.nrows()
    }
    fn ncols(&self) -> usize {
        self.coo.ncols()
    }
}

impl<T> ConfigurablePrintTarget for SparseMatrix<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
