use crate::algebra::{Axis, CompressedMatrix, CompressionCounts, CooMatrix, ShapedMatrix};
use std::io::Write;

/// Statistics describing how a compressed view was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionInfo {
    /// major axis of the view
    pub axis: Axis,
    /// `(nrows, ncols)` of the table
    pub size: (usize, usize),
    /// triplets in the coordinate input
    pub triplets: usize,
    /// triplets folded into an earlier triplet with the same coordinate
    pub duplicates_merged: usize,
    /// summed entries omitted because they were exactly zero
    pub zeros_dropped: usize,
    /// stored entries in the view
    pub nnz: usize,
}

impl ConversionInfo {
    pub(crate) fn new<T>(
        coo: &CooMatrix<T>,
        view: &CompressedMatrix<T>,
        counts: CompressionCounts,
    ) -> Self {
        Self {
            axis: view.axis,
            size: coo.size(),
            triplets: coo.rowval.len(),
            duplicates_merged: counts.duplicates_merged,
            zeros_dropped: counts.zeros_dropped,
            nnz: view.minor_indices.len(),
        }
    }

    /// short name of the view format
    pub fn format_name(&self) -> &'static str {
        match self.axis {
            Axis::Row => "CSR",
            Axis::Col => "CSC",
        }
    }

    pub(crate) fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "biomsparse v{}: {} conversion", crate::VERSION, self.format_name())?;
        writeln!(out, "  size              = {} x {}", self.size.0, self.size.1)?;
        writeln!(out, "  triplets          = {}", self.triplets)?;
        writeln!(out, "  duplicates merged = {}", self.duplicates_merged)?;
        writeln!(out, "  zeros dropped     = {}", self.zeros_dropped)?;
        writeln!(out, "  nnz               = {}", self.nnz)?;
        Ok(())
    }
}
