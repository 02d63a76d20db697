/// Dimension queries shared by the coordinate, compressed and dense
/// matrix types.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
    /// total number of cells, `None` on overflow
    fn ncells(&self) -> Option<usize> {
        self.nrows().checked_mul(self.ncols())
    }
}
