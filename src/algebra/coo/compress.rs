#![allow(non_snake_case)]

use crate::algebra::{
    backshift_pointers, counts_to_pointers, Axis, CompressedMatrix, CooMatrix, FloatT,
    ShapedMatrix,
};
use itertools::izip;

/// Bookkeeping produced by a single compression pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompressionCounts {
    /// triplets folded into an earlier triplet with the same coordinate
    pub duplicates_merged: usize,
    /// summed entries omitted because they were exactly zero
    pub zeros_dropped: usize,
}

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// compressed sparse row copy of the matrix
    pub fn to_csr(&self) -> CompressedMatrix<T> {
        self.compress(Axis::Row, false).0
    }

    /// compressed sparse column copy of the matrix
    pub fn to_csc(&self) -> CompressedMatrix<T> {
        self.compress(Axis::Col, false).0
    }

    /// Compresses the triplets along `axis`.
    ///
    /// Entries are bucketed by major index with a counting sort, each
    /// bucket is then stably sorted by minor index and runs of equal
    /// minor index are summed.  Repeated coordinates are therefore
    /// accumulated left to right in the order they appear in the input,
    /// i.e. `((v0 + v1) + v2) + ...`.
    ///
    /// If `drop_zeros` is true, summed entries that are exactly zero are
    /// omitted from the output.
    pub fn compress(&self, axis: Axis, drop_zeros: bool) -> (CompressedMatrix<T>, CompressionCounts) {
        let (majval, minval) = match axis {
            Axis::Row => (&self.rowval, &self.colval),
            Axis::Col => (&self.colval, &self.rowval),
        };
        let major_dim = axis.extent(self.size());
        let nnz = self.nzval.len();

        // count the entries in each major slice and place
        // the slice starting offsets into majptr
        let mut majptr = vec![0usize; major_dim + 1];
        for &k in majval.iter() {
            majptr[k] += 1;
        }
        counts_to_pointers(&mut majptr);

        // scatter into the slices, using majptr as the
        // next fill location in each slice
        let mut minor_indices = vec![0usize; nnz];
        let mut values = vec![T::zero(); nnz];
        for (&k, &j, &v) in izip!(majval, minval, &self.nzval) {
            let dest = majptr[k];
            minor_indices[dest] = j;
            values[dest] = v;
            majptr[k] += 1;
        }
        backshift_pointers(&mut majptr);

        // sort and coalesce each slice, compacting towards the front.
        // The compacted length of slice k is written back to majptr[k]
        // once slice k has been read.
        let mut counts = CompressionCounts::default();
        let mut order: Vec<usize> = Vec::new();
        let mut merged: Vec<(usize, T)> = Vec::new();
        let mut writeidx = 0;

        for k in 0..major_dim {
            let (first, last) = (majptr[k], majptr[k + 1]);

            // stable, so equal minor indices keep their input order
            order.clear();
            order.extend(first..last);
            order.sort_by_key(|&p| minor_indices[p]);

            merged.clear();
            for &p in order.iter() {
                let (j, v) = (minor_indices[p], values[p]);
                match merged.last_mut() {
                    Some((lastj, acc)) if *lastj == j => {
                        *acc += v;
                        counts.duplicates_merged += 1;
                    }
                    _ => merged.push((j, v)),
                }
            }

            if drop_zeros {
                let before = merged.len();
                merged.retain(|&(_, v)| v != T::zero());
                counts.zeros_dropped += before - merged.len();
            }

            // writeidx <= first always, so this never overtakes
            // an unread slice
            for (dest, &(j, v)) in (writeidx..).zip(merged.iter()) {
                minor_indices[dest] = j;
                values[dest] = v;
            }
            writeidx += merged.len();
            majptr[k] = merged.len();
        }
        majptr[major_dim] = 0;
        counts_to_pointers(&mut majptr);

        minor_indices.truncate(writeidx);
        values.truncate(writeidx);

        let A = CompressedMatrix {
            m: self.m,
            n: self.n,
            axis,
            major_pointers: majptr,
            minor_indices,
            values,
        };
        debug_assert!(A.check_format().is_ok());

        (A, counts)
    }
}
