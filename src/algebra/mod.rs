//! Sparse and dense matrix types for feature-by-sample tables.
//!
//! Coordinate format input is held in [`CooMatrix`] and compressed into
//! either CSR or CSC format as a [`CompressedMatrix`].  A
//! [`DenseMatrix`] can be produced from a compressed matrix for
//! verification and printing.

mod coo;
pub use coo::*;
mod compressed;
pub(crate) use compressed::*;
mod dense;
mod error_types;
pub use error_types::*;
mod floats;
pub use floats::*;
mod matrix_traits;
pub use matrix_traits::*;
mod matrix_types;
pub use matrix_types::*;
