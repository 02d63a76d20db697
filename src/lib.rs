//! __biomsparse__ converts sparse feature-by-sample tables, as used by
//! the BIOM table format, between coordinate (COO), compressed sparse
//! row (CSR) and compressed sparse column (CSC) representations.
//!
//! Features are the rows of a table and samples are its columns.  Tables
//! are built from `(row, col, value)` triplets with an explicit shape.
//! Repeated coordinates are summed, in input order, when a compressed
//! view is produced.
//!
//! ```
//! use biomsparse::table::SparseMatrix;
//!
//! // F0 has counts in S0 and S2, with a repeated S2 observation
//! let mut table = SparseMatrix::new(
//!     (2, 3),
//!     vec![0, 0, 0],
//!     vec![0, 2, 2],
//!     vec![1., 2., 3.],
//! ).unwrap();
//!
//! let csr = table.to_csr();
//! assert_eq!(csr.values, vec![1., 5.]);
//! assert_eq!(csr.minor_indices, vec![0, 2]);
//! assert_eq!(csr.major_pointers, vec![0, 2, 2]);
//! ```
//!
//! # Features
//!
//! * __serde__ (default): `Serialize` / `Deserialize` for settings and
//!   matrix types.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod table;
