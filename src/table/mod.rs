//! Stateful conversion engine for feature-by-sample tables.
//!
//! [`SparseMatrix`] owns a coordinate format table and caches its CSR
//! and CSC views.  [`LabeledTable`] adds string identifiers for the
//! features (rows) and samples (columns) of a table.

mod info;
pub use info::*;
mod labeled;
pub use labeled::*;
mod matrix;
pub use matrix::*;
mod settings;
pub use settings::*;
