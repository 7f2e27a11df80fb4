//! Point lattice generation
//!
//! This module provides the lattice generator, the spacing type and the
//! materialization of lattices into tables and text files.

pub mod errors;
pub mod spacing;
pub mod lattice;
pub mod table;
pub mod writer;
#[cfg(test)]
mod tests;

pub use errors::{GridError, GridResult};
pub use spacing::GridSpacing;
pub use lattice::{expected_len, generate, Lattice, LatticeIter};
pub use table::{format_row, materialize, GridTable, CSV_HEADER};
pub use writer::write_rows;
