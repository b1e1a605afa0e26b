//! Shared building blocks used across features

pub mod constants;
pub mod index_table;
pub mod matrix;

pub use index_table::IndexTable;
pub use matrix::{LabelOutput, Matrix};
