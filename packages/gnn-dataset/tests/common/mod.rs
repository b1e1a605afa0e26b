//! Common test utilities for gnn-dataset
//!
//! Fixtures that lay out dataset directories on disk.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
