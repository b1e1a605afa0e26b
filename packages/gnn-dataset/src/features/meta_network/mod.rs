//! Typed graph container backing `GraphDataset`
//!
//! Exposes only what dataset construction and the derived accessors need:
//! index management, attribute storage, edge insertion, adjacency and
//! train/test split derivation.

pub mod domain;
pub mod network;

pub use domain::{AttrValue, NodeType, TrainTestSplit};
pub use network::MetaNetwork;
