/*
 * gnn-dataset - typed graph datasets for graph-learning pipelines
 *
 * Feature-First layout:
 * - shared/   : index tables, matrix containers, constants
 * - features/ : tokenizer → meta_network → dataset
 * - config/   : DatasetConfig (builder + YAML)
 * - errors    : DatasetError / ErrorKind
 *
 * A dataset is built once from docs.txt, labels.txt and a structure file,
 * then only read: feature, label and adjacency matrices plus train/test
 * splits are derived on demand.
 */

#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

/// Shared models and utilities
pub mod shared;

/// Tokenizer, graph container and dataset construction
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, DatasetConfig, SplitConfig};
pub use errors::{DatasetError, ErrorKind, Result};
pub use features::dataset::{DataFormat, DatasetSummary, GraphDataset};
pub use features::meta_network::{AttrValue, MetaNetwork, NodeType, TrainTestSplit};
pub use features::tokenizer::{
    EnglishWordTokenizer, Tokenizer, TokenizerKind, Vocabulary, WhiteSpaceTokenizer,
};
pub use shared::{LabelOutput, Matrix};
