//! Centralized constants
//!
//! File names, attribute names and split defaults live here so readers,
//! accessors and configuration agree on them.

/// Input file names inside a data directory
pub mod files {
    pub const DOCS: &str = "docs.txt";
    pub const LABELS: &str = "labels.txt";
    pub const ADJEDGES: &str = "adjedges.txt";
    pub const EDGELIST: &str = "edgelist.txt";
}

/// Node attribute names
pub mod attrs {
    /// Token-index sequence of a node's document
    pub const FEATURES: &str = "features";

    /// LABEL-type node index
    pub const LABEL: &str = "label";
}

/// Train/test split defaults
pub mod split {
    pub const DEFAULT_TRAINING_RATE: f64 = 0.3;
    pub const DEFAULT_SEED: u64 = 42;
}

/// Weight for adjacency-list edges and edge-list lines without a third field
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;
