//! Dataset construction from a data directory
//!
//! ```text
//! data_dir/
//! ├── docs.txt        node_id  free text ...
//! ├── labels.txt      node_id  label_id
//! └── adjedges.txt    node_id0 node_id1 ... node_idN
//!     (or edgelist.txt  node_id0 node_id1 [weight])
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use gnn_dataset::features::dataset::{DataFormat, GraphDataset};
//!
//! let dataset = GraphDataset::open("data/cora", DataFormat::AdjEdges, true, None)?;
//! let features = dataset.feature_matrix(true, true)?;   // sparse bag-of-words
//! let labels = dataset.label_list_or_matrix(true)?;     // one-hot
//! let adj = dataset.adj_matrix(false)?;                  // dense NODE/NODE
//! let split = dataset.split_train_and_test(0.3)?;
//! ```

pub mod format;
pub mod graph_dataset;
pub mod reader;

pub use format::{DataFormat, DocRecord, EdgeRecord};
pub use graph_dataset::{DatasetSummary, GraphDataset};
