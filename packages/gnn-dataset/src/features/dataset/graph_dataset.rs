//! GraphDataset - typed graph built once from a data directory
//!
//! # Construction order
//!
//! 1. `docs.txt`: NODE indices + `features` (token indices)
//! 2. `labels.txt`: LABEL indices + `label` attribute
//! 3. `adjedges.txt` | `edgelist.txt`: NODE/NODE edges
//!
//! Documents go first so nodes with content get the lowest indices. With
//! `ignore_featureless_node` set, nodes that never appeared in `docs.txt` are
//! dropped from the structure pass and a label for such a node is a lookup
//! error.
//!
//! # Derived accessors
//!
//! Matrix accessors read the populated state and never mutate it.

use std::fmt;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::format::{
    parse_adjedges_line, parse_doc_line, parse_edgelist_line, parse_label_line, DataFormat,
};
use super::reader::for_each_line;
use crate::config::DatasetConfig;
use crate::errors::{DatasetError, Result};
use crate::features::meta_network::{AttrValue, MetaNetwork, NodeType, TrainTestSplit};
use crate::features::tokenizer::{EnglishWordTokenizer, Tokenizer};
use crate::shared::constants::{attrs, files, split, DEFAULT_EDGE_WEIGHT};
use crate::shared::{LabelOutput, Matrix};

/// Counts describing a loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub data_format: DataFormat,
    pub tokenizer: String,
    pub ignore_featureless_node: bool,
    pub num_nodes: usize,
    pub num_classes: usize,
    pub num_tokens: usize,
    /// Undirected NODE/NODE connections
    pub num_edges: usize,
    pub featureless_nodes: usize,
    pub unlabeled_nodes: usize,
}

/// Structure-pass bookkeeping, logged once per read
#[derive(Debug, Default)]
struct StructureStats {
    edges: usize,
    self_loops: usize,
    skipped_nodes: usize,
}

pub struct GraphDataset {
    data_dir: PathBuf,
    data_format: DataFormat,
    ignore_featureless_node: bool,
    training_rate: f64,
    tokenizer: Box<dyn Tokenizer>,
    network: MetaNetwork,
}

impl fmt::Debug for GraphDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphDataset")
            .field("data_dir", &self.data_dir)
            .field("data_format", &self.data_format)
            .field("ignore_featureless_node", &self.ignore_featureless_node)
            .field("tokenizer", &self.tokenizer.name())
            .field("num_nodes", &self.num_nodes())
            .field("num_tokens", &self.num_tokens())
            .finish_non_exhaustive()
    }
}

impl GraphDataset {
    /// Read `data_dir` with the given structure format.
    ///
    /// `tokenizer` defaults to [`EnglishWordTokenizer`]. Splits use the
    /// default seed; use [`GraphDataset::from_config`] to choose one.
    pub fn open(
        data_dir: impl Into<PathBuf>,
        data_format: DataFormat,
        ignore_featureless_node: bool,
        tokenizer: Option<Box<dyn Tokenizer>>,
    ) -> Result<Self> {
        let tokenizer = tokenizer
            .unwrap_or_else(|| Box::new(EnglishWordTokenizer::new()) as Box<dyn Tokenizer>);
        Self::load(
            data_dir.into(),
            data_format,
            ignore_featureless_node,
            tokenizer,
            split::DEFAULT_TRAINING_RATE,
            MetaNetwork::with_seed(split::DEFAULT_SEED),
        )
    }

    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        config.validate()?;
        Self::load(
            config.data_dir.clone(),
            config.format,
            config.ignore_featureless_node,
            config.tokenizer.build(),
            config.split.training_rate,
            MetaNetwork::with_seed(config.split.seed),
        )
    }

    fn load(
        data_dir: PathBuf,
        data_format: DataFormat,
        ignore_featureless_node: bool,
        tokenizer: Box<dyn Tokenizer>,
        training_rate: f64,
        network: MetaNetwork,
    ) -> Result<Self> {
        let mut dataset = Self {
            data_dir,
            data_format,
            ignore_featureless_node,
            training_rate,
            tokenizer,
            network,
        };

        // Documents first: content-bearing nodes take the lowest indices
        dataset.read_docs()?;
        dataset.read_labels()?;
        dataset.read_structure()?;

        info!(
            "dataset loaded from {}: nodes={}, classes={}, tokens={}, edges={}",
            dataset.data_dir.display(),
            dataset.num_nodes(),
            dataset.num_classes(),
            dataset.num_tokens(),
            dataset.num_edges()
        );
        Ok(dataset)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Construction passes
    // ═══════════════════════════════════════════════════════════════════

    fn read_docs(&mut self) -> Result<()> {
        let path = self.data_dir.join(files::DOCS);
        let tokenizer = &mut self.tokenizer;
        let network = &mut self.network;

        for_each_line(&path, |line_no, line| {
            let record = parse_doc_line(line)
                .map_err(|msg| DatasetError::format(&path, line_no, msg))?;
            let node_index = network.get_or_create_node_index(NodeType::Node, record.node_id);
            let token_indices = tokenizer.tokenize_to_indices(record.text, true)?;
            network.set_node_attr(
                NodeType::Node,
                node_index,
                attrs::FEATURES,
                AttrValue::Indices(token_indices),
            )
        })?;

        debug!(
            "documents: nodes={}, vocabulary={}",
            self.network.num_nodes(NodeType::Node),
            self.tokenizer.num_tokens()
        );
        Ok(())
    }

    fn read_labels(&mut self) -> Result<()> {
        let path = self.data_dir.join(files::LABELS);
        let ignore_featureless_node = self.ignore_featureless_node;
        let network = &mut self.network;

        for_each_line(&path, |line_no, line| {
            let (node_id, label_id) =
                parse_label_line(line).map_err(|msg| DatasetError::format(&path, line_no, msg))?;
            let node_index = if ignore_featureless_node {
                network.get_node_index(NodeType::Node, node_id).map_err(|_| {
                    DatasetError::lookup(format!(
                        "{}:{}: label for node '{}' which has no document",
                        path.display(),
                        line_no,
                        node_id
                    ))
                })?
            } else {
                network.get_or_create_node_index(NodeType::Node, node_id)
            };
            let label_index = network.get_or_create_node_index(NodeType::Label, label_id);
            network.set_node_attr(
                NodeType::Node,
                node_index,
                attrs::LABEL,
                AttrValue::Index(label_index),
            )
        })?;

        debug!("labels: classes={}", self.network.num_nodes(NodeType::Label));
        Ok(())
    }

    fn read_structure(&mut self) -> Result<()> {
        let path = self.data_dir.join(self.data_format.file_name());
        let stats = match self.data_format {
            DataFormat::AdjEdges => self.read_adjedges(&path)?,
            DataFormat::EdgeList => self.read_edgelist(&path)?,
        };
        debug!(
            "structure ({}): edges={}, self_loops_dropped={}, featureless_skipped={}",
            self.data_format, stats.edges, stats.self_loops, stats.skipped_nodes
        );
        Ok(())
    }

    fn read_adjedges(&mut self, path: &Path) -> Result<StructureStats> {
        let mut stats = StructureStats::default();

        for_each_line(path, |line_no, line| {
            let (node_id0, neighbors) =
                parse_adjedges_line(line).map_err(|msg| DatasetError::format(path, line_no, msg))?;
            let Some(node_index0) = self.resolve_structure_node(node_id0, &mut stats) else {
                return Ok(());
            };
            for node_id1 in neighbors {
                let Some(node_index1) = self.resolve_structure_node(node_id1, &mut stats) else {
                    continue;
                };
                self.connect(node_index0, node_index1, DEFAULT_EDGE_WEIGHT, &mut stats)?;
            }
            Ok(())
        })?;

        Ok(stats)
    }

    fn read_edgelist(&mut self, path: &Path) -> Result<StructureStats> {
        let mut stats = StructureStats::default();

        for_each_line(path, |line_no, line| {
            let record =
                parse_edgelist_line(line).map_err(|msg| DatasetError::format(path, line_no, msg))?;
            let Some(node_index0) = self.resolve_structure_node(record.node_id0, &mut stats) else {
                return Ok(());
            };
            let Some(node_index1) = self.resolve_structure_node(record.node_id1, &mut stats) else {
                return Ok(());
            };
            self.connect(node_index0, node_index1, record.weight, &mut stats)
        })?;

        Ok(stats)
    }

    /// NODE index for a structure entry, or `None` when the filter drops it
    fn resolve_structure_node(
        &mut self,
        node_id: &str,
        stats: &mut StructureStats,
    ) -> Option<usize> {
        if self.ignore_featureless_node && !self.network.has_node_id(NodeType::Node, node_id) {
            trace!("skipping featureless node '{}'", node_id);
            stats.skipped_nodes += 1;
            return None;
        }
        Some(self.network.get_or_create_node_index(NodeType::Node, node_id))
    }

    fn connect(
        &mut self,
        index0: usize,
        index1: usize,
        weight: f64,
        stats: &mut StructureStats,
    ) -> Result<()> {
        if index0 == index1 {
            stats.self_loops += 1;
            return Ok(());
        }
        self.network
            .add_edges(NodeType::Node, NodeType::Node, index0, index1, weight)?;
        stats.edges += 1;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Read accessors
    // ═══════════════════════════════════════════════════════════════════

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_format(&self) -> DataFormat {
        self.data_format
    }

    pub fn ignore_featureless_node(&self) -> bool {
        self.ignore_featureless_node
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn network(&self) -> &MetaNetwork {
        &self.network
    }

    pub fn num_nodes(&self) -> usize {
        self.network.num_nodes(NodeType::Node)
    }

    pub fn num_tokens(&self) -> usize {
        self.tokenizer.num_tokens()
    }

    /// Number of distinct labels
    pub fn num_classes(&self) -> usize {
        self.network.num_nodes(NodeType::Label)
    }

    /// Undirected NODE/NODE connections
    pub fn num_edges(&self) -> usize {
        self.network.num_edges(NodeType::Node, NodeType::Node) / 2
    }

    /// Raw identifier of a NODE index
    pub fn node_id(&self, node_index: usize) -> Option<&str> {
        self.network.node_id(NodeType::Node, node_index)
    }

    /// Raw identifier of a LABEL index (class name)
    pub fn label_id(&self, label_index: usize) -> Option<&str> {
        self.network.node_id(NodeType::Label, label_index)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Derived matrices
    // ═══════════════════════════════════════════════════════════════════

    /// `num_nodes x num_tokens` bag-of-words matrix.
    ///
    /// Every token occurrence adds 1 at (node, token), so repeated tokens
    /// count. Only `bag_of_words == true` is implemented. Featureless nodes
    /// get an all-zero row.
    pub fn feature_matrix(&self, bag_of_words: bool, sparse: bool) -> Result<Matrix<f32>> {
        if !bag_of_words {
            return Err(DatasetError::unsupported(
                "only bag-of-words feature matrices are implemented",
            ));
        }

        let num_nodes = self.num_nodes();
        let mut triplets = Vec::new();
        let mut featureless = 0;
        for node_index in 0..num_nodes {
            if !self.network.has_node_attr(NodeType::Node, node_index, attrs::FEATURES) {
                featureless += 1;
                continue;
            }
            let token_indices = self
                .network
                .get_node_attr(NodeType::Node, node_index, attrs::FEATURES)?
                .as_indices()
                .ok_or_else(|| {
                    DatasetError::lookup(format!(
                        "node {} has a non-sequence '{}' attribute",
                        node_index,
                        attrs::FEATURES
                    ))
                })?;
            triplets.extend(
                token_indices
                    .iter()
                    .map(|&token_index| (node_index, token_index, 1.0)),
            );
        }
        if featureless > 0 {
            warn!("{} featureless nodes have all-zero feature rows", featureless);
        }

        Ok(Matrix::<f32>::from_triplets(
            (num_nodes, self.num_tokens()),
            triplets,
            sparse,
        ))
    }

    /// LABEL index of every NODE in index order; fails on the first unlabeled node
    pub fn label_indices(&self) -> Result<Vec<usize>> {
        self.network
            .get_node_attrs(NodeType::Node, 0..self.num_nodes(), attrs::LABEL)?
            .into_iter()
            .map(|value| {
                value.as_index().ok_or_else(|| {
                    DatasetError::lookup(format!("'{}' attribute is not an index", attrs::LABEL))
                })
            })
            .collect()
    }

    /// Raw label vector, or a `num_nodes x num_classes` one-hot matrix
    pub fn label_list_or_matrix(&self, one_hot: bool) -> Result<LabelOutput> {
        let labels = self.label_indices()?;
        if !one_hot {
            return Ok(LabelOutput::Indices(Array1::from(labels)));
        }

        let mut matrix = Array2::<i32>::zeros((labels.len(), self.num_classes()));
        for (row, &label) in labels.iter().enumerate() {
            matrix[[row, label]] = 1;
        }
        Ok(LabelOutput::OneHot(matrix))
    }

    /// NODE/NODE adjacency matrix
    pub fn adj_matrix(&self, sparse: bool) -> Result<Matrix<f64>> {
        self.adj_matrix_between(NodeType::Node, NodeType::Node, sparse)
    }

    pub fn adj_matrix_between(
        &self,
        node_type0: NodeType,
        node_type1: NodeType,
        sparse: bool,
    ) -> Result<Matrix<f64>> {
        self.network.adj_matrix(node_type0, node_type1, sparse)
    }

    /// Seeded train/test split over NODE indices
    pub fn split_train_and_test(&self, training_rate: f64) -> Result<TrainTestSplit> {
        self.split_train_and_test_for(NodeType::Node, training_rate)
    }

    pub fn split_train_and_test_for(
        &self,
        node_type: NodeType,
        training_rate: f64,
    ) -> Result<TrainTestSplit> {
        self.network.split_train_and_test(node_type, training_rate)
    }

    /// Split with the configured training rate
    pub fn default_split(&self) -> Result<TrainTestSplit> {
        self.split_train_and_test(self.training_rate)
    }

    pub fn summary(&self) -> DatasetSummary {
        let num_nodes = self.num_nodes();
        let count_missing = |name: &str| {
            (0..num_nodes)
                .filter(|&index| !self.network.has_node_attr(NodeType::Node, index, name))
                .count()
        };

        DatasetSummary {
            data_format: self.data_format,
            tokenizer: self.tokenizer.name().to_string(),
            ignore_featureless_node: self.ignore_featureless_node,
            num_nodes,
            num_classes: self.num_classes(),
            num_tokens: self.num_tokens(),
            num_edges: self.num_edges(),
            featureless_nodes: count_missing(attrs::FEATURES),
            unlabeled_nodes: count_missing(attrs::LABEL),
        }
    }

    pub fn summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }
}
