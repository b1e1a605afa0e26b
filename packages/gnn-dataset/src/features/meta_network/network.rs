//! Typed multigraph container
//!
//! Per-type dense node indices, named node attributes and weighted edges
//! between (type, index) pairs. Edges are stored in both directions, keyed
//! by the ordered type pair, so `adj_matrix(a, b)` is the transpose of
//! `adj_matrix(b, a)`.

use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::domain::{AttrValue, NodeType, TrainTestSplit};
use crate::config::validate_training_rate;
use crate::errors::{DatasetError, Result};
use crate::shared::constants::split;
use crate::shared::{IndexTable, Matrix};

type Adjacency = AHashMap<usize, AHashMap<usize, f64>>;

#[derive(Debug, Clone)]
pub struct MetaNetwork {
    node_tables: AHashMap<NodeType, IndexTable>,
    node_attrs: AHashMap<(NodeType, usize), AHashMap<String, AttrValue>>,
    edges: AHashMap<(NodeType, NodeType), Adjacency>,
    split_seed: u64,
}

impl Default for MetaNetwork {
    fn default() -> Self {
        Self::with_seed(split::DEFAULT_SEED)
    }
}

impl MetaNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container whose `split_train_and_test` shuffles with `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            node_tables: AHashMap::new(),
            node_attrs: AHashMap::new(),
            edges: AHashMap::new(),
            split_seed: seed,
        }
    }

    pub fn split_seed(&self) -> u64 {
        self.split_seed
    }

    // ═══════════════════════════════════════════════════════════════════
    // Node indices
    // ═══════════════════════════════════════════════════════════════════

    pub fn get_or_create_node_index(&mut self, node_type: NodeType, node_id: &str) -> usize {
        self.node_tables
            .entry(node_type)
            .or_default()
            .get_or_insert(node_id)
    }

    pub fn get_node_index(&self, node_type: NodeType, node_id: &str) -> Result<usize> {
        self.node_tables
            .get(&node_type)
            .and_then(|table| table.get(node_id))
            .ok_or_else(|| {
                DatasetError::lookup(format!("Unknown {} node: '{}'", node_type, node_id))
            })
    }

    pub fn has_node_id(&self, node_type: NodeType, node_id: &str) -> bool {
        self.node_tables
            .get(&node_type)
            .map_or(false, |table| table.contains(node_id))
    }

    /// Raw identifier of a node index
    pub fn node_id(&self, node_type: NodeType, index: usize) -> Option<&str> {
        self.node_tables.get(&node_type).and_then(|table| table.id(index))
    }

    pub fn num_nodes(&self, node_type: NodeType) -> usize {
        self.node_tables.get(&node_type).map_or(0, IndexTable::len)
    }

    fn check_index(&self, node_type: NodeType, index: usize) -> Result<()> {
        let count = self.num_nodes(node_type);
        if index >= count {
            return Err(DatasetError::lookup(format!(
                "{} node index {} out of range (num_nodes = {})",
                node_type, index, count
            )));
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Attributes
    // ═══════════════════════════════════════════════════════════════════

    /// Set (or replace) attribute `name` on an existing node
    pub fn set_node_attr(
        &mut self,
        node_type: NodeType,
        index: usize,
        name: &str,
        value: AttrValue,
    ) -> Result<()> {
        self.check_index(node_type, index)?;
        self.node_attrs
            .entry((node_type, index))
            .or_default()
            .insert(name.to_string(), value);
        Ok(())
    }

    pub fn get_node_attr(
        &self,
        node_type: NodeType,
        index: usize,
        name: &str,
    ) -> Result<&AttrValue> {
        self.node_attrs
            .get(&(node_type, index))
            .and_then(|attrs| attrs.get(name))
            .ok_or_else(|| {
                DatasetError::lookup(format!(
                    "{} index {} has no '{}' attribute",
                    node_type, index, name
                ))
            })
    }

    pub fn has_node_attr(&self, node_type: NodeType, index: usize, name: &str) -> bool {
        self.node_attrs
            .get(&(node_type, index))
            .map_or(false, |attrs| attrs.contains_key(name))
    }

    /// Batch read; fails on the first node missing the attribute
    pub fn get_node_attrs<I>(
        &self,
        node_type: NodeType,
        indices: I,
        name: &str,
    ) -> Result<Vec<&AttrValue>>
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .map(|index| self.get_node_attr(node_type, index, name))
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Edges
    // ═══════════════════════════════════════════════════════════════════

    /// Record a weighted connection in both directions; re-adding overwrites the weight
    pub fn add_edges(
        &mut self,
        node_type0: NodeType,
        node_type1: NodeType,
        index0: usize,
        index1: usize,
        weight: f64,
    ) -> Result<()> {
        self.check_index(node_type0, index0)?;
        self.check_index(node_type1, index1)?;

        self.edges
            .entry((node_type0, node_type1))
            .or_default()
            .entry(index0)
            .or_default()
            .insert(index1, weight);
        self.edges
            .entry((node_type1, node_type0))
            .or_default()
            .entry(index1)
            .or_default()
            .insert(index0, weight);
        Ok(())
    }

    /// Directed entries stored for the ordered type pair
    pub fn num_edges(&self, node_type0: NodeType, node_type1: NodeType) -> usize {
        self.edges
            .get(&(node_type0, node_type1))
            .map_or(0, |adj| adj.values().map(|targets| targets.len()).sum())
    }

    pub fn edge_weight(
        &self,
        node_type0: NodeType,
        node_type1: NodeType,
        index0: usize,
        index1: usize,
    ) -> Option<f64> {
        self.edges
            .get(&(node_type0, node_type1))
            .and_then(|adj| adj.get(&index0))
            .and_then(|targets| targets.get(&index1))
            .copied()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Derived views
    // ═══════════════════════════════════════════════════════════════════

    /// `num_nodes(type0) x num_nodes(type1)` matrix of edge weights
    pub fn adj_matrix(
        &self,
        node_type0: NodeType,
        node_type1: NodeType,
        sparse: bool,
    ) -> Result<Matrix<f64>> {
        let shape = (self.num_nodes(node_type0), self.num_nodes(node_type1));
        let triplets: Vec<(usize, usize, f64)> = self
            .edges
            .get(&(node_type0, node_type1))
            .map(|adj| {
                adj.iter()
                    .flat_map(|(&row, targets)| {
                        targets.iter().map(move |(&col, &weight)| (row, col, weight))
                    })
                    .collect()
            })
            .unwrap_or_default();

        debug!(
            "adj_matrix {}x{}: shape={:?}, entries={}, sparse={}",
            node_type0,
            node_type1,
            shape,
            triplets.len(),
            sparse
        );
        Ok(Matrix::<f64>::from_triplets(shape, triplets, sparse))
    }

    /// Shuffle `0..num_nodes(type)` with the container seed; the first
    /// `floor(n * training_rate)` indices form the training set
    pub fn split_train_and_test(
        &self,
        node_type: NodeType,
        training_rate: f64,
    ) -> Result<TrainTestSplit> {
        validate_training_rate(training_rate)?;

        let num_nodes = self.num_nodes(node_type);
        let mut indices: Vec<usize> = (0..num_nodes).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.split_seed);
        indices.shuffle(&mut rng);

        let num_train = (num_nodes as f64 * training_rate) as usize;
        let test = indices.split_off(num_train);
        Ok(TrainTestSplit {
            train: indices,
            test,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    fn network_with_nodes(ids: &[&str]) -> MetaNetwork {
        let mut network = MetaNetwork::new();
        for id in ids {
            network.get_or_create_node_index(NodeType::Node, id);
        }
        network
    }

    #[test]
    fn test_per_type_indices() {
        let mut network = MetaNetwork::new();
        assert_eq!(network.get_or_create_node_index(NodeType::Node, "a"), 0);
        assert_eq!(network.get_or_create_node_index(NodeType::Label, "a"), 0);
        assert_eq!(network.get_or_create_node_index(NodeType::Node, "b"), 1);
        assert_eq!(network.get_or_create_node_index(NodeType::Node, "a"), 0);

        assert_eq!(network.num_nodes(NodeType::Node), 2);
        assert_eq!(network.num_nodes(NodeType::Label), 1);
        assert_eq!(network.node_id(NodeType::Node, 1), Some("b"));
    }

    #[test]
    fn test_lookup_without_creating() {
        let network = network_with_nodes(&["a"]);
        assert!(network.has_node_id(NodeType::Node, "a"));
        assert!(!network.has_node_id(NodeType::Label, "a"));

        let err = network.get_node_index(NodeType::Node, "z").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lookup);
        assert_eq!(network.num_nodes(NodeType::Node), 1);
    }

    #[test]
    fn test_attributes() {
        let mut network = network_with_nodes(&["a", "b"]);
        network
            .set_node_attr(NodeType::Node, 0, "features", AttrValue::Indices(vec![0, 1, 0]))
            .unwrap();
        network
            .set_node_attr(NodeType::Node, 0, "label", AttrValue::Index(3))
            .unwrap();

        let features = network.get_node_attr(NodeType::Node, 0, "features").unwrap();
        assert_eq!(features.as_indices(), Some(&[0, 1, 0][..]));
        assert!(network.has_node_attr(NodeType::Node, 0, "label"));
        assert!(!network.has_node_attr(NodeType::Node, 1, "label"));

        let err = network.get_node_attr(NodeType::Node, 1, "label").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lookup);
        assert_eq!(err.message, "node index 1 has no 'label' attribute");
    }

    #[test]
    fn test_set_attr_on_unknown_node() {
        let mut network = network_with_nodes(&["a"]);
        let result = network.set_node_attr(NodeType::Node, 5, "label", AttrValue::Index(0));
        assert_eq!(result.unwrap_err().kind, ErrorKind::Lookup);
    }

    #[test]
    fn test_batch_attrs() {
        let mut network = network_with_nodes(&["a", "b"]);
        network.set_node_attr(NodeType::Node, 0, "label", AttrValue::Index(1)).unwrap();
        network.set_node_attr(NodeType::Node, 1, "label", AttrValue::Index(0)).unwrap();

        let labels: Vec<usize> = network
            .get_node_attrs(NodeType::Node, 0..2, "label")
            .unwrap()
            .iter()
            .filter_map(|v| v.as_index())
            .collect();
        assert_eq!(labels, vec![1, 0]);

        assert!(network.get_node_attrs(NodeType::Node, 0..3, "label").is_err());
    }

    #[test]
    fn test_edges_are_symmetric() {
        let mut network = network_with_nodes(&["a", "b", "c"]);
        network.add_edges(NodeType::Node, NodeType::Node, 0, 2, 0.5).unwrap();

        assert_eq!(network.edge_weight(NodeType::Node, NodeType::Node, 0, 2), Some(0.5));
        assert_eq!(network.edge_weight(NodeType::Node, NodeType::Node, 2, 0), Some(0.5));
        assert_eq!(network.num_edges(NodeType::Node, NodeType::Node), 2);
    }

    #[test]
    fn test_readding_edge_overwrites_weight() {
        let mut network = network_with_nodes(&["a", "b"]);
        network.add_edges(NodeType::Node, NodeType::Node, 0, 1, 1.0).unwrap();
        network.add_edges(NodeType::Node, NodeType::Node, 1, 0, 3.0).unwrap();

        assert_eq!(network.num_edges(NodeType::Node, NodeType::Node), 2);
        assert_eq!(network.edge_weight(NodeType::Node, NodeType::Node, 0, 1), Some(3.0));
    }

    #[test]
    fn test_edge_to_unknown_node() {
        let mut network = network_with_nodes(&["a"]);
        let result = network.add_edges(NodeType::Node, NodeType::Node, 0, 1, 1.0);
        assert_eq!(result.unwrap_err().kind, ErrorKind::Lookup);
        assert_eq!(network.num_edges(NodeType::Node, NodeType::Node), 0);
    }

    #[test]
    fn test_adj_matrix() {
        let mut network = network_with_nodes(&["a", "b", "c"]);
        network.add_edges(NodeType::Node, NodeType::Node, 0, 1, 2.0).unwrap();

        let dense = network.adj_matrix(NodeType::Node, NodeType::Node, false).unwrap();
        assert_eq!(dense.shape(), (3, 3));
        assert_eq!(dense.get(0, 1), 2.0);
        assert_eq!(dense.get(1, 0), 2.0);
        assert_eq!(dense.get(2, 2), 0.0);

        let sparse = network.adj_matrix(NodeType::Node, NodeType::Node, true).unwrap();
        assert!(sparse.is_sparse());
        assert_eq!(sparse.nnz(), 2);
    }

    #[test]
    fn test_adj_matrix_between_types() {
        let mut network = network_with_nodes(&["a", "b"]);
        network.get_or_create_node_index(NodeType::Label, "L0");
        network.add_edges(NodeType::Node, NodeType::Label, 1, 0, 1.0).unwrap();

        let node_label = network.adj_matrix(NodeType::Node, NodeType::Label, false).unwrap();
        assert_eq!(node_label.shape(), (2, 1));
        assert_eq!(node_label.get(1, 0), 1.0);

        let label_node = network.adj_matrix(NodeType::Label, NodeType::Node, false).unwrap();
        assert_eq!(label_node.shape(), (1, 2));
        assert_eq!(label_node.get(0, 1), 1.0);
    }

    #[test]
    fn test_split_partitions_all_nodes() {
        let ids: Vec<String> = (0..10).map(|i| format!("n{}", i)).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let network = network_with_nodes(&refs);

        let split = network.split_train_and_test(NodeType::Node, 0.3).unwrap();
        assert_eq!(split.train.len(), 3);
        assert_eq!(split.test.len(), 7);

        let mut all: Vec<usize> = split.train.iter().chain(split.test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_is_seeded() {
        let ids: Vec<String> = (0..50).map(|i| format!("n{}", i)).collect();
        let mut a = MetaNetwork::with_seed(7);
        let mut b = MetaNetwork::with_seed(7);
        for id in &ids {
            a.get_or_create_node_index(NodeType::Node, id);
            b.get_or_create_node_index(NodeType::Node, id);
        }

        assert_eq!(
            a.split_train_and_test(NodeType::Node, 0.5).unwrap(),
            b.split_train_and_test(NodeType::Node, 0.5).unwrap()
        );
    }

    #[test]
    fn test_split_rejects_bad_rate() {
        let network = network_with_nodes(&["a"]);
        let err = network.split_train_and_test(NodeType::Node, 1.5).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn test_split_empty_type() {
        let network = MetaNetwork::new();
        let split = network.split_train_and_test(NodeType::Label, 0.3).unwrap();
        assert!(split.is_empty());
    }
}
