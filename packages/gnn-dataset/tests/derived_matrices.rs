//! Integration tests for the derived matrix accessors

mod common;

use common::*;
use gnn_dataset::{DataFormat, DatasetConfig, ErrorKind, GraphDataset, LabelOutput, NodeType};
use ndarray::{array, Array1};
use pretty_assertions::assert_eq;

fn open(fixture: &DatasetFixture, ignore_featureless_node: bool) -> GraphDataset {
    GraphDataset::open(fixture.path(), DataFormat::AdjEdges, ignore_featureless_node, None).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Feature matrix
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_bag_of_words_dense() {
    let fixture = fixture_two_docs();
    let dataset = open(&fixture, true);

    let features = dataset.feature_matrix(true, false).unwrap();
    assert!(!features.is_sparse());
    assert_eq!(
        features.into_dense(),
        array![[1.0f32, 1.0, 1.0, 0.0, 0.0], [1.0, 0.0, 0.0, 1.0, 1.0]]
    );
}

#[test]
fn test_bag_of_words_sparse_matches_dense() {
    let fixture = fixture_ring(8);
    let dataset = open(&fixture, true);

    let sparse = dataset.feature_matrix(true, true).unwrap();
    let dense = dataset.feature_matrix(true, false).unwrap();
    assert!(sparse.is_sparse());
    assert_eq!(sparse.shape(), (8, dataset.num_tokens()));
    assert_eq!(sparse.nnz(), dense.nnz());
    assert_eq!(sparse.into_dense(), dense.into_dense());
}

#[test]
fn test_repeated_tokens_are_counted() {
    let fixture = DatasetFixture::new()
        .docs(&["a the the cat", "b THE"])
        .labels(&["a L", "b L"])
        .adjedges(&["a b"]);
    let dataset = open(&fixture, true);

    let features = dataset.feature_matrix(true, true).unwrap();
    assert_eq!(features.get(0, 0), 2.0);
    assert_eq!(features.get(0, 1), 1.0);
    assert_eq!(features.get(1, 0), 1.0);
}

#[test]
fn test_featureless_node_has_zero_row() {
    let fixture = fixture_two_docs();
    let dataset = open(&fixture, false);

    let features = dataset.feature_matrix(true, false).unwrap().into_dense();
    assert_eq!(features.shape(), &[3, 5]);
    assert!(features.row(2).iter().all(|v| *v == 0.0));
    assert_eq!(dataset.summary().featureless_nodes, 1);
}

#[test]
fn test_non_bag_of_words_rejected() {
    let fixture = fixture_two_docs();
    let dataset = open(&fixture, true);
    let err = dataset.feature_matrix(false, false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unsupported);
}

// ═══════════════════════════════════════════════════════════════════════════
// Labels
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_label_list_and_one_hot() {
    let fixture = fixture_two_docs();
    let dataset = open(&fixture, true);

    assert_eq!(dataset.num_classes(), 2);
    assert_eq!(dataset.label_id(1), Some("L1"));

    let list = dataset.label_list_or_matrix(false).unwrap();
    assert_eq!(list.as_indices(), Some(&Array1::from(vec![0usize, 1])));
    assert!(list.as_one_hot().is_none());

    let one_hot = dataset.label_list_or_matrix(true).unwrap();
    assert_eq!(one_hot, LabelOutput::OneHot(array![[1, 0], [0, 1]]));
}

#[test]
fn test_one_hot_rows_sum_to_one() {
    let fixture = fixture_ring(9);
    let dataset = open(&fixture, true);

    let one_hot = dataset.label_list_or_matrix(true).unwrap();
    let matrix = one_hot.as_one_hot().unwrap();
    assert_eq!(matrix.shape(), &[9, 2]);
    for row in matrix.rows() {
        assert_eq!(row.sum(), 1);
    }
}

#[test]
fn test_unlabeled_node_fails_label_accessor() {
    let fixture = fixture_two_docs();
    let dataset = open(&fixture, false);

    let err = dataset.label_list_or_matrix(false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lookup);
    assert_eq!(dataset.summary().unlabeled_nodes, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Adjacency
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_adjacency_is_symmetric_without_diagonal() {
    let fixture = fixture_ring(6);
    let dataset = open(&fixture, true);

    let adj = dataset.adj_matrix(false).unwrap().into_dense();
    assert_eq!(adj, adj.t());
    for i in 0..6 {
        assert_eq!(adj[[i, i]], 0.0);
        assert_eq!(adj[[i, (i + 1) % 6]], 1.0);
    }
    assert_eq!(dataset.num_edges(), 6);
}

#[test]
fn test_adjacency_between_node_and_label_is_empty() {
    let fixture = fixture_two_docs();
    let dataset = open(&fixture, true);

    let adj = dataset
        .adj_matrix_between(NodeType::Node, NodeType::Label, true)
        .unwrap();
    assert_eq!(adj.shape(), (2, 2));
    assert_eq!(adj.nnz(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Train/test split
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_split_partitions_nodes() {
    let fixture = fixture_ring(10);
    let dataset = open(&fixture, true);

    let split = dataset.split_train_and_test(0.3).unwrap();
    assert_eq!(split.train.len(), 3);
    assert_eq!(split.test.len(), 7);

    let mut all: Vec<usize> = split.train.iter().chain(split.test.iter()).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_split_edge_rates() {
    let fixture = fixture_ring(5);
    let dataset = open(&fixture, true);

    assert!(dataset.split_train_and_test(0.0).unwrap().train.is_empty());
    assert!(dataset.split_train_and_test(1.0).unwrap().test.is_empty());

    let err = dataset.split_train_and_test(1.5).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Config);
}

#[test]
fn test_split_is_seeded() {
    let fixture = fixture_ring(50);
    let config = DatasetConfig::new(fixture.path()).seed(1);

    let first = GraphDataset::from_config(&config).unwrap();
    let again = GraphDataset::from_config(&config).unwrap();
    assert_eq!(first.default_split().unwrap(), again.default_split().unwrap());
    assert_eq!(first.split_train_and_test(0.5).unwrap(), first.split_train_and_test(0.5).unwrap());

    let other = GraphDataset::from_config(&config.clone().seed(2)).unwrap();
    let order = |d: &GraphDataset| {
        let split = d.split_train_and_test(0.5).unwrap();
        split.train.into_iter().chain(split.test).collect::<Vec<_>>()
    };
    assert_ne!(order(&first), order(&other));
}

#[test]
fn test_summary_json() {
    let fixture = fixture_two_docs();
    let dataset = open(&fixture, true);

    let json: serde_json::Value = serde_json::from_str(&dataset.summary_json().unwrap()).unwrap();
    assert_eq!(json["data_format"], "adjedges");
    assert_eq!(json["tokenizer"], "english_word");
    assert_eq!(json["num_nodes"], 2);
    assert_eq!(json["num_tokens"], 5);
    assert_eq!(json["num_edges"], 1);
}
