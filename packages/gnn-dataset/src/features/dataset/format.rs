//! Line formats of the input files
//!
//! | File | Fields |
//! |---|---|
//! | `docs.txt` | `node_id` + rest-of-line text |
//! | `labels.txt` | `node_id label_id` |
//! | `adjedges.txt` | `node_id0 node_id1 ... node_idN` |
//! | `edgelist.txt` | `node_id0 node_id1 [weight]` |
//!
//! Parsers return a plain message on failure; the reader attaches path and
//! line number.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::shared::constants::{files, DEFAULT_EDGE_WEIGHT};

/// Structure file selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// `adjedges.txt`: one adjacency list per line, unit weights
    #[default]
    AdjEdges,
    /// `edgelist.txt`: one (optionally weighted) edge per line
    EdgeList,
}

impl DataFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::AdjEdges => files::ADJEDGES,
            Self::EdgeList => files::EDGELIST,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "adjedges" => Ok(Self::AdjEdges),
            "edgelist" => Ok(Self::EdgeList),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdjEdges => "adjedges",
            Self::EdgeList => "edgelist",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `docs.txt` record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRecord<'a> {
    pub node_id: &'a str,
    /// Everything after the first whitespace run, untouched
    pub text: &'a str,
}

/// One `edgelist.txt` record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord<'a> {
    pub node_id0: &'a str,
    pub node_id1: &'a str,
    pub weight: f64,
}

/// The first whitespace run is the only separator. A line holding just a
/// node id is a document with empty text.
pub fn parse_doc_line(line: &str) -> Result<DocRecord<'_>, String> {
    if line.starts_with(char::is_whitespace) {
        return Err("document line must start with a node id".to_string());
    }
    let (node_id, text) = match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim_start()),
        None => (line, ""),
    };
    Ok(DocRecord { node_id, text })
}

pub fn parse_label_line(line: &str) -> Result<(&str, &str), String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [node_id, label_id] => Ok((*node_id, *label_id)),
        _ => Err(format!(
            "expected 2 fields (node_id label_id), found {}",
            fields.len()
        )),
    }
}

/// Returns the source node and its neighbor list (possibly empty)
pub fn parse_adjedges_line(line: &str) -> Result<(&str, Vec<&str>), String> {
    let mut fields = line.split_whitespace();
    let node_id0 = fields
        .next()
        .ok_or_else(|| "expected at least 1 field (node_id0 ...)".to_string())?;
    Ok((node_id0, fields.collect()))
}

/// Missing weight defaults to 1.0
pub fn parse_edgelist_line(line: &str) -> Result<EdgeRecord<'_>, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (node_id0, node_id1, weight) = match fields.as_slice() {
        [node_id0, node_id1] => (*node_id0, *node_id1, DEFAULT_EDGE_WEIGHT),
        [node_id0, node_id1, weight] => {
            let weight: f64 = weight
                .parse()
                .map_err(|_| format!("invalid edge weight '{}'", weight))?;
            (*node_id0, *node_id1, weight)
        }
        _ => {
            return Err(format!(
                "expected 2 or 3 fields (node_id0 node_id1 [weight]), found {}",
                fields.len()
            ))
        }
    };
    Ok(EdgeRecord {
        node_id0,
        node_id1,
        weight,
    })
}
