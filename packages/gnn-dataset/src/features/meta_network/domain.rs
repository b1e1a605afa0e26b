use serde::{Deserialize, Serialize};

/// Partition of the vertex space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Content/structure-bearing entity
    Node,
    /// Label value, indexed like any other node
    Label,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Node => "node",
            NodeType::Label => "label",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of a named node attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Single index (e.g. a LABEL node index)
    Index(usize),
    /// Ordered index sequence (e.g. token indices of a document)
    Indices(Vec<usize>),
}

impl AttrValue {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            AttrValue::Index(i) => Some(*i),
            AttrValue::Indices(_) => None,
        }
    }

    pub fn as_indices(&self) -> Option<&[usize]> {
        match self {
            AttrValue::Indices(v) => Some(v),
            AttrValue::Index(_) => None,
        }
    }
}

/// Node indices split into training and test sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
