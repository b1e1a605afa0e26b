use crate::errors::{DatasetError, Result};
use crate::shared::IndexTable;

/// Token identifier ↔ token index table owned by one tokenizer
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    table: IndexTable,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, token_id: &str) -> usize {
        self.table.get_or_insert(token_id)
    }

    pub fn get(&self, token_id: &str) -> Result<usize> {
        self.table
            .get(token_id)
            .ok_or_else(|| DatasetError::lookup(format!("Unknown token: '{}'", token_id)))
    }

    pub fn token_id(&self, index: usize) -> Option<&str> {
        self.table.id(index)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Token identifiers in index order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.table.ids()
    }
}
