//! Dense first-seen index assignment
//!
//! Shared by token vocabularies and per-type node tables: the first time an
//! identifier is seen it receives the next integer, so indices always cover
//! `0..len()` without gaps.

use ahash::AHashMap;

/// Bidirectional identifier ↔ index table
///
/// Forward map for lookups, reverse vector for index → identifier. Both are
/// updated together inside `get_or_insert` and never exposed mutably.
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    id_to_index: AHashMap<String, usize>,
    index_to_id: Vec<String>,
}

impl IndexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing index for `id`, or the next free one (== `len()` before the call)
    pub fn get_or_insert(&mut self, id: &str) -> usize {
        if let Some(&index) = self.id_to_index.get(id) {
            return index;
        }
        let index = self.index_to_id.len();
        self.index_to_id.push(id.to_string());
        self.id_to_index.insert(id.to_string(), index);
        index
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    pub fn id(&self, index: usize) -> Option<&str> {
        self.index_to_id.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_id.is_empty()
    }

    /// Identifiers in index order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index_to_id.iter().map(String::as_str)
    }
}
