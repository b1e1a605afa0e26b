//! Text → token identifiers → dense token indices
//!
//! A `Tokenizer` pairs a splitting policy (`tokenize`) with its own
//! `Vocabulary`. Indices are handed out in first-seen order, so
//! `0..num_tokens()` is always fully covered.
//!
//! ```rust,ignore
//! use gnn_dataset::features::tokenizer::{EnglishWordTokenizer, Tokenizer};
//!
//! let mut tokenizer = EnglishWordTokenizer::new();
//! let indices = tokenizer.tokenize_to_indices("The cat saw the dog", true)?;
//! assert_eq!(indices, vec![0, 1, 2, 0, 3]);
//! ```

pub mod policies;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::errors::Result;

pub use policies::{EnglishWordTokenizer, WhiteSpaceTokenizer};
pub use vocabulary::Vocabulary;

/// Tokenization policy plus the vocabulary it fills
pub trait Tokenizer: Send + Sync {
    /// Split text into token identifiers. Deterministic for identical input.
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn vocabulary(&self) -> &Vocabulary;

    fn vocabulary_mut(&mut self) -> &mut Vocabulary;

    /// Policy name for logs and summaries
    fn name(&self) -> &'static str;

    /// Existing index for `token_id`, or the next free one
    fn get_or_create_token_index(&mut self, token_id: &str) -> usize {
        self.vocabulary_mut().get_or_create(token_id)
    }

    /// Index of a registered token; `Lookup` error otherwise
    fn get_token_index(&self, token_id: &str) -> Result<usize> {
        self.vocabulary().get(token_id)
    }

    fn num_tokens(&self) -> usize {
        self.vocabulary().len()
    }

    fn token_id(&self, index: usize) -> Option<&str> {
        self.vocabulary().token_id(index)
    }

    /// Tokenize and map every identifier to its index, keeping order and duplicates.
    ///
    /// With `create_token_index == false` an unseen token fails the whole call
    /// and the vocabulary is left untouched.
    fn tokenize_to_indices(&mut self, text: &str, create_token_index: bool) -> Result<Vec<usize>> {
        let token_ids = self.tokenize(text);
        if create_token_index {
            Ok(token_ids
                .iter()
                .map(|token_id| self.get_or_create_token_index(token_id))
                .collect())
        } else {
            token_ids
                .iter()
                .map(|token_id| self.get_token_index(token_id))
                .collect()
        }
    }
}

/// Selectable tokenization policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    #[default]
    EnglishWord,
    WhiteSpace,
}

impl TokenizerKind {
    /// Fresh tokenizer with an empty vocabulary
    pub fn build(&self) -> Box<dyn Tokenizer> {
        match self {
            Self::EnglishWord => Box::new(EnglishWordTokenizer::new()),
            Self::WhiteSpace => Box::new(WhiteSpaceTokenizer::new()),
        }
    }

    pub fn from_str(s: &str) -> std::result::Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "english_word" | "english" => Ok(Self::EnglishWord),
            "white_space" | "whitespace" => Ok(Self::WhiteSpace),
            _ => Err(ConfigError::UnknownTokenizer(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnglishWord => "english_word",
            Self::WhiteSpace => "white_space",
        }
    }
}

impl std::fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
