//! Concrete tokenization policies
//!
//! - `WhiteSpaceTokenizer`: raw substrings between whitespace runs
//! - `EnglishWordTokenizer`: lowercased alphabetic words only
//!   (`"Cats, Dogs! 123"` → `["cats", "dogs"]`)

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Tokenizer, Vocabulary};

static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-zA-Z]").unwrap());

/// Splits on runs of whitespace
#[derive(Debug, Clone, Default)]
pub struct WhiteSpaceTokenizer {
    vocabulary: Vocabulary,
}

impl WhiteSpaceTokenizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tokenizer for WhiteSpaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    fn name(&self) -> &'static str {
        "white_space"
    }
}

/// Lowercases, turns every non `[a-zA-Z]` character into a separator, then
/// splits on whitespace. Digits and punctuation never survive as tokens.
#[derive(Debug, Clone, Default)]
pub struct EnglishWordTokenizer {
    vocabulary: Vocabulary,
}

impl EnglishWordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tokenizer for EnglishWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        NON_ALPHA
            .replace_all(&lowered, " ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    fn name(&self) -> &'static str {
        "english_word"
    }
}
