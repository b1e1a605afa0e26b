//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// `data_dir` left empty
    #[error(
        "Missing 'data_dir' in dataset configuration. \
         Point it at a directory containing docs.txt and labels.txt."
    )]
    MissingDataDir,

    /// Unsupported version
    #[error(
        "Unsupported configuration version {found}. Supported versions: {}",
        join_versions(supported)
    )]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown structure file format
    #[error("Unknown data format '{0}'. Valid formats: adjedges, edgelist")]
    UnknownFormat(String),

    /// Unknown tokenizer policy
    #[error("Unknown tokenizer '{0}'. Valid tokenizers: english_word, white_space")]
    UnknownTokenizer(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn join_versions(versions: &[u32]) -> String {
    versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }
}
