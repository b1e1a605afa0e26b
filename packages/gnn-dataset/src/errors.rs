//! Error types for gnn-dataset
//!
//! Every failure during construction is fatal: the caller discards the
//! half-built dataset and re-runs after fixing the input files.

use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::config::ConfigError;

/// Dataset error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input file is absent
    MissingResource,
    /// Wrong field count or unparsable numeric field
    Format,
    /// Identifier, node or attribute was never registered
    Lookup,
    /// Requested accessor mode has no implementation
    Unsupported,
    /// Invalid configuration or argument
    Config,
    /// Serialization errors (summary export)
    Serialization,
    /// I/O errors other than a missing file
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingResource => "missing_resource",
            ErrorKind::Format => "format",
            ErrorKind::Lookup => "lookup",
            ErrorKind::Unsupported => "unsupported",
            ErrorKind::Config => "config",
            ErrorKind::Serialization => "serialization",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dataset error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct DatasetError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl DatasetError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn missing_resource(path: &Path) -> Self {
        Self::new(
            ErrorKind::MissingResource,
            format!("Required file not found: {}", path.display()),
        )
    }

    /// Malformed line; `line_no` is 1-based.
    pub fn format(path: &Path, line_no: usize, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Format,
            format!("{}:{}: {}", path.display(), line_no, message.into()),
        )
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lookup, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::io(format!("I/O error: {}", err)).with_source(err)
    }
}

impl From<ConfigError> for DatasetError {
    fn from(err: ConfigError) -> Self {
        DatasetError::config(err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DatasetError>;
