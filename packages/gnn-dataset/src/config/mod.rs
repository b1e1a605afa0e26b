//! Dataset configuration
//!
//! Two ways in:
//! - Builder: `DatasetConfig::new(dir).format(..).training_rate(..)`
//! - YAML (schema v1): `DatasetConfig::from_yaml("dataset.yaml")`

pub mod dataset_config;
pub mod error;

// Re-exports
pub use dataset_config::{validate_training_rate, DatasetConfig, SplitConfig, SUPPORTED_VERSIONS};
pub use error::{ConfigError, ConfigResult};
