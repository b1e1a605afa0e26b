//! Dataset configuration
//!
//! ```rust,ignore
//! use gnn_dataset::config::DatasetConfig;
//! use gnn_dataset::features::dataset::DataFormat;
//!
//! // Builder
//! let config = DatasetConfig::new("data/cora")
//!     .format(DataFormat::EdgeList)
//!     .training_rate(0.5);
//!
//! // YAML
//! let config = DatasetConfig::from_yaml("cora.yaml")?;
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::features::dataset::DataFormat;
use crate::features::tokenizer::TokenizerKind;
use crate::shared::constants::split;

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Train/test split settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// Fraction of nodes assigned to the training set (0.0..=1.0)
    pub training_rate: f64,

    /// Seed for the shuffle
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            training_rate: split::DEFAULT_TRAINING_RATE,
            seed: split::DEFAULT_SEED,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        validate_training_rate(self.training_rate)
    }
}

/// Validate a training fraction
pub fn validate_training_rate(training_rate: f64) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&training_rate) {
        return Err(ConfigError::range_with_hint(
            "training_rate",
            training_rate,
            0.0,
            1.0,
            "Training rate is a fraction of the node count",
        ));
    }
    Ok(())
}

/// Dataset configuration (YAML schema v1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Directory holding docs.txt, labels.txt and the structure file
    pub data_dir: PathBuf,

    /// Which structure file to read
    pub format: DataFormat,

    /// Drop structure entries for nodes absent from docs.txt
    pub ignore_featureless_node: bool,

    /// Tokenization policy for document text
    pub tokenizer: TokenizerKind,

    pub split: SplitConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_dir: PathBuf::new(),
            format: DataFormat::default(),
            ignore_featureless_node: true,
            tokenizer: TokenizerKind::default(),
            split: SplitConfig::default(),
        }
    }
}

impl DatasetConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn format(mut self, format: DataFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ignore_featureless_node(mut self, ignore: bool) -> Self {
        self.ignore_featureless_node = ignore;
        self
    }

    pub fn tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn training_rate(mut self, training_rate: f64) -> Self {
        self.split.training_rate = training_rate;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.split.seed = seed;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingDataDir);
        }
        self.split.validate()
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: DatasetConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(ConfigError::Yaml)
    }
}
