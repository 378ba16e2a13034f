//! Pipeline configuration
//!
//! ```yaml
//! normalize_directions: true
//! deduplicate: true
//! reverse_pairs:
//!   - [SUPPLIES, SUPPLIED_BY]
//! ```
//!
//! Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which stages run and how reverse labels are derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Split bidirectional edges into two directed edges
    pub normalize_directions: bool,
    /// Merge nodes that share a label
    pub deduplicate: bool,
    /// Extra `(label, inverse)` pairs consulted before the built-in table
    pub reverse_pairs: Vec<(String, String)>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalize_directions: true,
            deduplicate: true,
            reverse_pairs: Vec::new(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        // An empty document is `null` to serde_yaml
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn with_direction_normalization(mut self, enabled: bool) -> Self {
        self.normalize_directions = enabled;
        self
    }

    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.deduplicate = enabled;
        self
    }

    pub fn with_reverse_pair(mut self, label: impl Into<String>, inverse: impl Into<String>) -> Self {
        self.reverse_pairs.push((label.into(), inverse.into()));
        self
    }
}
