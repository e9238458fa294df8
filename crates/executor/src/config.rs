//! Executor configuration.
//!
//! # Example
//!
//! ```toml
//! validation_report = "first"
//! strict_fields = true
//! default_success_result = true
//! ```
//!
//! Every key is optional; an empty file yields [`ExecutorConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use simctl_protocol::ReportMode;

/// Policy knobs of an [`Executor`](crate::Executor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutorConfig {
    /// How many failing fields a malformed-command error lists.
    pub validation_report: ReportMode,
    /// Reject commands carrying fields their type does not declare.
    pub strict_fields: bool,
    /// Answer with a `SuccessResult` when a handler produces no result.
    pub default_success_result: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        ExecutorConfig {
            validation_report: ReportMode::All,
            strict_fields: false,
            default_success_result: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse executor config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ExecutorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
