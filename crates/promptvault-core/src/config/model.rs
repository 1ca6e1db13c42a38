use crate::config::consts::DEFAULT_VERSION;
use crate::error::{Result, VaultError};
use crate::schema::{DocumentSchema, DEFAULT_MIN_TEST_CASES};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// vault.toml schema - every table is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_version")]
    pub default_version: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            default_version: default_version(),
        }
    }
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_min_test_cases")]
    pub min_test_cases: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_test_cases: DEFAULT_MIN_TEST_CASES,
        }
    }
}

fn default_min_test_cases() -> usize {
    DEFAULT_MIN_TEST_CASES
}

impl VaultConfig {
    /// Read and parse a vault.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| VaultError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!(path = %path.display(), "no vault config, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// COSTAR schema with the configured test-case threshold
    pub fn schema(&self) -> DocumentSchema {
        DocumentSchema::costar().with_min_test_cases(self.validation.min_test_cases)
    }
}
