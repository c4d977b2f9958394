//! # Configuration
//!
//! Optional TOML configuration for the binary.
//!
//! ```toml
//! [registry]
//! default_hash = "fnv1a"
//!
//! [output]
//! json = false
//!
//! [log]
//! format = "text"
//! filter = "seqset=info"
//! ```
//!
//! Every section and key is optional. Unknown keys are rejected so typos
//! surface instead of being silently ignored.

use crate::error::AppError;
use crate::hashers;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "seqset.toml";

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub registry: RegistryConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// `[registry]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Provider used by `create` lines that name no hash function.
    pub default_hash: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_hash: "fnv1a".to_string(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit one JSON object per result instead of plain text.
    pub json: bool,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `tracing_subscriber::EnvFilter` directive used when `SEQSET_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: "seqset=info".to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text. `origin` is only used in error messages.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, AppError> {
        let config: Self = toml::from_str(text).map_err(|e| AppError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path).map_err(|e| AppError::Path {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::Config {
                path: path.to_path_buf(),
                message: format!(
                    "file size {} bytes exceeds maximum allowed {} bytes",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text, path)
    }

    /// Resolve the effective config.
    ///
    /// - An explicit path must exist.
    /// - Without one, `seqset.toml` in the working directory is used if present.
    /// - Otherwise defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self, origin: &Path) -> Result<(), AppError> {
        hashers::lookup(&self.registry.default_hash).map_err(|e| AppError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
