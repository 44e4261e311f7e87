/*!
 * Configuration types for appmanifest
 */

use crate::error::{ManifestError, Result};
use crate::manifest::DEFAULT_MD5_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for manifest generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// URL of the package as it will be on the server
    #[serde(default)]
    pub url: String,

    /// Chunk size in bytes for per-chunk MD5s
    #[serde(default = "default_md5_size")]
    pub md5_size: i64,

    /// Output encoding
    #[serde(default)]
    pub format: OutputFormat,

    /// Output file (None = stdout)
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            md5_size: default_md5_size(),
            format: OutputFormat::default(),
            output: None,
            log_level: LogLevel::default(),
            log_file: None,
            verbose: false,
        }
    }
}

/// Property list encoding of the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// XML property list, two-space indentation
    #[default]
    Xml,
    /// Binary property list (`bplist00`)
    Binary,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// Default value functions for serde
fn default_md5_size() -> i64 {
    DEFAULT_MD5_SIZE
}

impl ManifestConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ManifestError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| ManifestError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ManifestError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, contents).map_err(|e| {
            ManifestError::Config(format!("failed to write {}: {}", path.display(), e))
        })
    }
}
