//! Error types for rulesync-core

use std::path::PathBuf;

/// Result type for rulesync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or rules
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file carries a version this build does not understand
    #[error("Unsupported config version: {version}. Only version 1.0 is supported.")]
    UnsupportedVersion { version: f64 },

    /// Configuration parsed but failed structural validation
    #[error("Configuration validation failed:\n{issues}")]
    ConfigInvalid { issues: String },

    /// Rule file missing on disk
    #[error("Rule file not found: {path}")]
    RuleNotFound { path: PathBuf },

    /// Rule file exists but could not be read as UTF-8 text
    #[error("Failed to read {path}: {source}")]
    RuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured glob pattern does not parse
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// YAML parse error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
