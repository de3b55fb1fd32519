use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pretrain-path operations.
#[derive(Debug, Error)]
pub enum PretrainError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configured path has fewer than three segments once normalized.
    #[error("invalid pretrain path")]
    InvalidPath { raw: String },

    #[error("Failed to write JSON output: {0}")]
    JsonOutput(#[source] serde_json::Error),

    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("Invalid log level '{level}': {message}")]
    InvalidLogLevel { level: String, message: String },

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}
