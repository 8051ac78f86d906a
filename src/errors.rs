//! Error types for TravelBuddy
//!
//! Load-time and transport failures are errors. Per-query outcomes (no
//! matching destination, unknown query terms, empty corpus) are plain data
//! and never show up here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the travel assistant
#[derive(Error, Debug)]
pub enum TravelError {
    /// Corpus source missing or unreadable
    #[error("Failed to load corpus from {path}: {source}")]
    CorpusLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus source readable but not a valid destination document
    #[error("Malformed corpus: {0}")]
    CorpusParse(#[source] serde_json::Error),

    /// Generative model errors (bad status, empty completion)
    #[error("Generation failed: {0}")]
    Generation(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unknown tool or bad tool arguments
    #[error("Tool error ({tool}): {reason}")]
    ToolError { tool: String, reason: String },
}

/// Result type alias for travel assistant operations
pub type Result<T> = std::result::Result<T, TravelError>;

impl From<toml::de::Error> for TravelError {
    fn from(err: toml::de::Error) -> Self {
        TravelError::ConfigError(err.to_string())
    }
}

impl From<toml::ser::Error> for TravelError {
    fn from(err: toml::ser::Error) -> Self {
        TravelError::ConfigError(err.to_string())
    }
}
