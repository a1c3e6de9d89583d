//! Error types for metadata-pull
//!
//! Stage-level failures (a bad listing page, a single unreachable record) are
//! logged and absorbed by the stage that hit them. Only failures that prevent a
//! run from producing its output file are surfaced through [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for metadata-pull operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for metadata-pull
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Request could not be sent or the response could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// The requested URL
        url: String,
        /// The status code returned
        status: u16,
    },

    /// Response body or output document could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output file or directory could not be written
    #[error("failed to write {path}: {source}")]
    Output {
        /// Path that was being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// Status code carried by an [`Error::HttpStatus`], if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
