//! Error types for fetch operations.

use crate::config::ConfigError;
use thiserror::Error;

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while retrieving a company concept document.
///
/// Every variant means no body is available; a partially decoded body is
/// never returned.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Configuration rejected before any request was sent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("SEC API returned status {status} for {url}")]
    Status {
        /// Status code returned by the server
        status: reqwest::StatusCode,
        /// URL that was requested
        url: String,
    },

    /// Content-Encoding the fetcher does not know how to undo
    #[error("Unsupported content encoding: {0}")]
    UnsupportedEncoding(String),

    /// Compressed body could not be inflated
    #[error("Failed to decompress {encoding} body: {source}")]
    Decompress {
        /// Encoding that was being undone
        encoding: &'static str,
        /// Underlying decoder error
        #[source]
        source: std::io::Error,
    },

    /// Body is not valid UTF-8
    #[error("Response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
