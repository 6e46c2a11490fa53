//! Error types for repolens.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Upstream errors
    #[error("Upstream search unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Upstream search returned HTTP {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Upstream response could not be decoded: {0}")]
    UpstreamDecode(String),

    // Cache errors. The gateway logs and swallows these; they are never
    // surfaced by the query service.
    #[error("Cache read failed for key '{key}': {message}")]
    CacheRead { key: String, message: String },

    #[error("Cache write failed for key '{key}': {message}")]
    CacheWrite { key: String, message: String },

    // Request lifecycle errors
    #[error("Request cancelled after {0:?}")]
    Cancelled(Duration),

    // Infrastructure errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
