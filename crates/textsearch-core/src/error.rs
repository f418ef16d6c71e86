//! Error types for text search datasets

use thiserror::Error;

/// Errors raised while configuring or querying a text search dataset.
///
/// Mutations never fail: statements with unindexed predicates, unknown
/// subjects or missing values are silently ignored by every index.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid construction parameters (no field list, bad weight, ...)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Search against an index name that was never registered
    #[error("unknown index: '{0}'")]
    UnknownIndex(String),

    /// Malformed JSON configuration
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using [`SearchError`].
pub type Result<T> = std::result::Result<T, SearchError>;
