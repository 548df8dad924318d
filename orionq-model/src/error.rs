//! Error types for the inventory model.

use thiserror::Error;

/// Errors raised while turning caller input into a [`FilterSpec`](crate::FilterSpec).
#[derive(Debug, Error)]
pub enum ModelError {
    /// Custom properties were neither a list of names nor a name → pattern map.
    #[error("invalid custom properties: {0}")]
    InvalidCustomProperties(String),

    /// A filter value was not a string, number, or list of those.
    #[error("invalid value for filter '{key}': {reason}")]
    InvalidFilterValue { key: String, reason: String },

    /// The filter document itself was not a JSON object.
    #[error("invalid filter document: {0}")]
    InvalidFilterDocument(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
