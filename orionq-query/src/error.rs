//! Error types for query construction.

use orionq_model::ModelError;
use thiserror::Error;

/// Result type for query construction.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that prevent a query from being built.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Filter input could not be interpreted.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A custom property name cannot be addressed as a field path.
    #[error("invalid custom property name '{0}'")]
    InvalidPropertyName(String),
}
