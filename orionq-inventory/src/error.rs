//! Error types for inventory invocation.

use orionq_query::QueryError;
use thiserror::Error;

/// Result type for inventory invocation, generic over the executor's error.
pub type InventoryResult<T, E> = Result<T, InventoryError<E>>;

/// Errors from building or executing an inventory query.
#[derive(Debug, Error)]
pub enum InventoryError<E> {
    /// The query could not be built from the request.
    #[error("failed to build query: {0}")]
    Build(#[from] QueryError),

    /// The executor failed; the error is its own, unmodified.
    #[error(transparent)]
    Execute(E),
}

impl<E> InventoryError<E> {
    /// The executor's error, if that is what failed.
    pub fn into_execute(self) -> Option<E> {
        match self {
            Self::Execute(e) => Some(e),
            Self::Build(_) => None,
        }
    }
}
