//! Query execution boundary.
//!
//! The information service itself (session setup, credentials, transport)
//! lives behind [`QueryExecutor`]. The inventory layer hands it one query
//! string and takes back rows; it never retries or reinterprets failures.

use orionq_model::ResultRow;

/// Runs SWQL text against an information service.
///
/// The implementor is the connection handle. Its error type is surfaced to
/// callers unchanged.
pub trait QueryExecutor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes one query and returns its rows.
    fn query(&mut self, swql: &str) -> Result<Vec<ResultRow>, Self::Error>;
}

impl<T: QueryExecutor + ?Sized> QueryExecutor for &mut T {
    type Error = T::Error;

    fn query(&mut self, swql: &str) -> Result<Vec<ResultRow>, Self::Error> {
        (**self).query(swql)
    }
}

/// A mock executor for testing.
pub mod mock {
    use super::*;
    use std::fmt;

    /// Failure produced by [`RecordingExecutor::failing`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MockError(pub String);

    impl fmt::Display for MockError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "mock execution failed: {}", self.0)
        }
    }

    impl std::error::Error for MockError {}

    /// Returns canned rows (or a canned error) and records every query.
    #[derive(Debug, Default)]
    pub struct RecordingExecutor {
        rows: Vec<ResultRow>,
        failure: Option<MockError>,
        queries: Vec<String>,
    }

    impl RecordingExecutor {
        /// Answers every query with a copy of `rows`.
        pub fn with_rows(rows: Vec<ResultRow>) -> Self {
            Self {
                rows,
                ..Default::default()
            }
        }

        /// Fails every query with `message`.
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                failure: Some(MockError(message.into())),
                ..Default::default()
            }
        }

        /// Queries received so far.
        pub fn queries(&self) -> &[String] {
            &self.queries
        }
    }

    impl QueryExecutor for RecordingExecutor {
        type Error = MockError;

        fn query(&mut self, swql: &str) -> Result<Vec<ResultRow>, MockError> {
            self.queries.push(swql.to_string());
            match &self.failure {
                Some(e) => Err(e.clone()),
                None => Ok(self.rows.clone()),
            }
        }
    }
}
