//! Row sources the CLI can execute against.

use orionq_inventory::QueryExecutor;
use orionq_model::ResultRow;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors from reading rows.
#[derive(Debug, Error)]
pub enum RowSourceError {
    #[error("no row source configured (pass --rows <FILE> or --query-only)")]
    Unconfigured,

    #[error("failed to read rows from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rows in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Either a bare array of rows or the service's `{"results": [...]}` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum RowsDocument {
    Rows(Vec<ResultRow>),
    Envelope { results: Vec<ResultRow> },
}

/// Replays rows saved from an earlier query.
///
/// The query text is only logged; the file's rows are returned as-is.
#[derive(Debug, Clone)]
pub struct JsonRowsExecutor {
    path: PathBuf,
}

impl JsonRowsExecutor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QueryExecutor for JsonRowsExecutor {
    type Error = RowSourceError;

    fn query(&mut self, swql: &str) -> Result<Vec<ResultRow>, RowSourceError> {
        debug!(path = %self.path.display(), query = %swql, "Reading rows from file");
        let contents = std::fs::read_to_string(&self.path).map_err(|source| RowSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let doc: RowsDocument =
            serde_json::from_str(&contents).map_err(|source| RowSourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(match doc {
            RowsDocument::Rows(rows) | RowsDocument::Envelope { results: rows } => rows,
        })
    }
}

/// The executor selected by the command line.
#[derive(Debug, Clone)]
pub enum RowSource {
    File(JsonRowsExecutor),
    Unconfigured,
}

impl RowSource {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::File(JsonRowsExecutor::new(p)),
            None => Self::Unconfigured,
        }
    }
}

impl QueryExecutor for RowSource {
    type Error = RowSourceError;

    fn query(&mut self, swql: &str) -> Result<Vec<ResultRow>, RowSourceError> {
        match self {
            Self::File(exec) => exec.query(swql),
            Self::Unconfigured => Err(RowSourceError::Unconfigured),
        }
    }
}
