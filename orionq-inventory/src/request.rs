use orionq_enrich::EnrichmentOptions;
use orionq_model::{FieldRegistry, FilterSpec, ResultRow};
use orionq_query::{QueryBuilder, QueryPlan, QueryResult, DEFAULT_ORDER_BY};
use serde::Serialize;

/// Everything a caller can ask of one inventory invocation.
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    pub filters: FilterSpec,
    /// Appended verbatim to the default projection.
    pub extra_fields: Vec<String>,
    pub enrichment: EnrichmentOptions,
    /// Used verbatim; not checked against the registry.
    pub order_by: String,
    /// Return the query text instead of executing it.
    pub query_only: bool,
    /// Row cap; `0` means unlimited.
    pub top: u32,
}

impl Default for InventoryRequest {
    fn default() -> Self {
        Self {
            filters: FilterSpec::new(),
            extra_fields: Vec::new(),
            enrichment: EnrichmentOptions::default(),
            order_by: DEFAULT_ORDER_BY.to_string(),
            query_only: false,
            top: 0,
        }
    }
}

impl InventoryRequest {
    #[must_use]
    pub fn new(filters: FilterSpec) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    /// Builds the query plan for this request.
    ///
    /// # Errors
    ///
    /// Propagates [`QueryError`](orionq_query::QueryError) from the builder.
    pub fn plan(&self, registry: &FieldRegistry) -> QueryResult<QueryPlan> {
        QueryBuilder::new(registry)
            .filters(self.filters.clone())
            .extra_fields(self.extra_fields.iter().cloned())
            .order_by(self.order_by.clone())
            .top(self.top)
            .build()
    }
}

/// What an invocation returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InventoryOutput {
    /// Query-only mode: the text that would have been executed.
    Query(String),
    /// Enriched rows.
    Rows(Vec<ResultRow>),
}

impl InventoryOutput {
    #[must_use]
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::Query(q) => Some(q),
            Self::Rows(_) => None,
        }
    }

    #[must_use]
    pub fn into_rows(self) -> Option<Vec<ResultRow>> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Query(_) => None,
        }
    }
}
