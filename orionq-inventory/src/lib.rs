//! Inventory invocation for OrionQ.
//!
//! Ties the pieces together for one call:
//!
//! 1. **Build**: filters → [`QueryPlan`](orionq_query::QueryPlan) via the field registry
//! 2. **Short-circuit**: in query-only mode, return the text; the executor is never touched
//! 3. **Execute**: one call to the [`QueryExecutor`]
//! 4. **Enrich**: run the enabled enrichments over every row
//!
//! # Example
//!
//! ```
//! use orionq_inventory::{get_inventory, InventoryRequest};
//! use orionq_inventory::executor::mock::RecordingExecutor;
//! use orionq_model::{FieldRegistry, FilterSpec};
//!
//! let mut executor = RecordingExecutor::default();
//! let request = InventoryRequest {
//!     query_only: true,
//!     ..InventoryRequest::new(FilterSpec::new().with("Vendor", "Cisco"))
//! };
//!
//! let output = get_inventory(FieldRegistry::orion(), &mut executor, &request).unwrap();
//! assert!(output.as_query().unwrap().contains("N.Vendor LIKE 'Cisco'"));
//! assert!(executor.queries().is_empty());
//! ```

mod error;
pub mod executor;
mod request;

pub use error::{InventoryError, InventoryResult};
pub use executor::QueryExecutor;
pub use request::{InventoryOutput, InventoryRequest};

use orionq_enrich::EnrichmentPipeline;
use orionq_model::FieldRegistry;
use tracing::{debug, info};

/// Runs one inventory request.
///
/// # Errors
///
/// - [`InventoryError::Build`] if the request cannot be turned into a query
/// - [`InventoryError::Execute`] carrying the executor's own error
pub fn get_inventory<X: QueryExecutor>(
    registry: &FieldRegistry,
    executor: &mut X,
    request: &InventoryRequest,
) -> InventoryResult<InventoryOutput, X::Error> {
    let swql = request.plan(registry)?.render();

    if request.query_only {
        debug!("Query-only mode, skipping execution");
        return Ok(InventoryOutput::Query(swql));
    }

    let mut rows = executor.query(&swql).map_err(InventoryError::Execute)?;
    info!(rows = rows.len(), "Inventory query returned");

    EnrichmentPipeline::from_options(&request.enrichment).apply_all(&mut rows);
    Ok(InventoryOutput::Rows(rows))
}
