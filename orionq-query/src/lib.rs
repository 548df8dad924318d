//! SWQL query construction for OrionQ.
//!
//! Turns a [`FilterSpec`](orionq_model::FilterSpec) into one query against
//! the node / physical-entity join:
//! - [`clause`] compiles one field's patterns into a `LIKE` fragment
//! - [`plan`] assembles projection, joins, WHERE, ordering and row cap
//!
//! # Query shape
//!
//! ```text
//! SELECT [TOP n] N.NodeID, N.Caption, ...
//! FROM NCM.NodeProperties P
//! INNER JOIN Orion.Nodes N ON P.CoreNodeID = N.NodeID
//! LEFT JOIN NCM.EntityPhysical E ON E.NodeID = P.NodeID AND E.EntityClass = 3
//! WHERE N.Vendor LIKE 'Cisco' AND (N.Status LIKE '1' OR N.Status LIKE '2')
//! ORDER BY N.Caption
//! ```
//!
//! # Example
//!
//! ```
//! use orionq_model::{FieldRegistry, FilterSpec};
//! use orionq_query::QueryBuilder;
//!
//! let filters = FilterSpec::new().with("Vendor", "Cisco*");
//! let plan = QueryBuilder::new(FieldRegistry::orion())
//!     .filters(filters)
//!     .top(10)
//!     .build()
//!     .unwrap();
//!
//! assert!(plan.render().starts_with("SELECT TOP 10 "));
//! assert!(plan.render().contains("WHERE N.Vendor LIKE 'Cisco%'"));
//! ```

pub mod clause;
mod error;
pub mod plan;

pub use clause::{compile, compile_pattern, translate_wildcard, CompiledClause};
pub use error::{QueryError, QueryResult};
pub use plan::{
    QueryBuilder, QueryPlan, CHASSIS_ENTITY_CLASS, DEFAULT_ORDER_BY, ENTITY_SET, PRIMARY_SET,
    PROPERTIES_SET,
};
