//! Query assembly.

use crate::clause::{compile, compile_pattern, CompiledClause};
use crate::error::{QueryError, QueryResult};
use orionq_model::{custom_property_path, FieldRegistry, FilterSpec};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Bridge set joining NCM nodes to Orion nodes.
pub const PROPERTIES_SET: &str = "NCM.NodeProperties";
/// Device / node inventory.
pub const PRIMARY_SET: &str = "Orion.Nodes";
/// Physical hardware components.
pub const ENTITY_SET: &str = "NCM.EntityPhysical";
/// `EntityClass` of chassis entries; only these are joined.
pub const CHASSIS_ENTITY_CLASS: u32 = 3;
/// Ordering used when the caller does not pick one.
pub const DEFAULT_ORDER_BY: &str = "N.Caption";

/// A fully assembled query, ready to render or execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPlan {
    projection: Vec<String>,
    clauses: Vec<CompiledClause>,
    order_by: String,
    top: Option<u32>,
}

impl QueryPlan {
    /// Projected field paths, defaults first.
    #[must_use]
    pub fn projection(&self) -> &[String] {
        &self.projection
    }

    /// Clauses in the order they are AND-joined.
    #[must_use]
    pub fn clauses(&self) -> &[CompiledClause] {
        &self.clauses
    }

    #[must_use]
    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    /// Row cap, if one was requested.
    #[must_use]
    pub fn top(&self) -> Option<u32> {
        self.top
    }

    /// The query text.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if let Some(n) = self.top {
            write!(f, "TOP {n} ")?;
        }
        writeln!(f, "{}", self.projection.join(", "))?;
        writeln!(f, "FROM {PROPERTIES_SET} P")?;
        writeln!(f, "INNER JOIN {PRIMARY_SET} N ON P.CoreNodeID = N.NodeID")?;
        writeln!(
            f,
            "LEFT JOIN {ENTITY_SET} E ON E.NodeID = P.NodeID AND E.EntityClass = {CHASSIS_ENTITY_CLASS}"
        )?;
        // No clauses means no WHERE line; never a bare keyword.
        if !self.clauses.is_empty() {
            f.write_str("WHERE ")?;
            for (i, clause) in self.clauses.iter().enumerate() {
                if i > 0 {
                    f.write_str(" AND ")?;
                }
                write!(f, "{clause}")?;
            }
            f.write_str("\n")?;
        }
        write!(f, "ORDER BY {}", self.order_by)
    }
}

/// Builds a [`QueryPlan`] from filters and output options.
///
/// The registry is passed in explicitly; the builder never consults a
/// global table.
#[derive(Debug, Clone)]
pub struct QueryBuilder<'r> {
    registry: &'r FieldRegistry,
    filters: FilterSpec,
    extra_fields: Vec<String>,
    order_by: Option<String>,
    top: u32,
}

impl<'r> QueryBuilder<'r> {
    #[must_use]
    pub fn new(registry: &'r FieldRegistry) -> Self {
        Self {
            registry,
            filters: FilterSpec::new(),
            extra_fields: Vec::new(),
            order_by: None,
            top: 0,
        }
    }

    #[must_use]
    pub fn filters(mut self, filters: FilterSpec) -> Self {
        self.filters = filters;
        self
    }

    /// Extra projected fields, appended verbatim after the defaults.
    #[must_use]
    pub fn extra_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Field to order by, used verbatim. Blank falls back to [`DEFAULT_ORDER_BY`].
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    /// Row cap; `0` means unlimited.
    #[must_use]
    pub fn top(mut self, n: u32) -> Self {
        self.top = n;
        self
    }

    /// Assembles the plan.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPropertyName`] for a blank custom
    /// property name.
    pub fn build(self) -> QueryResult<QueryPlan> {
        let mut projection: Vec<String> = self
            .registry
            .default_fields()
            .iter()
            .map(|f| f.path())
            .collect();
        projection.extend(self.extra_fields.iter().cloned());

        let mut clauses = Vec::new();
        for entry in self.registry.iter() {
            if let Some(value) = self.filters.get(entry.parameter)
                && let Some(clause) = compile(entry.field.path(), value)
            {
                clauses.push(clause);
            }
        }

        for parameter in self.filters.parameters() {
            if !self.registry.is_filterable(parameter) {
                debug!(parameter = %parameter, "Ignoring filter with no registry mapping");
            }
        }

        if let Some(props) = self.filters.custom_properties() {
            for name in props.names() {
                projection.push(property_path(name)?);
            }
            for (name, pattern) in props.filters() {
                if let Some(clause) = compile_pattern(property_path(name)?, pattern) {
                    clauses.push(clause);
                }
            }
        }

        let order_by = match self.order_by {
            Some(field) if !field.trim().is_empty() => field,
            _ => DEFAULT_ORDER_BY.to_string(),
        };
        let top = (self.top > 0).then_some(self.top);

        debug!(
            fields = projection.len(),
            clauses = clauses.len(),
            top = ?top,
            order_by = %order_by,
            "Built inventory query"
        );

        Ok(QueryPlan {
            projection,
            clauses,
            order_by,
            top,
        })
    }
}

fn property_path(name: &str) -> QueryResult<String> {
    if name.trim().is_empty() {
        return Err(QueryError::InvalidPropertyName(name.to_string()));
    }
    Ok(custom_property_path(name))
}
