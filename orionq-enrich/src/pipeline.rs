use crate::firmware::FirmwareBuildDateEnricher;
use crate::manufacture::ManufactureDateEnricher;
use chrono::NaiveDate;
use orionq_model::ResultRow;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single optional post-query transformation.
///
/// Implementations add at most one field, [`RowEnricher::output_field`],
/// and must leave every existing field untouched.
pub trait RowEnricher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The field this enricher adds.
    fn output_field(&self) -> &'static str;

    /// Adds the derived field if it can be computed.
    /// Returns true if the row gained a field.
    fn enrich(&self, row: &mut ResultRow) -> bool;
}

/// Which enrichments to run. Both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EnrichmentOptions {
    pub manufacture_date: bool,
    pub firmware_build_date: bool,
}

impl Default for EnrichmentOptions {
    fn default() -> Self {
        Self {
            manufacture_date: true,
            firmware_build_date: true,
        }
    }
}

impl EnrichmentOptions {
    /// Both enrichments off.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            manufacture_date: false,
            firmware_build_date: false,
        }
    }
}

/// An ordered list of enrichers applied to each row.
#[derive(Default)]
pub struct EnrichmentPipeline {
    steps: Vec<Box<dyn RowEnricher>>,
}

impl EnrichmentPipeline {
    /// An empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard pipeline for the given toggles.
    #[must_use]
    pub fn from_options(options: &EnrichmentOptions) -> Self {
        let mut pipeline = Self::new();
        if options.manufacture_date {
            pipeline.push(ManufactureDateEnricher::new());
        }
        if options.firmware_build_date {
            pipeline.push(FirmwareBuildDateEnricher);
        }
        pipeline
    }

    /// Appends an enricher.
    pub fn push(&mut self, step: impl RowEnricher + 'static) {
        self.steps.push(Box::new(step));
    }

    /// Appends an enricher, builder style.
    #[must_use]
    pub fn with(mut self, step: impl RowEnricher + 'static) -> Self {
        self.push(step);
        self
    }

    /// Names of the configured enrichers, in order.
    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step on one row. Returns the number of fields added.
    ///
    /// A step whose output field is already present is skipped, so a second
    /// pass over the same row adds nothing.
    pub fn apply(&self, row: &mut ResultRow) -> usize {
        let mut added = 0;
        for step in &self.steps {
            if row.contains(step.output_field()) {
                continue;
            }
            if step.enrich(row) {
                added += 1;
            }
        }
        added
    }

    /// Runs the pipeline over every row in order.
    pub fn apply_all(&self, rows: &mut [ResultRow]) -> usize {
        if self.steps.is_empty() {
            return 0;
        }
        let added: usize = rows.iter_mut().map(|row| self.apply(row)).sum();
        debug!(
            rows = rows.len(),
            fields_added = added,
            steps = ?self.step_names(),
            "Enriched result rows"
        );
        added
    }
}

impl std::fmt::Debug for EnrichmentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentPipeline")
            .field("steps", &self.step_names())
            .finish()
    }
}

/// Reads back a date added by an enricher.
#[must_use]
pub fn derived_date(row: &ResultRow, field: &str) -> Option<NaiveDate> {
    row.get_str(field)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}
