//! Firmware build date from the system description.
//!
//! IOS descriptions carry a compile stamp such as
//! `Compiled Wed 03-Mar-21 12:44 by prod_rel_team`. The first
//! `DD-MMM-YY` token is taken as the build date.

use crate::pipeline::RowEnricher;
use crate::{DESCRIPTION_FIELD, FIRMWARE_BUILD_DATE_FIELD};
use chrono::NaiveDate;
use orionq_model::ResultRow;
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

static BUILD_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{2}-(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)-\d{2}\b")
        .expect("build date pattern is valid")
});

/// Finds and parses the first `DD-MMM-YY` date in `text`.
///
/// Returns `None` if there is no such token or it is not a real date
/// (e.g. `31-Feb-21`).
#[must_use]
pub fn find_build_date(text: &str) -> Option<NaiveDate> {
    let token = BUILD_DATE.find(text)?.as_str();
    NaiveDate::parse_from_str(token, "%d-%b-%y").ok()
}

/// Adds `FirmwareBuildDate` when the description carries a compile date.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirmwareBuildDateEnricher;

impl RowEnricher for FirmwareBuildDateEnricher {
    fn name(&self) -> &'static str {
        "firmware-build-date"
    }

    fn output_field(&self) -> &'static str {
        FIRMWARE_BUILD_DATE_FIELD
    }

    fn enrich(&self, row: &mut ResultRow) -> bool {
        let Some(date) = row.get_str(DESCRIPTION_FIELD).and_then(find_build_date) else {
            debug!("No build date in node description");
            return false;
        };
        row.insert_if_absent(FIRMWARE_BUILD_DATE_FIELD, date.to_string())
    }
}
