use chrono::NaiveDate;
use orionq_enrich::{
    derived_date, DecodeError, DecodeResult, EnrichmentOptions, EnrichmentPipeline,
    FirmwareBuildDateEnricher, ManufactureDateEnricher, RowEnricher, SerialDateDecoder,
    FIRMWARE_BUILD_DATE_FIELD, MANUFACTURE_DATE_FIELD,
};
use orionq_model::ResultRow;
use pretty_assertions::assert_eq;
use serde_json::json;

const IOS_DESCRIPTION: &str =
    "Cisco IOS Software, Version 15.2(7)E4, RELEASE SOFTWARE (fc2) Compiled 03-Mar-21 by prod_rel_team";

fn cisco_row() -> ResultRow {
    ResultRow::from_pairs([
        ("Caption", json!("core-sw-01")),
        ("Vendor", json!("Cisco")),
        ("Serial", json!("FOC1234X0AB")),
        ("NodeDescription", json!(IOS_DESCRIPTION)),
    ])
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── EnrichmentOptions ────────────────────────────────────────────

#[test]
fn options_default_to_enabled() {
    let opts = EnrichmentOptions::default();
    assert!(opts.manufacture_date);
    assert!(opts.firmware_build_date);
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: EnrichmentOptions =
        serde_json::from_value(json!({"manufacture-date": false})).unwrap();
    assert!(!opts.manufacture_date);
    assert!(opts.firmware_build_date);
}

#[test]
fn pipeline_follows_toggles() {
    let all = EnrichmentPipeline::from_options(&EnrichmentOptions::default());
    assert_eq!(all.step_names(), vec!["manufacture-date", "firmware-build-date"]);

    let firmware_only = EnrichmentPipeline::from_options(&EnrichmentOptions {
        manufacture_date: false,
        firmware_build_date: true,
    });
    assert_eq!(firmware_only.step_names(), vec!["firmware-build-date"]);

    assert!(EnrichmentPipeline::from_options(&EnrichmentOptions::none()).is_empty());
}

// ── Enrichment ───────────────────────────────────────────────────

#[test]
fn cisco_row_gets_both_dates() {
    let pipeline = EnrichmentPipeline::from_options(&EnrichmentOptions::default());
    let mut row = cisco_row();

    assert_eq!(pipeline.apply(&mut row), 2);
    assert_eq!(derived_date(&row, MANUFACTURE_DATE_FIELD), Some(ymd(2008, 8, 19)));
    assert_eq!(derived_date(&row, FIRMWARE_BUILD_DATE_FIELD), Some(ymd(2021, 3, 3)));
    assert_eq!(row.get_str(FIRMWARE_BUILD_DATE_FIELD), Some("2021-03-03"));
}

#[test]
fn second_pass_changes_nothing() {
    let pipeline = EnrichmentPipeline::from_options(&EnrichmentOptions::default());
    let mut row = cisco_row();
    pipeline.apply(&mut row);
    let once = row.clone();

    assert_eq!(pipeline.apply(&mut row), 0);
    assert_eq!(row, once);
}

#[test]
fn existing_fields_are_preserved() {
    let pipeline = EnrichmentPipeline::from_options(&EnrichmentOptions::default());
    let mut row = cisco_row();
    let before = row.clone();
    pipeline.apply(&mut row);

    for (field, value) in before.iter() {
        assert_eq!(row.get(field), Some(value), "{field} changed");
    }
    assert_eq!(row.len(), before.len() + 2);
}

#[test]
fn preexisting_derived_field_not_overwritten() {
    let pipeline = EnrichmentPipeline::from_options(&EnrichmentOptions::default());
    let mut row = cisco_row();
    row.insert(MANUFACTURE_DATE_FIELD, "from-upstream");

    assert_eq!(pipeline.apply(&mut row), 1);
    assert_eq!(row.get_str(MANUFACTURE_DATE_FIELD), Some("from-upstream"));
}

#[test]
fn vendor_match_is_case_insensitive_substring() {
    let mut row = ResultRow::from_pairs([
        ("Vendor", "cisco Systems Inc."),
        ("Serial", "FDO2101A1BC"),
    ]);
    assert!(ManufactureDateEnricher::new().enrich(&mut row));
    assert_eq!(derived_date(&row, MANUFACTURE_DATE_FIELD), Some(ymd(2017, 1, 1)));
}

#[test]
fn non_cisco_rows_get_no_manufacture_date() {
    let mut row = ResultRow::from_pairs([("Vendor", "Juniper"), ("Serial", "FOC1234X0AB")]);
    assert!(!ManufactureDateEnricher::new().enrich(&mut row));
    assert!(!row.contains(MANUFACTURE_DATE_FIELD));
}

#[test]
fn missing_or_null_serial_is_skipped() {
    let mut no_serial = ResultRow::from_pairs([("Vendor", "Cisco")]);
    let mut null_serial =
        ResultRow::from_pairs([("Vendor", json!("Cisco")), ("Serial", serde_json::Value::Null)]);
    let enricher = ManufactureDateEnricher::new();
    assert!(!enricher.enrich(&mut no_serial));
    assert!(!enricher.enrich(&mut null_serial));
}

#[test]
fn undecodable_serial_is_swallowed() {
    let pipeline = EnrichmentPipeline::from_options(&EnrichmentOptions::default());
    let mut rows = vec![
        ResultRow::from_pairs([("Vendor", "Cisco"), ("Serial", "not-a-serial")]),
        cisco_row(),
    ];
    let added = pipeline.apply_all(&mut rows);

    assert!(!rows[0].contains(MANUFACTURE_DATE_FIELD));
    assert!(rows[1].contains(MANUFACTURE_DATE_FIELD));
    assert_eq!(added, 2);
}

#[test]
fn description_without_date_adds_nothing() {
    let mut row = ResultRow::from_pairs([("NodeDescription", "Linux 5.10 x86_64")]);
    assert!(!FirmwareBuildDateEnricher.enrich(&mut row));
    assert_eq!(row.len(), 1);
}

#[test]
fn disabled_pipeline_leaves_rows_alone() {
    let pipeline = EnrichmentPipeline::from_options(&EnrichmentOptions::none());
    let mut rows = vec![cisco_row()];
    assert_eq!(pipeline.apply_all(&mut rows), 0);
    assert_eq!(rows[0], cisco_row());
}

// ── Custom steps ─────────────────────────────────────────────────

struct FixedDecoder;

impl SerialDateDecoder for FixedDecoder {
    fn decode(&self, serial: &str) -> DecodeResult<NaiveDate> {
        if serial == "known" {
            Ok(NaiveDate::from_ymd_opt(2010, 10, 10).unwrap())
        } else {
            Err(DecodeError::InvalidDate)
        }
    }
}

struct SiteCode;

impl RowEnricher for SiteCode {
    fn name(&self) -> &'static str {
        "site-code"
    }

    fn output_field(&self) -> &'static str {
        "SiteCode"
    }

    fn enrich(&self, row: &mut ResultRow) -> bool {
        let Some(code) = row.get_str("Caption").and_then(|c| c.split('-').next()) else {
            return false;
        };
        let code = code.to_uppercase();
        row.insert_if_absent("SiteCode", code)
    }
}

#[test]
fn custom_decoder_is_used() {
    let mut row = ResultRow::from_pairs([("Vendor", "Cisco"), ("Serial", "known")]);
    let enricher = ManufactureDateEnricher::with_decoder(FixedDecoder);
    assert!(enricher.enrich(&mut row));
    assert_eq!(row.get_str(MANUFACTURE_DATE_FIELD), Some("2010-10-10"));
}

#[test]
fn extra_steps_run_in_order() {
    let pipeline = EnrichmentPipeline::new()
        .with(SiteCode)
        .with(FirmwareBuildDateEnricher);
    assert_eq!(pipeline.len(), 2);

    let mut row = cisco_row();
    assert_eq!(pipeline.apply(&mut row), 2);
    assert_eq!(row.get_str("SiteCode"), Some("CORE"));
    assert!(!row.contains(MANUFACTURE_DATE_FIELD));
}
