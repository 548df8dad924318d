use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Parser;
use orionq_enrich::EnrichmentOptions;
use orionq_inventory::InventoryRequest;
use orionq_model::{CustomProperties, FilterSpec};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "orionq", version)]
#[command(about = "Query Orion node inventory with wildcard filters and derived dates")]
pub struct Args {
    /// Filter as KEY=PATTERN; separate alternatives with commas. `*` matches anything.
    #[arg(short, long = "filter", value_name = "KEY=PATTERN")]
    pub filters: Vec<String>,

    /// JSON file of filters, e.g. {"Vendor": ["Cisco"], "CustomProperties": ["Site"]}
    #[arg(long, value_name = "FILE")]
    pub filter_file: Option<PathBuf>,

    /// Custom property to include, optionally filtered: NAME or NAME=PATTERN
    #[arg(short, long = "property", value_name = "NAME[=PATTERN]")]
    pub properties: Vec<String>,

    /// Extra field to project, passed through verbatim
    #[arg(long = "field", value_name = "FIELD")]
    pub extra_fields: Vec<String>,

    /// Field to order by
    #[arg(long, value_name = "FIELD")]
    pub order_by: Option<String>,

    /// Maximum number of rows (0 for no limit)
    #[arg(long, value_name = "N")]
    pub top: Option<u32>,

    /// Print the query instead of executing it
    #[arg(short, long)]
    pub query_only: bool,

    /// JSON file of result rows to enrich
    #[arg(long, value_name = "FILE")]
    pub rows: Option<PathBuf>,

    /// Skip manufacture date decoding
    #[arg(long)]
    pub no_manufacture_date: bool,

    /// Skip firmware build date extraction
    #[arg(long)]
    pub no_firmware_date: bool,

    /// Config file (defaults to ~/.orionq/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses `KEY=P1,P2` into a parameter and its patterns.
pub fn parse_filter_arg(arg: &str) -> Result<(String, Vec<String>)> {
    let Some((key, patterns)) = arg.split_once('=') else {
        bail!("filter '{arg}' must be KEY=PATTERN");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("filter '{arg}' has an empty key");
    }
    let patterns = patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();
    Ok((key.to_string(), patterns))
}

/// Parses `--property` values.
///
/// All bare names give [`CustomProperties::Names`]; all `NAME=PATTERN`
/// gives [`CustomProperties::Patterns`]. Mixing the two is rejected.
pub fn parse_properties(args: &[String]) -> Result<Option<CustomProperties>> {
    if args.is_empty() {
        return Ok(None);
    }

    let mut names = Vec::new();
    let mut patterns = BTreeMap::new();
    for arg in args {
        match arg.split_once('=') {
            Some((name, pattern)) => {
                patterns.insert(name.trim().to_string(), pattern.trim().to_string());
            }
            None => names.push(arg.trim().to_string()),
        }
    }

    match (names.is_empty(), patterns.is_empty()) {
        (false, true) => Ok(Some(CustomProperties::Names(names))),
        (true, false) => Ok(Some(CustomProperties::Patterns(patterns))),
        _ => bail!("--property values must all be NAME or all be NAME=PATTERN"),
    }
}

/// Layers command-line arguments over the config file.
pub fn build_request(args: &Args, config: &CliConfig) -> Result<InventoryRequest> {
    let mut filters = match &args.filter_file {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read filter file {}", path.display()))?;
            FilterSpec::from_json_str(&json)
                .with_context(|| format!("Invalid filter file {}", path.display()))?
        }
        None => FilterSpec::new(),
    };

    // The first flag for a key replaces the filter file's value; repeats accumulate.
    let mut seen = BTreeSet::new();
    for arg in &args.filters {
        let (key, patterns) = parse_filter_arg(arg)?;
        if seen.insert(key.to_ascii_lowercase()) {
            filters.set(key, patterns);
        } else {
            for pattern in patterns {
                filters.push(key.as_str(), pattern);
            }
        }
    }

    if let Some(props) = parse_properties(&args.properties)? {
        filters.set_custom_properties(props);
    }

    let mut extra_fields = config.query.extra_fields.clone();
    extra_fields.extend(args.extra_fields.iter().cloned());

    let enrichment = EnrichmentOptions {
        manufacture_date: config.enrichment.manufacture_date && !args.no_manufacture_date,
        firmware_build_date: config.enrichment.firmware_build_date && !args.no_firmware_date,
    };

    Ok(InventoryRequest {
        filters,
        extra_fields,
        enrichment,
        order_by: args
            .order_by
            .clone()
            .unwrap_or_else(|| config.query.order_by.clone()),
        query_only: args.query_only,
        top: args.top.unwrap_or(config.query.top),
    })
}
