//! OrionQ command-line tool.
//!
//! Builds an inventory query from filters and either prints it or runs it
//! against a saved result file and prints the enriched rows as JSON.
//!
//! Usage:
//!   orionq -q -f Vendor=Cisco -f Status=1,2
//!   orionq --rows export.json --no-manufacture-date

use anyhow::{Context, Result};
use clap::Parser;
use orionq_cli::{build_request, Args, CliConfig, RowSource};
use orionq_inventory::{get_inventory, InventoryOutput};
use orionq_model::FieldRegistry;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    };
    let request = build_request(&args, &config)?;
    let mut source = RowSource::from_path(args.rows.as_deref());

    match get_inventory(FieldRegistry::orion(), &mut source, &request)? {
        InventoryOutput::Query(text) => println!("{text}"),
        InventoryOutput::Rows(rows) => {
            let json = serde_json::to_string_pretty(&rows).context("Failed to encode rows")?;
            println!("{json}");
        }
    }
    Ok(())
}
