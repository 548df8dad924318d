//! Command-line host for OrionQ.
//!
//! Parses arguments, layers them over `~/.orionq/config.toml`, and runs one
//! inventory request. Rows come from a JSON file (an exported query result);
//! the live service connection is outside this crate.

pub mod args;
pub mod config;
pub mod source;

pub use args::{build_request, parse_filter_arg, parse_properties, Args};
pub use config::{CliConfig, QueryDefaults};
pub use source::{JsonRowsExecutor, RowSource, RowSourceError};
