//! Optional defaults read from `~/.orionq/config.toml`.
//!
//! ```toml
//! [query]
//! order-by = "N.Caption"
//! top = 0
//! extra-fields = ["N.CPULoad"]
//!
//! [enrichment]
//! manufacture-date = true
//! firmware-build-date = true
//! ```

use orionq_enrich::EnrichmentOptions;
use orionq_query::DEFAULT_ORDER_BY;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Query defaults; command-line flags win over these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct QueryDefaults {
    pub order_by: String,
    pub top: u32,
    pub extra_fields: Vec<String>,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            order_by: DEFAULT_ORDER_BY.to_string(),
            top: 0,
            extra_fields: Vec::new(),
        }
    }
}

/// Parsed config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub query: QueryDefaults,
    pub enrichment: EnrichmentOptions,
}

impl CliConfig {
    /// Loads `~/.orionq/config.toml` if it exists.
    pub fn load() -> Self {
        Self::load_from(&config_dir().join("config.toml"))
    }

    /// Loads from an explicit path.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        Path::new(&home).join(".orionq")
    } else if let Ok(home) = std::env::var("USERPROFILE") {
        Path::new(&home).join(".orionq")
    } else {
        PathBuf::from(".orionq")
    }
}
