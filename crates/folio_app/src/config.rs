//! RON configuration file, `folio.ron` in the working directory by default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use folio_core::{Layout, DEFAULT_SOURCE};
use folio_logging::{folio_info, folio_warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILENAME: &str = "folio.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: String,
    /// Base URL that a relative `source` is resolved against.
    pub base_url: Option<String>,
    pub output_dir: PathBuf,
    pub layout: Layout,
    pub primary_seed: u64,
    pub secondary_seed: u64,
    pub request_timeout_secs: Option<u64>,
    pub max_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            base_url: None,
            output_dir: PathBuf::from("output"),
            layout: Layout::Columns,
            primary_seed: 42,
            secondary_seed: 1337,
            request_timeout_secs: None,
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Load the config file. Problems are logged and fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> AppConfig {
    let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILENAME));
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound && explicit.is_none() => {
            return AppConfig::default();
        }
        Err(err) => {
            folio_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> AppConfig {
    match ron::from_str(content) {
        Ok(config) => {
            folio_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            folio_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
