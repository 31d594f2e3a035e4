// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! Every field is optional; [`defaults`] holds the values applied at the
//! use sites when a field is unset. A missing or unreadable file yields
//! `Config::default()` so startup never fails on configuration.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SatNotes";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub fiat_symbol: Option<String>,
    #[serde(default)]
    pub rate_endpoint: Option<String>,
    #[serde(default)]
    pub assets_dir: Option<String>,
    #[serde(default)]
    pub min_exponent: Option<u32>,
    #[serde(default)]
    pub max_exponent: Option<u32>,
    #[serde(default)]
    pub selection_capacity: Option<usize>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Config {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("Failed to read {}: {err}", path.display());
                    Config::default()
                }
            };
        }
    }
    Config::default()
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_all_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            r#"
language = "en-US"
fiat_symbol = "€"
rate_endpoint = "http://localhost:9999/price"
assets_dir = "/tmp/notes"
min_exponent = 12
max_exponent = 20
selection_capacity = 3
"#,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.language.as_deref(), Some("en-US"));
        assert_eq!(config.fiat_symbol.as_deref(), Some("€"));
        assert_eq!(
            config.rate_endpoint.as_deref(),
            Some("http://localhost:9999/price")
        );
        assert_eq!(config.assets_dir.as_deref(), Some("/tmp/notes"));
        assert_eq!(config.min_exponent, Some(12));
        assert_eq!(config.max_exponent, Some(20));
        assert_eq!(config.selection_capacity, Some(3));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert!(loaded.selection_capacity.is_none());
    }

    #[test]
    fn load_from_path_errors_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope.toml");
        assert!(load_from_path(&missing).is_err());
    }

    #[test]
    fn default_config_leaves_everything_unset() {
        let config = Config::default();
        assert!(config.language.is_none());
        assert!(config.rate_endpoint.is_none());
        assert!(config.min_exponent.is_none());
        assert!(config.max_exponent.is_none());
    }
}
