//! This module handles the demo application's configuration, including
//! loading and saving defaults to a `settings.toml` file.
//!
//! Severity and channel are stored as their lowercase wire names and parsed
//! at the boundary, so an unknown name in the file fails fast instead of
//! silently defaulting.
//!
//! # Examples
//!
//! ```no_run
//! use toastline::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.channel = Some("modal".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::{
    DEFAULT_CHANNEL, DEFAULT_SEVERITY, DEFAULT_TOAST_DURATION_SECS, DEFAULT_WATCH_SECS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Toastline";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Severity name used when none is given on the command line.
    pub severity: Option<String>,
    /// Channel name used when none is given on the command line.
    #[serde(default)]
    pub channel: Option<String>,
    /// Toast lifetime in seconds; zero disables expiry.
    #[serde(default)]
    pub duration_secs: Option<u64>,
    /// Whether repeated toasts are grouped by default.
    #[serde(default)]
    pub grouped: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            severity: Some(DEFAULT_SEVERITY.to_string()),
            channel: Some(DEFAULT_CHANNEL.to_string()),
            duration_secs: Some(DEFAULT_TOAST_DURATION_SECS),
            grouped: Some(false),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
