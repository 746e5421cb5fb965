use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    city::resolve_coordinates,
    client::{API_URL, UvClient},
    error::UvError,
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_location = "sydney"
/// api_url = "https://uvdata.arpansa.gov.au/api/uvlevel/"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// City used when none is given on the command line.
    pub default_location: Option<String>,

    /// Override for the UV level endpoint.
    pub api_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("au", "uvdata", "uvdata-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Store a default city, normalized the way the registry keys are.
    pub fn set_default_location(&mut self, location: &str) -> Result<(), UvError> {
        resolve_coordinates(location)?;
        self.default_location = Some(location.trim().to_lowercase());
        Ok(())
    }

    pub fn default_location(&self) -> Option<&str> {
        self.default_location.as_deref()
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(API_URL)
    }

    /// Client pointed at the configured endpoint.
    pub fn client(&self) -> UvClient {
        UvClient::with_base_url(self.api_url())
    }
}
