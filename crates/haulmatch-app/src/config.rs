//! Configuration management for haulmatch
//!
//! Config stored at: ~/.config/haulmatch/config.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use haulmatch_domain::service::format::MAPS_API_KEY_PLACEHOLDER;
use haulmatch_domain::service::quote_builder::DEFAULT_VALIDITY_DAYS;
use haulmatch_types::{ConfigError, Currency, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Currency for prices and quotes
    #[serde(default)]
    pub currency: Currency,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Alternate trailer catalog (TOML or CSV); built-in table when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Key for the embedded map preview
    #[serde(default)]
    pub maps_api_key: Option<String>,

    #[serde(default = "default_origin")]
    pub default_origin: String,

    #[serde(default = "default_destination")]
    pub default_destination: String,

    /// Days a quote stays valid after issue
    #[serde(default = "default_validity_days")]
    pub quote_validity_days: u64,
}

fn default_origin() -> String {
    "nyc".to_string()
}

fn default_destination() -> String {
    "chi".to_string()
}

fn default_validity_days() -> u64 {
    DEFAULT_VALIDITY_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            output_format: OutputFormat::default(),
            catalog_path: None,
            maps_api_key: None,
            default_origin: default_origin(),
            default_destination: default_destination(),
            quote_validity_days: default_validity_days(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulmatch");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Load config from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Map key to embed, if one is configured
    pub fn maps_api_key(&self) -> Option<&str> {
        self.maps_api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulmatch Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Currency:            {}", self.currency)?;
        writeln!(f, "Output format:       {}", self.output_format)?;
        writeln!(
            f,
            "Trailer catalog:     {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Maps API key:        {}",
            if self.maps_api_key().is_some() {
                "(set)"
            } else {
                MAPS_API_KEY_PLACEHOLDER
            }
        )?;
        writeln!(f, "Default origin:      {}", self.default_origin)?;
        writeln!(f, "Default destination: {}", self.default_destination)?;
        writeln!(f, "Quote validity:      {} days", self.quote_validity_days)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:         {}", path.display())?;
        }

        Ok(())
    }
}
