//! Configuration management for the campaign dashboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_TIMEOUT_MS, DEFAULT_API_URL, DEFAULT_PAGE_SIZE,
    MAX_API_TIMEOUT_MS, PAGE_SIZES,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the campaign analytics API
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page size used when the dashboard opens
    pub default_page_size: u32,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for campaign start/end dates
    pub date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            mouse_enabled: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(config_dir) = Self::get_xdg_config_dir() {
            let xdg_config = config_dir.join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Apply environment overrides once at startup
    ///
    /// `CAMPAIGN_API_URL` replaces `api.base_url` when set and non-empty.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    /// Replace the API base URL with an override value and re-validate
    pub fn apply_api_url_override(&mut self, value: Option<String>) -> Result<()> {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
            self.validate()
                .with_context(|| format!("Invalid value in {}", API_URL_ENV))?;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate API settings
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        if self.api.timeout_ms == 0 || self.api.timeout_ms > MAX_API_TIMEOUT_MS {
            anyhow::bail!(
                "api.timeout_ms must be between 1 and {}, got {}",
                MAX_API_TIMEOUT_MS,
                self.api.timeout_ms
            );
        }

        // Validate UI settings
        if !PAGE_SIZES.contains(&self.ui.default_page_size) {
            anyhow::bail!(
                "ui.default_page_size must be one of {:?}, got {}",
                PAGE_SIZES,
                self.ui.default_page_size
            );
        }

        // Validate date format
        if self.display.date_format.trim().is_empty()
            || StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error))
        {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }
}
