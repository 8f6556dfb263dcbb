//! Application configuration.
//!
//! Read once at startup from `$QRCODE_CONFIG` or
//! `<config dir>/QRCodeGenerator/config.json`. Every field is optional.

use crate::invalid_config;
use crate::utils::error::Result;
use crate::utils::logging::DEFAULT_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the application directory inside the platform config dir.
const APP_DIR: &str = "QRCodeGenerator";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "QRCODE_CONFIG";

pub const DEFAULT_BRAND: &str = "QRCodeGenerator";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Text shown in the header's branding link.
    pub brand: String,
    /// Viewport width (px) below which the drawer replaces the compact controls.
    pub compact_breakpoint: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_BRAND.to_string(),
            width: 1280.0,
            height: 832.0,
            min_width: 360.0,
            min_height: 480.0,
            resizable: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            compact_breakpoint: 768,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Gets the path to the config file.
    pub fn path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.json")
    }

    /// Loads the config from its default location.
    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::path()).await
    }

    /// Loads the config from `path`. A missing file yields the defaults.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !fs::try_exists(path).await? {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Parses and validates a config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let window = &self.window;

        if window.width <= 0.0 || window.height <= 0.0 {
            return Err(invalid_config!(
                "Window size must be positive, got {}x{}",
                window.width,
                window.height
            ));
        }

        if window.min_width <= 0.0 || window.min_height <= 0.0 {
            return Err(invalid_config!(
                "Minimum window size must be positive, got {}x{}",
                window.min_width,
                window.min_height
            ));
        }

        if window.min_width > window.width || window.min_height > window.height {
            return Err(invalid_config!(
                "Minimum window size {}x{} exceeds initial size {}x{}",
                window.min_width,
                window.min_height,
                window.width,
                window.height
            ));
        }

        if self.ui.compact_breakpoint == 0 {
            return Err(invalid_config!("Compact breakpoint must be non-zero"));
        }

        if self.ui.brand.trim().is_empty() {
            return Err(invalid_config!("Brand must not be empty"));
        }

        Ok(())
    }
}
