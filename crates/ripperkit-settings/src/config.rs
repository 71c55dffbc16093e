//! Configuration for RipperKit
//!
//! Configuration is organized into logical sections:
//! - Panel dimensions (physical X/Y extent of the stock)
//! - Toolpath defaults (safe travel height, stock thickness)
//! - Interaction tuning (hit radius, container margin)
//!
//! Supports JSON and TOML file formats. Every field has a default, so partial
//! files load cleanly.

use crate::error::{SettingsError, SettingsResult};
use ripperkit_core::constants::{
    CONTAINER_MARGIN, DEFAULT_HIT_RADIUS, DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH,
    DEFAULT_SAFE_Z,
};
use ripperkit_core::Panel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Panel dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Width (X extent)
    pub width: f64,
    /// Height (Y extent)
    pub height: f64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
        }
    }
}

/// Toolpath defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolpathSettings {
    /// Height for safe travel between cuts
    pub safe_z: f64,
    /// Stock thickness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Cut through the stock
    pub cut_through: bool,
}

impl Default for ToolpathSettings {
    fn default() -> Self {
        Self {
            safe_z: DEFAULT_SAFE_Z,
            thickness: None,
            cut_through: false,
        }
    }
}

/// Pointer interaction tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Hit radius around the crosshair, in pixels
    pub hit_radius: f64,
    /// Horizontal margin subtracted from the container width on resize
    pub container_margin: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_radius: DEFAULT_HIT_RADIUS,
            container_margin: CONTAINER_MARGIN,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Panel dimensions
    pub panel: PanelSettings,
    /// Toolpath defaults
    pub toolpath: ToolpathSettings,
    /// Interaction tuning
    pub interaction: InteractionSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config.normalized())
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Reject values no fallback can repair.
    pub fn validate(&self) -> SettingsResult<()> {
        let interaction = &self.interaction;
        if interaction.hit_radius.is_nan() || interaction.hit_radius < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "interaction.hit_radius".to_string(),
                reason: "must be >= 0".to_string(),
            });
        }
        if interaction.container_margin.is_nan() || interaction.container_margin < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "interaction.container_margin".to_string(),
                reason: "must be >= 0".to_string(),
            });
        }
        Ok(())
    }

    /// Replace zero or non-finite panel dimensions and safe height with defaults.
    pub fn normalized(mut self) -> Self {
        let defaults = Config::default();

        if !usable(self.panel.width) {
            tracing::debug!("panel.width {} replaced by default", self.panel.width);
            self.panel.width = defaults.panel.width;
        }
        if !usable(self.panel.height) {
            tracing::debug!("panel.height {} replaced by default", self.panel.height);
            self.panel.height = defaults.panel.height;
        }
        if !usable(self.toolpath.safe_z) {
            tracing::debug!("toolpath.safe_z {} replaced by default", self.toolpath.safe_z);
            self.toolpath.safe_z = defaults.toolpath.safe_z;
        }
        self
    }

    /// Panel described by this configuration
    pub fn panel(&self) -> Panel {
        Panel::new(self.panel.width, self.panel.height)
    }
}

fn usable(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Platform config file location, e.g. `~/.config/ripperkit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("ripperkit").join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })
}
