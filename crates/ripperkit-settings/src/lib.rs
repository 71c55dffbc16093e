//! RipperKit Settings Crate
//!
//! Panel, toolpath and interaction defaults, loaded from and saved to JSON or
//! TOML files in the platform config directory.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, Config, InteractionSettings, PanelSettings, ToolpathSettings,
};
pub use error::{SettingsError, SettingsResult};
