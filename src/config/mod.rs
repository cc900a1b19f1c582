//! Configuration file support for artboard-ruler.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/artboard-ruler/config.toml`. Settings include the ruler color
//! scheme, label fonts, guide line colors, and where guide lines are stored.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StorageMode};
pub use types::{ColorConfig, RulerConfig, StorageConfig};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "artboard-ruler";

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [ruler]
/// color_scheme = "dark"
/// font_family = "Inter"
/// label_font_size = 10.0
///
/// [colors]
/// guide_line = "#F97066"
/// guide_active = "red"
///
/// [storage]
/// storage = "custom"
/// custom_directory = "~/artboards"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Ruler appearance
    #[serde(default)]
    pub ruler: RulerConfig,

    /// Guide line colors
    #[serde(default)]
    pub colors: ColorConfig,

    /// Guide line storage location
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `label_font_size`: 6.0 - 24.0
    /// - `marker_font_size`: 6.0 - 32.0
    fn validate_and_clamp(&mut self) {
        if !(6.0..=24.0).contains(&self.ruler.label_font_size) {
            log::warn!(
                "Invalid label_font_size {:.1}, clamping to 6.0-24.0 range",
                self.ruler.label_font_size
            );
            self.ruler.label_font_size = if self.ruler.label_font_size.is_nan() {
                10.0
            } else {
                self.ruler.label_font_size.clamp(6.0, 24.0)
            };
        }

        if !(6.0..=32.0).contains(&self.ruler.marker_font_size) {
            log::warn!(
                "Invalid marker_font_size {:.1}, clamping to 6.0-32.0 range",
                self.ruler.marker_font_size
            );
            self.ruler.marker_font_size = if self.ruler.marker_font_size.is_nan() {
                12.0
            } else {
                self.ruler.marker_font_size.clamp(6.0, 32.0)
            };
        }

        if self.ruler.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Inter'");
            self.ruler.font_family = "Inter".to_string();
        }
    }

    /// Returns the directory holding the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not find config directory")?
            .join(APP_DIR))
    }

    /// Returns the path to the configuration file.
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Resolves the guide line storage directory.
    ///
    /// `config_dir` is used for `storage = "config"` and as the fallback when
    /// no platform data directory exists.
    pub fn storage_dir(&self, config_dir: &Path) -> Result<PathBuf> {
        match self.storage.storage {
            StorageMode::Auto => {
                let root = dirs::data_dir().unwrap_or_else(|| config_dir.to_path_buf());
                Ok(root.join(APP_DIR))
            }
            StorageMode::Config => Ok(config_dir.to_path_buf()),
            StorageMode::Custom => {
                let raw = self.storage.custom_directory.as_ref().ok_or_else(|| {
                    anyhow!("storage.custom_directory must be set when storage = \"custom\"")
                })?;
                let expanded = expand_tilde(raw);
                if expanded.as_os_str().is_empty() {
                    return Err(anyhow!(
                        "storage.custom_directory resolved to an empty path"
                    ));
                }
                Ok(expanded)
            }
        }
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruler::ColorScheme;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.ruler.color_scheme, ColorScheme::Light);
        assert_eq!(config.ruler.font_family, "Inter");
        assert_eq!(config.storage.storage, StorageMode::Auto);
    }

    #[test]
    fn font_sizes_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [ruler]
            color_scheme = "dark"
            label_font_size = 2.0
            marker_font_size = 90.0
            "#,
        )
        .unwrap();
        assert_eq!(config.ruler.color_scheme, ColorScheme::Dark);
        assert_eq!(config.ruler.label_font_size, 6.0);
        assert_eq!(config.ruler.marker_font_size, 32.0);
    }

    #[test]
    fn colors_accept_names_hex_and_arrays() {
        let config = Config::from_toml_str(
            r##"
            [colors]
            guide_line = [1, 2, 3]
            guide_active = "#00FF00"
            "##,
        )
        .unwrap();
        assert_eq!(config.colors.guide_line, ColorSpec::Rgb([1, 2, 3]));
        assert_eq!(
            config.colors.guide_active,
            ColorSpec::Name("#00FF00".to_string())
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[ruler\ncolor_scheme = 1").is_err());
    }

    #[test]
    fn custom_storage_requires_directory() {
        let mut config = Config::default();
        config.storage.storage = StorageMode::Custom;
        let temp = tempfile::tempdir().unwrap();
        assert!(config.storage_dir(temp.path()).is_err());

        config.storage.custom_directory = Some(temp.path().join("guides").display().to_string());
        assert_eq!(
            config.storage_dir(temp.path()).unwrap(),
            temp.path().join("guides")
        );
    }

    #[test]
    fn config_storage_uses_config_dir() {
        let mut config = Config::default();
        config.storage.storage = StorageMode::Config;
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(config.storage_dir(temp.path()).unwrap(), temp.path());
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.ruler.marker_font_size, 12.0);
    }
}
