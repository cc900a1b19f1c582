//! Configuration type definitions.

use super::enums::{ColorSpec, StorageMode};
use crate::ruler::ColorScheme;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ruler appearance settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RulerConfig {
    /// Decoration palette: "light" or "dark"
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Font family for tick labels and move markers
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Tick label size in device pixels (valid range: 6.0 - 24.0)
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,

    /// Move marker size in device pixels (valid range: 6.0 - 32.0)
    #[serde(default = "default_marker_font_size")]
    pub marker_font_size: f64,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            font_family: default_font_family(),
            label_font_size: default_label_font_size(),
            marker_font_size: default_marker_font_size(),
        }
    }
}

/// Guide line colors.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ColorConfig {
    /// Resting guide line stroke
    #[serde(default = "default_guide_line")]
    pub guide_line: ColorSpec,

    /// Stroke of the guide line the user pressed on
    #[serde(default = "default_guide_active")]
    pub guide_active: ColorSpec,

    /// Stroke applied once a guide line loses selection
    #[serde(default = "default_guide_deselected")]
    pub guide_deselected: ColorSpec,

    /// Coordinate readout shown while moving a guide line
    #[serde(default = "default_move_marker")]
    pub move_marker: ColorSpec,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            guide_line: default_guide_line(),
            guide_active: default_guide_active(),
            guide_deselected: default_guide_deselected(),
            move_marker: default_move_marker(),
        }
    }
}

/// Guide line storage location.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StorageConfig {
    /// "auto", "config", or "custom"
    #[serde(default = "default_storage_mode")]
    pub storage: StorageMode,

    /// Directory used when `storage = "custom"`; `~/` is expanded
    #[serde(default)]
    pub custom_directory: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage: default_storage_mode(),
            custom_directory: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_label_font_size() -> f64 {
    10.0
}

fn default_marker_font_size() -> f64 {
    12.0
}

fn default_guide_line() -> ColorSpec {
    ColorSpec::Name("#F97066".to_string())
}

fn default_guide_active() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_guide_deselected() -> ColorSpec {
    ColorSpec::Name("#D92D20".to_string())
}

fn default_move_marker() -> ColorSpec {
    ColorSpec::Name("#F04438".to_string())
}

fn default_storage_mode() -> StorageMode {
    StorageMode::Auto
}
