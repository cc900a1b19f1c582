//! Configuration enum types.

use crate::canvas::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the guide line store lives on disk.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StorageMode {
    /// Platform data directory (`~/.local/share/artboard-ruler` on Linux)
    Auto,
    /// Next to the configuration file
    Config,
    /// The directory given by `storage.custom_directory`
    Custom,
}

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// guide_active = "red"
///
/// # Hex string
/// guide_line = "#F97066"
///
/// # RGB array (0-255 per component)
/// move_marker = [240, 68, 56]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, white, black) or `#RRGGBB` / `#RGB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown names and malformed hex strings resolve to `fallback` with a
    /// warning.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, fallback.to_hex());
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
