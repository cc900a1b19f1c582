//! Color scheme and appearance settings for ruler decoration.

use crate::canvas::color::{self, Color};
use crate::config::{ColorConfig, RulerConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Editor color scheme. Only affects decoration colors, never geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Resolved appearance of the ruler overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerStyle {
    pub scheme: ColorScheme,
    pub font_family: String,
    /// Tick label size in device pixels
    pub label_font_size: f64,
    /// Move marker size in device pixels
    pub marker_font_size: f64,
    pub guide_line: Color,
    /// Stroke of a guide the user has just pressed on
    pub guide_active: Color,
    /// Stroke of a guide after it loses selection
    pub guide_deselected: Color,
    pub move_marker: Color,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Light,
            font_family: "Inter".to_string(),
            label_font_size: 10.0,
            marker_font_size: 12.0,
            guide_line: color::GUIDE_DEFAULT,
            guide_active: color::RED,
            guide_deselected: color::GUIDE_DESELECTED,
            move_marker: color::GUIDE_FOCUSED,
        }
    }
}

impl RulerStyle {
    /// Builds a style from the `[ruler]` and `[colors]` config sections.
    pub fn from_config(ruler: &RulerConfig, colors: &ColorConfig) -> Self {
        Self {
            scheme: ruler.color_scheme,
            font_family: ruler.font_family.clone(),
            label_font_size: ruler.label_font_size,
            marker_font_size: ruler.marker_font_size,
            guide_line: colors.guide_line.to_color(color::GUIDE_DEFAULT),
            guide_active: colors.guide_active.to_color(color::RED),
            guide_deselected: colors.guide_deselected.to_color(color::GUIDE_DESELECTED),
            move_marker: colors.move_marker.to_color(color::GUIDE_FOCUSED),
        }
    }

    /// Returns a copy using a different color scheme.
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Ruler bar fill.
    pub fn background(&self) -> Color {
        match self.scheme {
            ColorScheme::Light => color::LIGHT_BACKGROUND,
            ColorScheme::Dark => color::DARK_BACKGROUND,
        }
    }

    /// Tick and label color.
    pub fn text_stroke(&self) -> Color {
        match self.scheme {
            ColorScheme::Light => color::LIGHT_TEXT_STROKE,
            ColorScheme::Dark => color::DARK_TEXT_STROKE,
        }
    }

    /// Outline of the bars and the corner block.
    pub fn border(&self) -> Color {
        match self.scheme {
            ColorScheme::Light => color::LIGHT_RULER_BORDER,
            ColorScheme::Dark => color::DARK_TEXT_STROKE,
        }
    }
}
