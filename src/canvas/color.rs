//! RGBA color type and the ruler palette.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use artboard_ruler::canvas::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red.to_hex(), "#FF0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 - 1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Formats the color as `#RRGGBB`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

// ============================================================================
// Named colors
// ============================================================================

pub const RED: Color = Color::from_rgb8(255, 0, 0);
pub const GREEN: Color = Color::from_rgb8(0, 255, 0);
pub const BLUE: Color = Color::from_rgb8(0, 0, 255);
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);

// ============================================================================
// Ruler palette
// ============================================================================

/// Light scheme ruler background.
pub const LIGHT_BACKGROUND: Color = WHITE;
/// Light scheme tick and label color (#98A2B3).
pub const LIGHT_TEXT_STROKE: Color = Color::from_rgb8(0x98, 0xA2, 0xB3);
/// Light scheme bar outline (#D0D5DD).
pub const LIGHT_RULER_BORDER: Color = Color::from_rgb8(0xD0, 0xD5, 0xDD);

/// Dark scheme ruler background (#1A1B1E).
pub const DARK_BACKGROUND: Color = Color::from_rgb8(0x1A, 0x1B, 0x1E);
/// Dark scheme tick, label and outline color (#5C5F66).
pub const DARK_TEXT_STROKE: Color = Color::from_rgb8(0x5C, 0x5F, 0x66);

/// Resting guide line stroke (#F97066).
pub const GUIDE_DEFAULT: Color = Color::from_rgb8(0xF9, 0x70, 0x66);
/// Move marker text (#F04438).
pub const GUIDE_FOCUSED: Color = Color::from_rgb8(0xF0, 0x44, 0x38);
/// Stroke applied to a guide line once it loses selection (#D92D20).
pub const GUIDE_DESELECTED: Color = Color::from_rgb8(0xD9, 0x2D, 0x20);
