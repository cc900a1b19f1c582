//! Utility functions for color parsing and identifier generation.

use crate::canvas::color::{BLACK, BLUE, Color, GREEN, RED, WHITE};
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Generates a fresh identifier for a canvas object or guide line.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses `#RRGGBB` or `#RGB` hex notation.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::from_rgb8(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Some(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Parses a color given either by name or as a hex string.
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    if spec.starts_with('#') {
        hex_to_color(spec)
    } else {
        name_to_color(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_hex_forms() {
        assert_eq!(hex_to_color("#fff"), Some(WHITE));
        assert_eq!(hex_to_color("#FF0000"), Some(RED));
        assert_eq!(hex_to_color("#12345"), None);
        assert_eq!(hex_to_color("#zzzzzz"), None);
        assert_eq!(hex_to_color("FF0000"), None);
    }

    #[test]
    fn parse_color_accepts_names_case_insensitively() {
        assert_eq!(parse_color(" Red "), Some(RED));
        assert_eq!(parse_color("mauve"), None);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }
}
