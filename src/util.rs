//! Utility functions for color name and hex parsing.

use crate::draw::{color::*, Color};

// ============================================================================
// Color Parsing
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config
/// file. The names cover the 11 palette swatches plus white.
///
/// # Arguments
/// * `name` - Color name string (case-insensitive)
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "orange" => Some(ORANGE),
        "yellow" => Some(YELLOW),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "purple" => Some(PURPLE),
        "magenta" => Some(MAGENTA),
        "black" => Some(BLACK),
        "pink" => Some(PINK),
        "tan" => Some(TAN),
        "grey" | "gray" => Some(GREY),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Parses a `#RRGGBB` hex color string.
///
/// # Returns
/// - `Some(Color)` for a well-formed 6-digit hex string with leading `#`
/// - `None` otherwise
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

/// Parses a color given as either a name or a `#RRGGBB` hex string.
pub fn parse_color(spec: &str) -> Option<Color> {
    if spec.starts_with('#') {
        hex_to_color(spec)
    } else {
        name_to_color(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PALETTE;

    #[test]
    fn every_palette_swatch_has_a_name() {
        let names = [
            "red", "orange", "yellow", "green", "blue", "purple", "magenta", "black", "pink",
            "tan", "grey",
        ];
        assert_eq!(names.len(), PALETTE.len());
        for (name, swatch) in names.iter().zip(PALETTE.iter()) {
            assert_eq!(name_to_color(name).unwrap(), *swatch);
        }
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(name_to_color("RED").unwrap(), RED);
        assert_eq!(name_to_color("Gray").unwrap(), GREY);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn hex_parsing_accepts_well_formed_strings_only() {
        assert_eq!(hex_to_color("#F44336").unwrap(), RED);
        assert_eq!(hex_to_color("#ffffff").unwrap(), WHITE);
        assert!(hex_to_color("F44336").is_none());
        assert!(hex_to_color("#F443").is_none());
        assert!(hex_to_color("#GGGGGG").is_none());
    }

    #[test]
    fn parse_color_dispatches_on_leading_hash() {
        assert_eq!(parse_color("black").unwrap(), BLACK);
        assert_eq!(parse_color("#B0BEC5").unwrap(), GREY);
        assert!(parse_color("#nope").is_none());
    }
}
