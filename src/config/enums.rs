//! Configuration enum types.

use crate::draw::{color::*, Color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - a named palette color, a `#RRGGBB` hex string, or
/// RGB values.
///
/// # Examples
/// ```toml
/// # Named palette color
/// default_color = "red"
///
/// # Hex color
/// background = "#F8BBD0"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (any palette swatch name, or "white") or a `#RRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Hex strings and named colors are resolved via `util`; unknown names
    /// default to black with a warning. RGB arrays are converted from 0-255
    /// range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}
