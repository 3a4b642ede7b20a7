//! RGBA color type and the fixed palette swatches.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use squiggles::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
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
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Palette Swatches (the fixed 11-entry toolbar palette)
// ============================================================================

/// Swatch 1: red (#F44336)
pub const RED: Color = Color::from_rgb8(0xF4, 0x43, 0x36);

/// Swatch 2: orange (#FF9800)
pub const ORANGE: Color = Color::from_rgb8(0xFF, 0x98, 0x00);

/// Swatch 3: yellow (#FFEB3B)
pub const YELLOW: Color = Color::from_rgb8(0xFF, 0xEB, 0x3B);

/// Swatch 4: green (#4CAF50)
pub const GREEN: Color = Color::from_rgb8(0x4C, 0xAF, 0x50);

/// Swatch 5: blue (#03A9F4)
pub const BLUE: Color = Color::from_rgb8(0x03, 0xA9, 0xF4);

/// Swatch 6: purple (#673AB7)
pub const PURPLE: Color = Color::from_rgb8(0x67, 0x3A, 0xB7);

/// Swatch 7: magenta (#E040FB)
pub const MAGENTA: Color = Color::from_rgb8(0xE0, 0x40, 0xFB);

/// Swatch 8: black (#000000) - the default pen color
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Swatch 9: pink (#F8BBD0)
pub const PINK: Color = Color::from_rgb8(0xF8, 0xBB, 0xD0);

/// Swatch 10: tan (#BCAAA4)
pub const TAN: Color = Color::from_rgb8(0xBC, 0xAA, 0xA4);

/// Swatch 11: grey (#B0BEC5)
pub const GREY: Color = Color::from_rgb8(0xB0, 0xBE, 0xC5);

/// White - the default canvas background (and therefore the eraser color)
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// The fixed toolbar palette, in display order.
pub const PALETTE: [Color; 11] = [
    RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE, MAGENTA, BLACK, PINK, TAN, GREY,
];
