//! Drawing primitives and the raster canvas (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the fixed palette swatches
//! - [`ShapeTool`] / [`ShapeOutline`]: shape selection and committed geometry
//! - [`Canvas`]: the raster surface all drawing is immediately rendered into
//! - [`DrawSurface`]: the narrow surface interface the input session draws
//!   through

pub mod canvas;
pub mod color;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, DrawSurface, Orientation};
pub use color::Color;
pub use shape::{ShapeOutline, ShapeTool};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{
    BLACK, BLUE, GREEN, GREY, MAGENTA, ORANGE, PALETTE, PINK, PURPLE, RED, TAN, WHITE, YELLOW,
};
