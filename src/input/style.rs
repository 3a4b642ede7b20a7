//! Active tool and stroke style state.

use log::debug;

use crate::draw::{Color, ShapeTool};

/// Minimum brush stroke width in pixels.
pub const MIN_BRUSH_SIZE: f64 = 1.0;
/// Maximum brush stroke width in pixels.
pub const MAX_BRUSH_SIZE: f64 = 20.0;
/// Default brush stroke width in pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 8.0;

/// The currently selected drawing style: color, brush size, eraser and
/// shape selection.
///
/// The setters enforce the cross-field rules: picking a color drops both the
/// eraser and any shape selection, picking the eraser drops the shape
/// selection, and picking a shape leaves the color untouched. At most one of
/// eraser / shape is ever active, so there is no ambiguity about what a drag
/// does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    color: Color,
    brush_size: f64,
    erasing: bool,
    shape: Option<ShapeTool>,
}

impl Style {
    /// Creates a style with the given stroke color and brush size. The brush
    /// size is clamped to the valid range.
    pub fn new(color: Color, brush_size: f64) -> Self {
        Self {
            color,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            erasing: false,
            shape: None,
        }
    }

    /// Current stroke color. Meaningful even while erasing (it is restored
    /// when the eraser is deselected).
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current brush stroke width in pixels.
    pub fn brush_size(&self) -> f64 {
        self.brush_size
    }

    /// Whether the eraser is active.
    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// The selected shape tool, if any. `None` means freehand.
    pub fn shape(&self) -> Option<ShapeTool> {
        self.shape
    }

    /// Selects a stroke color, deselecting the eraser and any shape tool.
    pub fn set_color(&mut self, color: Color) {
        debug!("Color selected: {:?}", color);
        self.color = color;
        self.erasing = false;
        self.shape = None;
    }

    /// Sets the brush size, clamping to the valid range.
    pub fn set_brush_size(&mut self, size: f64) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        debug!("Brush size: {}", self.brush_size);
    }

    /// Steps the brush size by `delta` pixels, clamping to the valid range.
    pub fn adjust_brush_size(&mut self, delta: f64) {
        self.set_brush_size(self.brush_size + delta);
    }

    /// Selects the eraser, deselecting any shape tool.
    pub fn set_eraser(&mut self) {
        debug!("Eraser selected");
        self.erasing = true;
        self.shape = None;
    }

    /// Selects a shape tool. The stroke color is kept; the eraser is
    /// deselected (shapes always stroke in the current color).
    pub fn set_shape(&mut self, tool: ShapeTool) {
        debug!("Shape selected: {:?}", tool);
        self.shape = Some(tool);
        self.erasing = false;
    }

    /// Returns to the freehand pencil, deselecting eraser and shape.
    pub fn select_pencil(&mut self) {
        debug!("Pencil selected");
        self.erasing = false;
        self.shape = None;
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(crate::draw::BLACK, DEFAULT_BRUSH_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED};

    #[test]
    fn default_style_is_black_pencil() {
        let style = Style::default();
        assert_eq!(style.color(), BLACK);
        assert_eq!(style.brush_size(), DEFAULT_BRUSH_SIZE);
        assert!(!style.is_erasing());
        assert_eq!(style.shape(), None);
    }

    #[test]
    fn selecting_color_deselects_eraser_and_shape() {
        let mut style = Style::default();
        style.set_eraser();
        style.set_color(RED);
        assert!(!style.is_erasing());
        assert_eq!(style.color(), RED);

        style.set_shape(ShapeTool::Rect);
        style.set_color(BLACK);
        assert_eq!(style.shape(), None);
    }

    #[test]
    fn selecting_eraser_deselects_shape_but_keeps_color() {
        let mut style = Style::default();
        style.set_color(RED);
        style.set_shape(ShapeTool::Circle);
        style.set_eraser();
        assert!(style.is_erasing());
        assert_eq!(style.shape(), None);
        assert_eq!(style.color(), RED);
    }

    #[test]
    fn selecting_shape_deselects_eraser_and_keeps_color() {
        let mut style = Style::default();
        style.set_color(RED);
        style.set_eraser();
        style.set_shape(ShapeTool::Line);
        assert!(!style.is_erasing());
        assert_eq!(style.shape(), Some(ShapeTool::Line));
        assert_eq!(style.color(), RED);
    }

    #[test]
    fn pencil_clears_both_eraser_and_shape() {
        let mut style = Style::default();
        style.set_shape(ShapeTool::Rect);
        style.select_pencil();
        assert_eq!(style.shape(), None);

        style.set_eraser();
        style.select_pencil();
        assert!(!style.is_erasing());
    }

    #[test]
    fn brush_size_is_clamped_to_range() {
        let mut style = Style::default();
        style.set_brush_size(0.0);
        assert_eq!(style.brush_size(), MIN_BRUSH_SIZE);

        style.set_brush_size(100.0);
        assert_eq!(style.brush_size(), MAX_BRUSH_SIZE);

        style.set_brush_size(MAX_BRUSH_SIZE);
        style.adjust_brush_size(1.0);
        assert_eq!(style.brush_size(), MAX_BRUSH_SIZE);

        style.adjust_brush_size(-5.0);
        assert_eq!(style.brush_size(), 15.0);
    }
}
