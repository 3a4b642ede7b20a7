//! Shape tool selection and committed outline geometry.

/// Shape drawing tool selection.
///
/// When a shape tool is selected, dragging the pointer previews nothing and a
/// single outline is committed on release. With no shape selected the pointer
/// draws freehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTool {
    /// Axis-aligned rectangle outline - from corner to corner
    Rect,
    /// Circle outline - centered on the press point, radius to the release point
    Circle,
    /// Straight line - between press and release points
    Line,
}

/// A fully determined shape outline, ready to be stroked onto the surface.
///
/// Built from the drag origin and release point at pointer-up; never stored
/// beyond the commit (the canvas is immediately rasterized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeOutline {
    /// Rectangle anchored at the drag origin. Width and height are signed:
    /// releasing up/left of the origin produces negative dimensions, which
    /// the surface primitive must accept.
    Rect { x: f64, y: f64, w: f64, h: f64 },
    /// Circle centered on the drag origin.
    Circle { cx: f64, cy: f64, radius: f64 },
    /// Line segment from origin to release point.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl ShapeOutline {
    /// Computes the outline for a drag from `(x0, y0)` to `(x1, y1)` with the
    /// given tool.
    pub fn from_drag(tool: ShapeTool, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        match tool {
            ShapeTool::Rect => ShapeOutline::Rect {
                x: x0,
                y: y0,
                w: x1 - x0,
                h: y1 - y0,
            },
            ShapeTool::Circle => ShapeOutline::Circle {
                cx: x0,
                cy: y0,
                radius: (x1 - x0).hypot(y1 - y0),
            },
            ShapeTool::Line => ShapeOutline::Line { x1: x0, y1: y0, x2: x1, y2: y1 },
        }
    }

    /// Returns the axis-aligned bounding box `(x, y, w, h)` with normalized
    /// (non-negative) dimensions.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match *self {
            ShapeOutline::Rect { x, y, w, h } => {
                let (x, w) = if w >= 0.0 { (x, w) } else { (x + w, -w) };
                let (y, h) = if h >= 0.0 { (y, h) } else { (y + h, -h) };
                (x, y, w, h)
            }
            ShapeOutline::Circle { cx, cy, radius } => {
                (cx - radius, cy - radius, radius * 2.0, radius * 2.0)
            }
            ShapeOutline::Line { x1, y1, x2, y2 } => {
                let (x, w) = (x1.min(x2), (x2 - x1).abs());
                let (y, h) = (y1.min(y2), (y2 - y1).abs());
                (x, y, w, h)
            }
        }
    }
}
