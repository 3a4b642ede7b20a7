//! The raster drawing surface (Cairo-backed) and its orientation presets.

use anyhow::{Context as _, Result};
use cairo::{Context, Format, ImageSurface};
use log::debug;

use super::color::Color;
use super::shape::ShapeOutline;

/// Canvas orientation. Exactly two fixed pixel presets exist; no other size
/// is reachable through the exposed controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 900x550 pixels (the default)
    Landscape,
    /// 300x900 pixels
    Portrait,
}

impl Orientation {
    /// Pixel dimensions `(width, height)` of this preset.
    pub fn dimensions(self) -> (i32, i32) {
        match self {
            Orientation::Landscape => (900, 550),
            Orientation::Portrait => (300, 900),
        }
    }

    /// The other preset.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Landscape => Orientation::Portrait,
            Orientation::Portrait => Orientation::Landscape,
        }
    }
}

/// Narrow drawing interface consumed by the pointer session.
///
/// Keeping the session generic over this trait lets the state machine be
/// tested against an in-memory recording surface instead of a Cairo backend.
pub trait DrawSurface {
    /// Background color of the surface (the eraser draws with this).
    fn background(&self) -> Color;

    /// Strokes a single line segment from `(x1, y1)` to `(x2, y2)`.
    fn draw_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64);

    /// Strokes a committed shape outline.
    fn stroke_shape(&mut self, outline: &ShapeOutline, color: Color, width: f64);
}

/// The addressable raster buffer holding all rendered pixels.
///
/// Everything drawn is immediately rasterized into the backing
/// [`ImageSurface`]; there is no retained list of strokes and no undo. All
/// operations are synchronous and visible as soon as they return.
pub struct Canvas {
    surface: ImageSurface,
    orientation: Orientation,
    background: Color,
}

impl Canvas {
    /// Creates a blank canvas at the given orientation preset.
    pub fn new(orientation: Orientation, background: Color) -> Result<Self> {
        let (width, height) = orientation.dimensions();
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .context("Failed to create canvas surface")?;

        let mut canvas = Self {
            surface,
            orientation,
            background,
        };
        canvas.clear();
        Ok(canvas)
    }

    /// Current width in pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Current height in pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Active orientation preset.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn context(&self) -> Option<Context> {
        // Drawing ops have no failure path; a surface in an error state just
        // stops accepting strokes.
        Context::new(&self.surface).ok()
    }

    /// Resets the entire surface to the background color, discarding all
    /// drawing irreversibly.
    pub fn clear(&mut self) {
        if let Some(ctx) = self.context() {
            let bg = self.background;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
            let _ = ctx.paint();
        }
    }

    /// Paints a decoded image scaled to exactly fill the surface (aspect
    /// ratio is not preserved), overwriting everything beneath it.
    ///
    /// An empty image is skipped; there is no error path.
    pub fn paint_image(&mut self, img: &image::RgbaImage) {
        let (src_w, src_h) = (img.width() as i32, img.height() as i32);
        if src_w == 0 || src_h == 0 {
            debug!("Skipping empty image");
            return;
        }

        let Ok(stride) = Format::ARgb32.stride_for_width(src_w as u32) else {
            return;
        };

        // Cairo wants premultiplied ARGB32 in native byte order.
        let mut data = vec![0u8; (stride * src_h) as usize];
        for (y, row) in img.rows().enumerate() {
            let base = y * stride as usize;
            for (x, pixel) in row.enumerate() {
                let [r, g, b, a] = pixel.0;
                let premul = |c: u8| (c as u32 * a as u32 / 255) as u32;
                let argb: u32 =
                    ((a as u32) << 24) | (premul(r) << 16) | (premul(g) << 8) | premul(b);
                let offset = base + x * 4;
                data[offset..offset + 4].copy_from_slice(&argb.to_ne_bytes());
            }
        }

        let Ok(source) = ImageSurface::create_for_data(data, Format::ARgb32, src_w, src_h, stride)
        else {
            return;
        };

        if let Some(ctx) = self.context() {
            let _ = ctx.save();
            ctx.scale(
                self.width() as f64 / src_w as f64,
                self.height() as f64 / src_h as f64,
            );
            // Pad extension keeps edge pixels from blending with the
            // transparent area outside the source when upscaling.
            let pattern = cairo::SurfacePattern::create(&source);
            pattern.set_extend(cairo::Extend::Pad);
            let _ = ctx.set_source(&pattern);
            let _ = ctx.paint();
            let _ = ctx.restore();
        }
    }

    /// Captures the current raster content as an opaque snapshot.
    pub fn snapshot(&self) -> Result<ImageSurface> {
        let copy = ImageSurface::create(Format::ARgb32, self.width(), self.height())
            .context("Failed to create snapshot surface")?;
        let ctx = Context::new(&copy).context("Failed to create snapshot context")?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(&self.surface, 0.0, 0.0)
            .context("Failed to source canvas for snapshot")?;
        ctx.paint().context("Failed to copy canvas snapshot")?;
        Ok(copy)
    }

    /// Writes a snapshot back at origin (0,0) without scaling.
    ///
    /// Content outside the current bounds is clipped; area the snapshot does
    /// not cover keeps whatever the surface already holds.
    pub fn restore_at_origin(&mut self, snapshot: &ImageSurface) {
        if let Some(ctx) = self.context() {
            let _ = ctx.set_source_surface(snapshot, 0.0, 0.0);
            let _ = ctx.paint();
        }
    }

    /// Switches to the other orientation preset, preserving raster content
    /// at origin.
    ///
    /// The two presets have different areas, so this is lossy: content
    /// outside the new bounds is clipped and newly exposed area is filled
    /// with the background. Toggling twice does not recover clipped regions.
    pub fn toggle_orientation(&mut self) -> Result<()> {
        let snapshot = self.snapshot()?;

        self.orientation = self.orientation.toggled();
        let (width, height) = self.orientation.dimensions();
        debug!("Canvas resized to {}x{}", width, height);

        self.surface = ImageSurface::create(Format::ARgb32, width, height)
            .context("Failed to create resized canvas surface")?;
        self.clear();
        self.restore_at_origin(&snapshot);
        Ok(())
    }

    /// Blits the canvas content onto a backend drawing context at origin.
    pub fn blit_onto(&self, ctx: &Context) {
        let _ = ctx.save();
        ctx.set_operator(cairo::Operator::Source);
        let _ = ctx.set_source_surface(&self.surface, 0.0, 0.0);
        let _ = ctx.paint();
        let _ = ctx.restore();
    }

    /// Reads back a single pixel as `[r, g, b, a]`.
    ///
    /// Returns `None` outside the surface bounds. Intended for inspection and
    /// tests; per-pixel readback is not on the drawing path.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let argb = u32::from_ne_bytes(data[offset..offset + 4].try_into().ok()?);

        let a = (argb >> 24) as u8;
        let r = (argb >> 16) as u8;
        let g = (argb >> 8) as u8;
        let b = argb as u8;
        Some([r, g, b, a])
    }
}

impl DrawSurface for Canvas {
    fn background(&self) -> Color {
        self.background
    }

    fn draw_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
        if let Some(ctx) = self.context() {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.set_line_width(width);
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);

            ctx.move_to(x1, y1);
            ctx.line_to(x2, y2);
            let _ = ctx.stroke();
        }
    }

    fn stroke_shape(&mut self, outline: &ShapeOutline, color: Color, width: f64) {
        if let Some(ctx) = self.context() {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.set_line_width(width);

            match *outline {
                ShapeOutline::Rect { x, y, w, h } => {
                    // Cairo's rectangle path accepts negative dimensions, so
                    // drags up/left of the origin need no normalization here.
                    ctx.set_line_join(cairo::LineJoin::Miter);
                    ctx.rectangle(x, y, w, h);
                }
                ShapeOutline::Circle { cx, cy, radius } => {
                    ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
                }
                ShapeOutline::Line { x1, y1, x2, y2 } => {
                    ctx.set_line_cap(cairo::LineCap::Round);
                    ctx.move_to(x1, y1);
                    ctx.line_to(x2, y2);
                }
            }
            let _ = ctx.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    const BG_PIXEL: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

    fn white_canvas(orientation: Orientation) -> Canvas {
        Canvas::new(orientation, WHITE).unwrap()
    }

    #[test]
    fn new_canvas_matches_preset_dimensions() {
        let landscape = white_canvas(Orientation::Landscape);
        assert_eq!((landscape.width(), landscape.height()), (900, 550));

        let portrait = white_canvas(Orientation::Portrait);
        assert_eq!((portrait.width(), portrait.height()), (300, 900));
    }

    #[test]
    fn clear_discards_all_drawing() {
        let mut canvas = white_canvas(Orientation::Landscape);
        canvas.draw_segment(10.0, 100.0, 200.0, 100.0, BLACK, 8.0);
        assert_ne!(canvas.pixel(100, 100).unwrap(), BG_PIXEL);

        canvas.clear();
        assert_eq!(canvas.pixel(100, 100).unwrap(), BG_PIXEL);
    }

    #[test]
    fn eraser_colored_stroke_is_indistinguishable_from_background() {
        let mut canvas = white_canvas(Orientation::Landscape);
        canvas.draw_segment(10.0, 100.0, 200.0, 100.0, BLACK, 8.0);

        // Erasing draws the background color over the mark.
        let bg = canvas.background();
        canvas.draw_segment(10.0, 100.0, 200.0, 100.0, bg, 12.0);
        assert_eq!(canvas.pixel(100, 100).unwrap(), BG_PIXEL);
    }

    #[test]
    fn stroked_rect_outline_leaves_interior_untouched() {
        let mut canvas = white_canvas(Orientation::Landscape);
        canvas.stroke_shape(
            &ShapeOutline::Rect {
                x: 50.0,
                y: 50.0,
                w: 100.0,
                h: 70.0,
            },
            BLACK,
            4.0,
        );

        // On the top edge: painted. In the middle: still background.
        assert_ne!(canvas.pixel(100, 50).unwrap(), BG_PIXEL);
        assert_eq!(canvas.pixel(100, 85).unwrap(), BG_PIXEL);
    }

    #[test]
    fn negative_rect_dimensions_stroke_the_same_outline() {
        let mut canvas = white_canvas(Orientation::Landscape);
        canvas.stroke_shape(
            &ShapeOutline::Rect {
                x: 150.0,
                y: 120.0,
                w: -100.0,
                h: -70.0,
            },
            BLACK,
            4.0,
        );

        assert_ne!(canvas.pixel(100, 50).unwrap(), BG_PIXEL);
        assert_eq!(canvas.pixel(100, 85).unwrap(), BG_PIXEL);
    }

    #[test]
    fn orientation_round_trip_preserves_overlap_and_clips_the_rest() {
        let mut canvas = white_canvas(Orientation::Landscape);

        // One mark inside the 300x550 overlap region, one outside it.
        canvas.draw_segment(40.0, 40.0, 60.0, 40.0, BLACK, 10.0);
        canvas.draw_segment(700.0, 40.0, 720.0, 40.0, BLACK, 10.0);

        canvas.toggle_orientation().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (300, 900));

        canvas.toggle_orientation().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (900, 550));

        // Overlap content survives the round trip; clipped content is gone.
        assert_ne!(canvas.pixel(50, 40).unwrap(), BG_PIXEL);
        assert_eq!(canvas.pixel(710, 40).unwrap(), BG_PIXEL);
    }

    #[test]
    fn toggle_fills_newly_exposed_area_with_background() {
        let mut canvas = white_canvas(Orientation::Portrait);
        canvas.toggle_orientation().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (900, 550));
        assert_eq!(canvas.pixel(800, 500).unwrap(), BG_PIXEL);
    }

    #[test]
    fn paint_image_scales_to_fill_entire_surface() {
        let mut canvas = white_canvas(Orientation::Landscape);

        // 2x1 source: left half red, right half blue, stretched over 900x550.
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 255, 255]));
        canvas.paint_image(&img);

        assert_eq!(canvas.pixel(100, 300).unwrap(), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(800, 300).unwrap(), [0, 0, 255, 255]);
    }
}
