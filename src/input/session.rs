//! Pointer drag session state machine.
//!
//! Tracks one pointer gesture at a time: a freehand path streams segments
//! into the surface as the pointer moves, a shape drag touches nothing until
//! release and then commits a single outline. The session is generic over
//! [`DrawSurface`] so the machine can be tested against a recording fake.

use log::debug;

use crate::draw::{Color, DrawSurface, ShapeOutline, ShapeTool};

use super::style::Style;

/// The gesture in progress, if any.
///
/// Created on pointer-down, consumed on pointer-up or pointer-leave. The
/// shape tool is captured at the press so changing the selection mid-drag
/// cannot change what the gesture commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// No button held; motion draws nothing.
    Idle,
    /// Freehand path in progress; `(last_x, last_y)` is where the next
    /// segment starts.
    Freehand { last_x: f64, last_y: f64 },
    /// Shape drag in progress, anchored at the press point.
    Shape {
        tool: ShapeTool,
        start_x: f64,
        start_y: f64,
    },
}

/// Translates pointer down/move/up/leave into drawing operations.
#[derive(Debug)]
pub struct PointerSession {
    state: SessionState,
}

impl PointerSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.state != SessionState::Idle
    }

    fn stroke_color<S: DrawSurface>(surface: &S, style: &Style) -> Color {
        if style.is_erasing() {
            surface.background()
        } else {
            style.color()
        }
    }

    /// Begins a gesture at `(x, y)`. A press while a gesture is already in
    /// progress is ignored.
    pub fn on_pointer_down(&mut self, style: &Style, x: f64, y: f64) {
        if self.is_active() {
            return;
        }

        self.state = match style.shape() {
            Some(tool) => {
                debug!("Shape drag started: {:?} at ({:.1}, {:.1})", tool, x, y);
                SessionState::Shape {
                    tool,
                    start_x: x,
                    start_y: y,
                }
            }
            None => SessionState::Freehand {
                last_x: x,
                last_y: y,
            },
        };
    }

    /// Handles pointer motion to `(x, y)`.
    ///
    /// Extends a freehand path by one segment; during a shape drag this is
    /// an explicit no-op (nothing reaches the surface before release).
    pub fn on_pointer_move<S: DrawSurface>(&mut self, surface: &mut S, style: &Style, x: f64, y: f64) {
        match self.state {
            SessionState::Freehand { last_x, last_y } => {
                let color = Self::stroke_color(surface, style);
                surface.draw_segment(last_x, last_y, x, y, color, style.brush_size());
                self.state = SessionState::Freehand {
                    last_x: x,
                    last_y: y,
                };
            }
            SessionState::Shape { .. } | SessionState::Idle => {}
        }
    }

    /// Ends the gesture at `(x, y)`.
    ///
    /// A freehand path simply stops (every segment is already on the
    /// surface); a shape drag commits its outline in the current color.
    pub fn on_pointer_up<S: DrawSurface>(&mut self, surface: &mut S, style: &Style, x: f64, y: f64) {
        match self.state {
            SessionState::Shape {
                tool,
                start_x,
                start_y,
            } => {
                let outline = ShapeOutline::from_drag(tool, start_x, start_y, x, y);
                debug!("Shape committed: {:?}", outline);
                surface.stroke_shape(&outline, style.color(), style.brush_size());
            }
            SessionState::Freehand { .. } | SessionState::Idle => {}
        }
        self.state = SessionState::Idle;
    }

    /// Handles the pointer leaving the surface mid-gesture.
    ///
    /// A shape drag is abandoned without committing; a freehand path just
    /// stops, keeping everything already drawn. Re-entering does not resume
    /// the gesture.
    pub fn on_pointer_leave(&mut self) {
        if let SessionState::Shape { tool, .. } = self.state {
            debug!("Shape drag abandoned: {:?}", tool);
        }
        self.state = SessionState::Idle;
    }
}

impl Default for PointerSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, WHITE};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Segment {
            x1: f64,
            y1: f64,
            x2: f64,
            y2: f64,
            color: Color,
            width: f64,
        },
        Shape {
            outline: ShapeOutline,
            color: Color,
            width: f64,
        },
    }

    /// Records every drawing call instead of rasterizing.
    struct FakeSurface {
        background: Color,
        ops: Vec<Op>,
    }

    impl FakeSurface {
        fn new() -> Self {
            Self {
                background: WHITE,
                ops: Vec::new(),
            }
        }
    }

    impl DrawSurface for FakeSurface {
        fn background(&self) -> Color {
            self.background
        }

        fn draw_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
            self.ops.push(Op::Segment {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            });
        }

        fn stroke_shape(&mut self, outline: &ShapeOutline, color: Color, width: f64) {
            self.ops.push(Op::Shape {
                outline: *outline,
                color,
                width,
            });
        }
    }

    #[test]
    fn freehand_path_segments_are_contiguous() {
        let mut surface = FakeSurface::new();
        let style = Style::default();
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 10.0, 10.0);
        session.on_pointer_move(&mut surface, &style, 20.0, 15.0);
        session.on_pointer_move(&mut surface, &style, 30.0, 30.0);
        session.on_pointer_up(&mut surface, &style, 30.0, 30.0);

        assert_eq!(
            surface.ops,
            vec![
                Op::Segment {
                    x1: 10.0,
                    y1: 10.0,
                    x2: 20.0,
                    y2: 15.0,
                    color: BLACK,
                    width: style.brush_size(),
                },
                Op::Segment {
                    x1: 20.0,
                    y1: 15.0,
                    x2: 30.0,
                    y2: 30.0,
                    color: BLACK,
                    width: style.brush_size(),
                },
            ]
        );
        assert!(!session.is_active());
    }

    #[test]
    fn motion_without_press_draws_nothing() {
        let mut surface = FakeSurface::new();
        let style = Style::default();
        let mut session = PointerSession::new();

        session.on_pointer_move(&mut surface, &style, 50.0, 50.0);
        session.on_pointer_up(&mut surface, &style, 60.0, 60.0);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn shape_drag_touches_nothing_until_release() {
        let mut surface = FakeSurface::new();
        let mut style = Style::default();
        style.set_shape(ShapeTool::Rect);
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 50.0, 50.0);
        session.on_pointer_move(&mut surface, &style, 90.0, 80.0);
        session.on_pointer_move(&mut surface, &style, 140.0, 110.0);
        assert!(surface.ops.is_empty());

        session.on_pointer_up(&mut surface, &style, 150.0, 120.0);
        assert_eq!(surface.ops.len(), 1);
    }

    #[test]
    fn rect_commit_spans_press_to_release() {
        let mut surface = FakeSurface::new();
        let mut style = Style::default();
        style.set_shape(ShapeTool::Rect);
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 50.0, 50.0);
        session.on_pointer_up(&mut surface, &style, 150.0, 120.0);

        assert_eq!(
            surface.ops,
            vec![Op::Shape {
                outline: ShapeOutline::Rect {
                    x: 50.0,
                    y: 50.0,
                    w: 100.0,
                    h: 70.0,
                },
                color: BLACK,
                width: style.brush_size(),
            }]
        );
    }

    #[test]
    fn circle_commit_radius_is_distance_to_release() {
        let mut surface = FakeSurface::new();
        let mut style = Style::default();
        style.set_shape(ShapeTool::Circle);
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 100.0, 100.0);
        session.on_pointer_up(&mut surface, &style, 100.0, 150.0);

        assert_eq!(
            surface.ops,
            vec![Op::Shape {
                outline: ShapeOutline::Circle {
                    cx: 100.0,
                    cy: 100.0,
                    radius: 50.0,
                },
                color: BLACK,
                width: style.brush_size(),
            }]
        );
    }

    #[test]
    fn eraser_segments_use_the_background_color() {
        let mut surface = FakeSurface::new();
        let mut style = Style::default();
        style.set_color(RED);
        style.set_eraser();
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 10.0, 10.0);
        session.on_pointer_move(&mut surface, &style, 40.0, 10.0);
        session.on_pointer_up(&mut surface, &style, 40.0, 10.0);

        match surface.ops.as_slice() {
            [Op::Segment { color, .. }] => assert_eq!(*color, WHITE),
            other => panic!("unexpected ops: {:?}", other),
        }
    }

    #[test]
    fn leave_abandons_shape_without_commit() {
        let mut surface = FakeSurface::new();
        let mut style = Style::default();
        style.set_shape(ShapeTool::Line);
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 10.0, 10.0);
        session.on_pointer_leave();
        assert!(surface.ops.is_empty());
        assert!(!session.is_active());

        // Re-entering does not resume the drag.
        session.on_pointer_move(&mut surface, &style, 80.0, 80.0);
        session.on_pointer_up(&mut surface, &style, 90.0, 90.0);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn leave_stops_freehand_but_keeps_drawn_segments() {
        let mut surface = FakeSurface::new();
        let style = Style::default();
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 10.0, 10.0);
        session.on_pointer_move(&mut surface, &style, 30.0, 10.0);
        session.on_pointer_leave();

        assert_eq!(surface.ops.len(), 1);
        assert!(!session.is_active());

        session.on_pointer_move(&mut surface, &style, 60.0, 10.0);
        assert_eq!(surface.ops.len(), 1);
    }

    #[test]
    fn press_during_active_gesture_is_ignored() {
        let mut surface = FakeSurface::new();
        let style = Style::default();
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 10.0, 10.0);
        session.on_pointer_down(&style, 99.0, 99.0);
        session.on_pointer_move(&mut surface, &style, 20.0, 10.0);

        // The path continues from the original press point.
        match surface.ops.as_slice() {
            [Op::Segment { x1, y1, .. }] => {
                assert_eq!((*x1, *y1), (10.0, 10.0));
            }
            other => panic!("unexpected ops: {:?}", other),
        }
    }

    #[test]
    fn shape_tool_is_captured_at_press() {
        let mut surface = FakeSurface::new();
        let mut style = Style::default();
        style.set_shape(ShapeTool::Rect);
        let mut session = PointerSession::new();

        session.on_pointer_down(&style, 0.0, 0.0);

        // Switching tools mid-drag does not change what gets committed.
        style.set_shape(ShapeTool::Circle);
        session.on_pointer_up(&mut surface, &style, 10.0, 10.0);

        match surface.ops.as_slice() {
            [Op::Shape { outline, .. }] => {
                assert!(matches!(outline, ShapeOutline::Rect { .. }));
            }
            other => panic!("unexpected ops: {:?}", other),
        }
    }
}
