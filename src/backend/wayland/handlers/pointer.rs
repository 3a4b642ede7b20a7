// Feeds pointer events (motion/buttons/scroll) into the drag session to keep the canvas reactive.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    PointerEvent, PointerEventKind, PointerHandler, BTN_LEFT, BTN_MIDDLE, BTN_RIGHT,
};
use wayland_client::{protocol::wl_pointer, Connection, QueueHandle};

use crate::input::{controls, MouseButton};

use super::super::state::WaylandState;

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = event.position;
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({:.1}, {:.1})", x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    // Abandons an in-progress shape drag, merely stops a
                    // freehand path.
                    self.session.on_pointer_leave();
                }
                PointerEventKind::Motion { .. } => {
                    let was_active = self.session.is_active();
                    self.session
                        .on_pointer_move(&mut self.canvas, &self.style, x, y);
                    if was_active {
                        self.needs_redraw = true;
                    }
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({:.1}, {:.1})", button, x, y);

                    let mb = match button {
                        BTN_LEFT => MouseButton::Left,
                        BTN_MIDDLE => MouseButton::Middle,
                        BTN_RIGHT => MouseButton::Right,
                        _ => continue,
                    };

                    // Only the left button draws.
                    if mb == MouseButton::Left {
                        self.session.on_pointer_down(&self.style, x, y);
                    }
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);

                    let mb = match button {
                        BTN_LEFT => MouseButton::Left,
                        BTN_MIDDLE => MouseButton::Middle,
                        BTN_RIGHT => MouseButton::Right,
                        _ => continue,
                    };

                    if mb == MouseButton::Left {
                        self.session
                            .on_pointer_up(&mut self.canvas, &self.style, x, y);
                        self.needs_redraw = true;
                    }
                }
                PointerEventKind::Axis { vertical, .. } => {
                    let scroll_direction = if vertical.discrete != 0 {
                        vertical.discrete as f64
                    } else if vertical.absolute.abs() > 0.1 {
                        vertical.absolute
                    } else {
                        0.0
                    };

                    if let Some(action) = controls::action_for_scroll(scroll_direction) {
                        self.apply_action(action);
                        debug!("Brush size: {:.0}px", self.style.brush_size());
                    }
                }
            }
        }
    }
}
