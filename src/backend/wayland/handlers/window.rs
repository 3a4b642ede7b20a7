// Responds to xdg window configure/close events. The window is pinned to the
// canvas preset via min/max size, so configures only gate the first render.
use log::{debug, info};
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested by compositor");
        self.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // Min and max size pin the window to the canvas preset; suggested
        // sizes that differ are informational only.
        if let (Some(width), Some(height)) = configure.new_size {
            debug!("Window configured: suggested size {}x{}", width, height);
        } else {
            debug!("Window configured: no suggested size");
        }

        self.surface.set_configured(true);
        self.needs_redraw = true;
    }
}
