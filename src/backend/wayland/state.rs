// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides rendering, control actions, and image loading used across them.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{xdg::XdgShell, WaylandSurface},
    shm::Shm,
};
use std::path::PathBuf;
use wayland_client::{protocol::wl_shm, QueueHandle};

use crate::{
    config::Config,
    draw::{Canvas, PALETTE},
    input::{ControlAction, PointerSession, Style},
    upload::ImageLoader,
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Drawing state
    pub(super) canvas: Canvas,
    pub(super) style: Style,
    pub(super) session: PointerSession,

    // Background image loading
    pub(super) loader: ImageLoader,
    pub(super) image_path: Option<PathBuf>,

    // Loop control
    pub(super) needs_redraw: bool,
    pub(super) should_exit: bool,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        canvas: Canvas,
        style: Style,
        image_path: Option<PathBuf>,
    ) -> Self {
        let mut surface = SurfaceState::new();
        surface.update_dimensions(canvas.width() as u32, canvas.height() as u32);

        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            surface,
            config,
            canvas,
            style,
            session: PointerSession::new(),
            loader: ImageLoader::new(),
            image_path,
            needs_redraw: true,
            should_exit: false,
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, buffer_bytes) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            let result = pool
                .create_buffer(
                    width as i32,
                    height as i32,
                    (width * 4) as i32,
                    wl_shm::Format::Argb8888,
                )
                .context("Failed to create buffer")?;
            debug!("Buffer acquired from pool");
            result
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `buffer_bytes` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel: alpha, red, green, blue)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are explicitly dropped before the buffer is committed to Wayland,
        //    ensuring Cairo doesn't access memory after ownership transfers
        // 5. No other references to this memory exist during Cairo's usage
        // 6. The buffer remains valid throughout Cairo's usage (enforced by Rust's borrow checker)
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                buffer_bytes.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // The canvas already holds every rasterized stroke; the frame is a
        // straight blit.
        self.canvas.blit_onto(&ctx);

        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        // Attach buffer and commit
        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        } else {
            debug!("Skipping frame callback (vsync disabled - allows back-to-back renders)");
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }

    /// Applies a decoded keyboard or scroll control action.
    pub(super) fn apply_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::SelectSwatch(index) => {
                if let Some(color) = PALETTE.get(index) {
                    self.style.set_color(*color);
                }
            }
            ControlAction::AdjustBrush(delta) => self.style.adjust_brush_size(delta),
            ControlAction::SelectEraser => self.style.set_eraser(),
            ControlAction::SelectPencil => self.style.select_pencil(),
            ControlAction::SelectShape(tool) => self.style.set_shape(tool),
            ControlAction::ClearCanvas => {
                info!("Clearing canvas");
                self.canvas.clear();
                self.needs_redraw = true;
            }
            ControlAction::ToggleOrientation => self.toggle_orientation(),
            ControlAction::ReloadImage => self.request_image_load(),
            ControlAction::Exit => {
                info!("Exit requested");
                self.should_exit = true;
            }
        }
    }

    /// Flips the canvas between its landscape and portrait presets and
    /// resizes the window to match.
    fn toggle_orientation(&mut self) {
        if let Err(err) = self.canvas.toggle_orientation() {
            warn!("Orientation toggle failed: {}", err);
            return;
        }

        let width = self.canvas.width() as u32;
        let height = self.canvas.height() as u32;
        info!("Orientation toggled, window resized to {}x{}", width, height);

        // Old buffers have the wrong size, drop the pool with the dimensions.
        self.surface.update_dimensions(width, height);
        if let Some(window) = self.surface.window() {
            window.set_min_size(Some((width, height)));
            window.set_max_size(Some((width, height)));
            window.commit();
        }
        self.needs_redraw = true;
    }

    /// Queues the CLI-provided background image for decoding.
    pub(super) fn request_image_load(&mut self) {
        match &self.image_path {
            Some(path) => {
                info!("Loading background image: {}", path.display());
                self.loader.request(path.clone());
            }
            None => warn!("No image given on the command line, nothing to load"),
        }
    }

    /// Paints any image whose decode completed since the last poll.
    ///
    /// Last-write-wins: an image that finishes after the canvas was cleared
    /// or redrawn still lands on top.
    pub(super) fn poll_image_loader(&mut self) {
        if let Some(result) = self.loader.try_take_result() {
            match result {
                Ok(img) => {
                    info!("Background image decoded ({}x{})", img.width(), img.height());
                    self.canvas.paint_image(&img);
                    self.needs_redraw = true;
                }
                Err(err) => warn!("Background image load failed: {}", err),
            }
        }
    }
}
