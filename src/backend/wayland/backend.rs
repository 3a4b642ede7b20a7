// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        xdg::{window::WindowDecorations, XdgShell},
        WaylandSurface,
    },
    shm::Shm,
};
use std::time::Duration;
use wayland_client::{globals::registry_queue_init, Connection};

use super::state::WaylandState;
use crate::{
    backend::RunOptions,
    config::Config,
    draw::{Canvas, Orientation},
    input::Style,
};

/// Wayland backend state
pub struct WaylandBackend {
    options: RunOptions,
}

impl WaylandBackend {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        debug!("Initialized output state");

        let seat_state = SeatState::new(&globals, &qh);
        debug!("Initialized seat state");

        let registry_state = RegistryState::new(&globals);

        // Load configuration
        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        };
        info!("Configuration loaded");
        debug!("  Color: {:?}", config.drawing.default_color);
        debug!("  Brush size: {:.1}px", config.drawing.default_brush_size);
        debug!("  Start portrait: {}", config.canvas.start_portrait);
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        // CLI flag overrides the config default
        let orientation = if self.options.portrait || config.canvas.start_portrait {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        };
        let canvas = Canvas::new(orientation, config.canvas.background.to_color())
            .context("Failed to create canvas")?;
        info!(
            "Canvas created: {:?} ({}x{})",
            orientation,
            canvas.width(),
            canvas.height()
        );

        let style = Style::new(
            config.drawing.default_color.to_color(),
            config.drawing.default_brush_size,
        );

        // Create application state
        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            config,
            canvas,
            style,
            self.options.image.take(),
        );

        // Create the window sized exactly to the canvas, so surface-local
        // pointer coordinates are canvas coordinates.
        info!("Creating window");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let window =
            state
                .xdg_shell
                .create_window(wl_surface, WindowDecorations::RequestServer, &qh);
        window.set_title("Squiggles");
        window.set_app_id("squiggles");

        let width = state.surface.width();
        let height = state.surface.height();
        window.set_min_size(Some((width, height)));
        window.set_max_size(Some((width, height)));
        window.commit();

        state.surface.set_window(window);
        info!("Window created");

        // Kick off the initial image decode if one was requested
        if state.image_path.is_some() {
            state.request_image_load();
        }

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;
        const MAX_RENDER_FAILURES: u32 = 10;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            // Check if we should exit before blocking
            if state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            // Dispatch pending events. While an image decode is in flight we
            // must not park on the socket indefinitely (decode completion is
            // not a Wayland event), so poll with roundtrips instead.
            let dispatch_result = if state.loader.is_pending() {
                let result = event_queue.roundtrip(&mut state);
                std::thread::sleep(Duration::from_millis(10));
                result
            } else {
                event_queue.blocking_dispatch(&mut state)
            };

            match dispatch_result {
                Ok(_) => {
                    if state.should_exit {
                        info!("Exit requested after dispatch, breaking event loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Event queue error: {}", e);
                    loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                    break;
                }
            }

            // Paint any image whose decode finished since the last iteration
            state.poll_image_loader();

            // Render if configured and needs redraw, but only if no frame callback pending
            // This throttles rendering to display refresh rate (when vsync is enabled)
            let can_render = state.surface.is_configured()
                && state.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                debug!(
                    "Main loop: needs_redraw=true, frame_callback_pending={}, triggering render",
                    state.surface.frame_callback_pending()
                );
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.needs_redraw = false;
                        // Only set frame_callback_pending if vsync is enabled
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flag to avoid infinite error loop
                        state.needs_redraw = false;
                    }
                }
            } else if state.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");

        // Return error if loop exited due to error, otherwise success
        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
