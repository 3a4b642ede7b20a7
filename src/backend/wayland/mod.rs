//! Wayland backend: an xdg-toplevel window sized exactly to the canvas,
//! rendered through wl_shm buffers wrapped in Cairo.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
