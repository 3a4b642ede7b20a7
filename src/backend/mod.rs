use anyhow::Result;
use std::path::PathBuf;

pub mod wayland;

/// Startup options resolved from the CLI.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Start in the portrait preset (overrides the config default).
    pub portrait: bool,
    /// Background image to load into the canvas.
    pub image: Option<PathBuf>,
}

/// Run the Wayland backend with the full event loop.
pub fn run(options: RunOptions) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(options);
    backend.run()
}
