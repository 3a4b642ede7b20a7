use clap::{ArgAction, Parser};
use std::path::PathBuf;

use squiggles::backend::{self, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "squiggles")]
#[command(version, about = "Freehand and shape drawing canvas for Wayland")]
struct Cli {
    /// Start in the 300x900 portrait preset instead of 900x550 landscape
    #[arg(long, short = 'p', action = ArgAction::SetTrue)]
    portrait: bool,

    /// Background image to load into the canvas (scaled to fill)
    #[arg(long, short = 'i', value_name = "PATH")]
    image: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting drawing canvas...");
    log::info!("Controls:");
    log::info!("  - Draw: drag with the left button");
    log::info!("  - Shapes: R (rectangle), C (circle), L (line), then drag");
    log::info!("  - Pencil: P, Eraser: E");
    log::info!("  - Colors: 1-9, 0, - select the palette swatches");
    log::info!("  - Brush size: [ / ] or scroll");
    log::info!("  - Clear: X, Rotate canvas: O, Reload image: I");
    log::info!("  - Exit: Escape or Q");

    backend::run(RunOptions {
        portrait: cli.portrait,
        image: cli.image,
    })?;

    log::info!("Drawing canvas closed.");
    Ok(())
}
