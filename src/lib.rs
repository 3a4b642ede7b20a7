//! Library exports for reusing squiggles subsystems.
//!
//! Exposes the drawing, input, and configuration modules alongside the
//! Wayland backend so that external tools can share validation logic and the
//! drawing core with the main binary.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod upload;
pub mod util;

pub use config::Config;
