//! Input handling and tool state machine.
//!
//! This module translates backend keyboard and mouse events into drawing
//! actions. It maintains the current style (color, brush size, eraser, shape
//! selection) and the pointer gesture state machine (idle, freehand path,
//! shape drag).

pub mod controls;
pub mod events;
pub mod session;
pub mod style;

// Re-export commonly used types at module level
pub use controls::{action_for_key, action_for_scroll, ControlAction};
pub use events::{Key, MouseButton};
pub use session::{PointerSession, SessionState};
pub use style::Style;
