//! Keyboard control mapping.
//!
//! Keys stand in for the toolbar: digit row keys pick palette swatches,
//! brackets and the scroll wheel size the brush, letters pick tools and
//! trigger canvas actions.

use crate::draw::ShapeTool;

use super::events::Key;

/// A user-triggered control action, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Select palette swatch by index (0-based into [`crate::draw::PALETTE`]).
    SelectSwatch(usize),
    /// Step the brush size by the given delta.
    AdjustBrush(f64),
    /// Switch to the eraser.
    SelectEraser,
    /// Return to the freehand pencil.
    SelectPencil,
    /// Switch to a shape tool.
    SelectShape(ShapeTool),
    /// Reset the canvas to the background color.
    ClearCanvas,
    /// Flip between landscape and portrait presets.
    ToggleOrientation,
    /// (Re)load the background image given on the command line.
    ReloadImage,
    /// Quit the application.
    Exit,
}

/// Maps a key press to its control action, if it has one.
///
/// The digit row follows toolbar order: `1`-`9` select swatches 1-9, then
/// `0` and `-` continue to swatches 10 and 11.
pub fn action_for_key(key: Key) -> Option<ControlAction> {
    let action = match key {
        Key::Char(c @ '1'..='9') => {
            ControlAction::SelectSwatch(c as usize - '1' as usize)
        }
        Key::Char('0') => ControlAction::SelectSwatch(9),
        Key::Char('-') => ControlAction::SelectSwatch(10),
        Key::Char('[') => ControlAction::AdjustBrush(-1.0),
        Key::Char(']') => ControlAction::AdjustBrush(1.0),
        Key::Char('e') => ControlAction::SelectEraser,
        Key::Char('p') => ControlAction::SelectPencil,
        Key::Char('r') => ControlAction::SelectShape(ShapeTool::Rect),
        Key::Char('c') => ControlAction::SelectShape(ShapeTool::Circle),
        Key::Char('l') => ControlAction::SelectShape(ShapeTool::Line),
        Key::Char('x') => ControlAction::ClearCanvas,
        Key::Char('o') => ControlAction::ToggleOrientation,
        Key::Char('i') => ControlAction::ReloadImage,
        Key::Char('q') | Key::Escape => ControlAction::Exit,
        _ => return None,
    };
    Some(action)
}

/// Maps a scroll wheel step to a brush size adjustment. Scrolling up grows
/// the brush.
pub fn action_for_scroll(vertical: f64) -> Option<ControlAction> {
    if vertical < 0.0 {
        Some(ControlAction::AdjustBrush(1.0))
    } else if vertical > 0.0 {
        Some(ControlAction::AdjustBrush(-1.0))
    } else {
        None
    }
}
