//! Keyboard navigator: keystrokes → grid messages
//!
//! Two layers, mirroring where focus lives:
//! - the grid navigator, active while a cell is selected and not being edited
//! - the in-cell edit control, active while a cell is being edited
//!
//! A returned message means the key was handled and its default action
//! should be suppressed.

use super::types::{KeyCode, Keystroke};
use crate::grid::GridState;
use crate::messages::{Direction, GridMsg};

/// Result of offering a keystroke to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub msg: Option<GridMsg>,
    /// The host should suppress the key's default behavior
    pub prevent_default: bool,
}

/// Map a keystroke and report whether it was consumed
pub fn resolve_key(state: &GridState, key: Keystroke) -> KeyOutcome {
    let msg = map_key(state, key);
    KeyOutcome {
        prevent_default: msg.is_some(),
        msg,
    }
}

/// Route a keystroke based on the current grid state
pub fn map_key(state: &GridState, key: Keystroke) -> Option<GridMsg> {
    if state.is_editing() {
        edit_control_key(key)
    } else if state.selected().is_some() {
        navigator_key(key)
    } else {
        None
    }
}

/// Keys handled by the grid while a cell is selected
pub fn navigator_key(key: Keystroke) -> Option<GridMsg> {
    if key.mods.has_cmd() {
        return match key.key {
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'c') => Some(GridMsg::CopyCell),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'v') => Some(GridMsg::PasteCell),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Up => Some(GridMsg::Move(Direction::Up)),
        KeyCode::Down => Some(GridMsg::Move(Direction::Down)),
        KeyCode::Left => Some(GridMsg::Move(Direction::Left)),
        KeyCode::Right => Some(GridMsg::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::F(2) => Some(GridMsg::StartEditing),
        KeyCode::Delete => Some(GridMsg::ClearCell),
        _ => None,
    }
}

/// Keys handled by the in-cell editor
pub fn edit_control_key(key: Keystroke) -> Option<GridMsg> {
    match key.key {
        KeyCode::Enter => Some(GridMsg::ConfirmEdit),
        KeyCode::Escape => Some(GridMsg::CancelEdit),
        // Tab moves focus out of the input, which commits
        KeyCode::Tab => Some(GridMsg::Blur),
        KeyCode::Backspace => Some(GridMsg::EditDeleteBackward),
        KeyCode::Char(c) if !key.mods.has_cmd() => Some(GridMsg::EditInsertChar(c)),
        _ => None,
    }
}
