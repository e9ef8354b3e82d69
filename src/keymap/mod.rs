//! Keyboard handling for the grid
//!
//! ```text
//! key string / host event → Keystroke → map_key(GridState) → GridMsg
//! ```
//!
//! The mapping is fixed: arrows move, Enter/F2 edit, Delete clears,
//! Cmd/Ctrl+C and Cmd/Ctrl+V copy and paste a single cell.

mod navigator;
mod types;

pub use navigator::{edit_control_key, map_key, navigator_key, resolve_key, KeyOutcome};
pub use types::{InvalidKey, KeyCode, Keystroke, Modifiers};
