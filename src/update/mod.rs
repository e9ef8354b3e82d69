//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod action;
mod grid;
mod import;

use crate::commands::Cmd;
use crate::keymap::resolve_key;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use action::{new_task_record, update_action};
pub use grid::{apply_grid_msg, update_grid};
pub use import::update_import;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Action(action) => action::update_action(model, action),
        Msg::Key(key) => {
            let outcome = resolve_key(model.grid_state(), key);
            match outcome.msg {
                Some(m) => grid::update_grid(model, m),
                None => {
                    tracing::trace!(%key, "key not handled by grid");
                    None
                }
            }
        }
        Msg::ImportLoaded { path, result } => import::update_import(model, &path, result),
        Msg::SwitchGrid(kind) => {
            if model.active == kind {
                return None;
            }
            model.active = kind;
            Some(Cmd::Redraw)
        }
        Msg::ClearNotifications => {
            if model.notifications.is_empty() {
                return None;
            }
            model.notifications.clear();
            Some(Cmd::Redraw)
        }
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after selection state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SelectionSnapshot::capture(model.grid_state(), model.records.len());
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::capture(model.grid_state(), model.records.len());
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Grid::Move(Up)`
/// - `Action::Sort(..)`
/// - `Key(ArrowDown)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Action(a) => format!("Action::{:?}", a),
        Msg::Key(k) => format!("Key({})", k),
        Msg::ImportLoaded { path, result } => format!(
            "ImportLoaded({}, {})",
            path.display(),
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::SwitchGrid(kind) => format!("SwitchGrid({:?})", kind),
        Msg::ClearNotifications => "ClearNotifications".to_string(),
    }
}
