//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::grid::CellRef;
use crate::keymap::Keystroke;
use crate::model::GridKind;
use crate::records::{Field, FilterDirective, SortDirective};

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Selection and edit-state messages for the active grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg {
    /// Select a cell (click)
    SelectCell(CellRef),
    /// Drop the selection
    Deselect,
    /// Move the selection one step (arrow keys)
    Move(Direction),
    /// Enter edit mode on the selected cell (Enter, F2, double-click)
    StartEditing,
    /// Replace the draft text
    SetDraft(String),
    /// Type a character into the draft
    EditInsertChar(char),
    /// Remove the last draft character (Backspace)
    EditDeleteBackward,
    /// Commit an explicit value
    CommitEdit(String),
    /// Commit the current draft (Enter while editing)
    ConfirmEdit,
    /// Input lost focus; commits the draft
    Blur,
    /// Discard the draft (Escape)
    CancelEdit,
    /// Clear the selected cell (Delete)
    ClearCell,
    /// Copy the selected cell into the clipboard slot
    CopyCell,
    /// Paste the clipboard slot into the selected cell
    PasteCell,
    /// Formula-bar commit: write text into the selected cell
    SetSelectedValue(String),
}

/// Toolbar and header commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Sort(SortDirective),
    Filter(FilterDirective),
    ClearFilter,
    /// Toggle a field's visibility
    HideField(Field),
    Export,
    Import { path: PathBuf },
    Share,
    NewAction,
    CellView,
}

/// Failure to decode a string-tagged action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    Unknown(String),
    #[error("action '{0}' requires a payload")]
    MissingPayload(&'static str),
    #[error("invalid payload for '{action}': {message}")]
    InvalidPayload {
        action: &'static str,
        message: String,
    },
}

#[derive(Deserialize)]
struct FieldPayload {
    #[serde(alias = "key", alias = "column")]
    field: Field,
}

#[derive(Deserialize)]
struct PathPayload {
    #[serde(alias = "file")]
    path: PathBuf,
}

impl Action {
    /// Decode an action from its name and optional JSON payload
    ///
    /// Names are kebab-case (`"sort"`, `"hide-field"`, `"new-action"`...).
    /// `hide-field` and `import` also accept a bare string payload.
    pub fn from_name(name: &str, payload: Option<Value>) -> Result<Action, ActionError> {
        match name {
            "sort" => decode("sort", payload).map(Action::Sort),
            "filter" => decode("filter", payload).map(Action::Filter),
            "clear-filter" => Ok(Action::ClearFilter),
            "hide-field" => match payload {
                Some(Value::String(name)) => name
                    .parse()
                    .map(Action::HideField)
                    .map_err(|e: crate::records::UnknownField| ActionError::InvalidPayload {
                        action: "hide-field",
                        message: e.to_string(),
                    }),
                other => decode::<FieldPayload>("hide-field", other).map(|p| Action::HideField(p.field)),
            },
            "export" => Ok(Action::Export),
            "import" => match payload {
                Some(Value::String(path)) => Ok(Action::Import { path: path.into() }),
                other => decode::<PathPayload>("import", other).map(|p| Action::Import { path: p.path }),
            },
            "share" => Ok(Action::Share),
            "new-action" => Ok(Action::NewAction),
            "cell-view" => Ok(Action::CellView),
            _ => Err(ActionError::Unknown(name.to_string())),
        }
    }

    /// The kebab-case name accepted by [`Action::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Sort(_) => "sort",
            Action::Filter(_) => "filter",
            Action::ClearFilter => "clear-filter",
            Action::HideField(_) => "hide-field",
            Action::Export => "export",
            Action::Import { .. } => "import",
            Action::Share => "share",
            Action::NewAction => "new-action",
            Action::CellView => "cell-view",
        }
    }
}

fn decode<T: for<'de> Deserialize<'de>>(
    action: &'static str,
    payload: Option<Value>,
) -> Result<T, ActionError> {
    let payload = payload.ok_or(ActionError::MissingPayload(action))?;
    serde_json::from_value(payload).map_err(|e| ActionError::InvalidPayload {
        action,
        message: e.to_string(),
    })
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Selection/edit messages for the active grid
    Grid(GridMsg),
    /// Toolbar commands
    Action(Action),
    /// Raw key press, routed through the keyboard navigator
    Key(Keystroke),
    /// Import file read finished (async result)
    ImportLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Switch between the record grid and the free sheet
    SwitchGrid(GridKind),
    /// Drop all queued notifications
    ClearNotifications,
}

// Convenience constructors for common messages
impl Msg {
    pub fn select(row: usize, col: usize) -> Self {
        Msg::Grid(GridMsg::SelectCell(CellRef::new(row, col)))
    }

    pub fn move_selection(direction: Direction) -> Self {
        Msg::Grid(GridMsg::Move(direction))
    }

    pub fn commit(value: impl Into<String>) -> Self {
        Msg::Grid(GridMsg::CommitEdit(value.into()))
    }
}
