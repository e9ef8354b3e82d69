//! Grid message handlers (selection, navigation, cell editing)
//!
//! The same state machine drives both grids; only the `CellGrid` behind it
//! differs.

use crate::commands::Cmd;
use crate::grid::{CellEdit, CellGrid, GridState};
use crate::messages::GridMsg;
use crate::model::{AppModel, GridKind};
use crate::records::RecordGrid;

/// Handle grid messages against the active grid
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    let changed = match model.active {
        GridKind::Records => {
            let empty_rows = model.config.empty_row_budget;
            let mut grid = RecordGrid::new(&mut model.records, &model.view, empty_rows);
            apply_grid_msg(&mut model.record_state, &mut grid, msg)
        }
        GridKind::Sheet => apply_grid_msg(&mut model.sheet_state, &mut model.sheet, msg),
    };

    changed.then_some(Cmd::Redraw)
}

/// Run one message through the state machine
///
/// Returns true if the selection, edit state or grid contents changed.
pub fn apply_grid_msg<G: CellGrid + ?Sized>(
    state: &mut GridState,
    grid: &mut G,
    msg: GridMsg,
) -> bool {
    let before = state.state.clone();

    let edit = match msg {
        GridMsg::SelectCell(cell) => {
            if !grid.contains(cell) {
                tracing::warn!(cell = %cell, "select outside grid ignored");
                return false;
            }
            state.select(cell);
            None
        }
        GridMsg::Deselect => {
            state.deselect();
            None
        }
        GridMsg::Move(direction) => {
            state.move_selection(grid, direction);
            None
        }
        GridMsg::StartEditing => {
            state.start_edit(grid);
            None
        }
        GridMsg::SetDraft(text) => {
            state.set_draft(text);
            None
        }
        GridMsg::EditInsertChar(ch) => {
            state.insert_char(ch);
            None
        }
        GridMsg::EditDeleteBackward => {
            state.delete_backward();
            None
        }
        GridMsg::CommitEdit(value) => state.commit_edit(grid, &value),
        GridMsg::ConfirmEdit | GridMsg::Blur => state.blur(grid),
        GridMsg::CancelEdit => {
            state.cancel_edit();
            None
        }
        GridMsg::ClearCell => state.clear_cell(grid),
        GridMsg::CopyCell => {
            if state.copy_cell(grid) {
                tracing::debug!(target: "clipboard", cell = ?state.selected(), "cell copied");
            }
            None
        }
        GridMsg::PasteCell => state.paste_cell(grid),
        GridMsg::SetSelectedValue(value) => state.write_selected(grid, &value),
    };

    if let Some(edit) = &edit {
        log_edit(edit);
    }

    edit.is_some() || state.state != before
}

fn log_edit(edit: &CellEdit) {
    if edit.appended {
        tracing::info!(target: "edit", cell = %edit.cell, value = %edit.new_value, "row materialized");
    } else {
        tracing::info!(
            target: "edit",
            cell = %edit.cell,
            old = %edit.old_value,
            new = %edit.new_value,
            "cell committed"
        );
    }
}
