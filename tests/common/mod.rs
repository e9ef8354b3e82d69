//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridlite::config::GridConfig;
use gridlite::grid::CellRef;
use gridlite::keymap::Keystroke;
use gridlite::messages::{GridMsg, Msg};
use gridlite::model::AppModel;
use gridlite::records::{derive_view, Field, Record};
use gridlite::update::update;

/// Seeded model with default configuration
pub fn test_model() -> AppModel {
    AppModel::new(GridConfig::default())
}

/// Seeded model with a custom blank-row budget
pub fn model_with_budget(empty_rows: usize) -> AppModel {
    let config = GridConfig {
        empty_row_budget: empty_rows,
        ..GridConfig::default()
    };
    AppModel::new(config)
}

/// Run each message through `update`, ignoring returned commands
pub fn dispatch(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        update(model, msg);
    }
}

/// Parse a comma-separated key list into key messages
pub fn keys(list: &str) -> Vec<Msg> {
    list.split(',')
        .map(|k| Msg::Key(k.parse::<Keystroke>().expect("valid key")))
        .collect()
}

/// Select `row`, `col` in the active grid
pub fn select(model: &mut AppModel, row: usize, col: usize) {
    update(model, Msg::Grid(GridMsg::SelectCell(CellRef::new(row, col))));
}

/// Select a cell, type `value` into it and press Enter
pub fn type_into(model: &mut AppModel, row: usize, col: usize, value: &str) {
    select(model, row, col);
    update(model, Msg::Grid(GridMsg::StartEditing));
    update(model, Msg::Grid(GridMsg::SetDraft(value.to_string())));
    update(model, Msg::Grid(GridMsg::ConfirmEdit));
}

/// Identifiers of the record grid in display order
pub fn visible_ids(model: &AppModel) -> Vec<String> {
    let records = model.records.records();
    derive_view(records, model.view.sort.as_ref(), model.view.filter.as_ref())
        .records(records)
        .map(|r| r.id.clone())
        .collect()
}

/// Record with only the job request set
pub fn task(job_request: &str) -> Record {
    Record::default().with(Field::JobRequest, job_request)
}
