//! Import completion handler

use std::path::Path;

use crate::commands::Cmd;
use crate::io::{import_records, IMPORT_FAILED_MESSAGE, IMPORT_SUCCEEDED_MESSAGE};
use crate::model::{AppModel, Notification};
use crate::records::RecordGrid;

/// Apply the contents of a finished import read
///
/// Success replaces the store wholesale. Any failure leaves the store
/// untouched and queues a single error notification. Files with an
/// unsupported extension are ignored.
pub fn update_import(model: &mut AppModel, path: &Path, result: Result<String, String>) -> Option<Cmd> {
    let content = match result {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read import {}: {}", path.display(), e);
            model.notify(Notification::error(IMPORT_FAILED_MESSAGE));
            return Some(Cmd::Redraw);
        }
    };

    match import_records(path, &content, model.config.import.csv_dialect) {
        Ok(Some(records)) => {
            tracing::info!(count = records.len(), path = %path.display(), "records imported");
            model.records.replace_all(records);
            let dups = model.records.duplicate_ids();
            if !dups.is_empty() {
                tracing::warn!(?dups, "imported records share identifiers");
            }
            clamp_record_selection(model);
            model.notify(Notification::info(IMPORT_SUCCEEDED_MESSAGE));
            Some(Cmd::Redraw)
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "unsupported import type ignored");
            None
        }
        Err(e) => {
            tracing::warn!("Failed to import {}: {}", path.display(), e);
            model.notify(Notification::error(IMPORT_FAILED_MESSAGE));
            Some(Cmd::Redraw)
        }
    }
}

/// Drop any in-progress edit and pull the selection back inside the grid
fn clamp_record_selection(model: &mut AppModel) {
    if let Some(cell) = model.record_state.editing() {
        tracing::debug!(cell = %cell, "edit abandoned by import");
        model.record_state.select(cell);
    }
    let empty_rows = model.config.empty_row_budget;
    let grid = RecordGrid::new(&mut model.records, &model.view, empty_rows);
    model.record_state.clamp_selection(&grid);
}
