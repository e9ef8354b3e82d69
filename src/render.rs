//! Plain-text rendering of both grids
//!
//! Selected cells are wrapped in `[..]`, a cell being edited shows its draft
//! in `{..}`. Column widths fit the widest rendered value.

use crate::grid::{CellGrid, CellRef, GridState, SheetGrid};
use crate::records::GridView;

/// Render the record rows of a derived view as an aligned table
///
/// Blank trailing rows are omitted unless one of them is selected.
pub fn render_records(view: &GridView, state: &GridState) -> String {
    let header: Vec<String> = view.columns.iter().map(|f| f.title().to_string()).collect();

    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .filter(|row| row.record.is_some() || row.cells.iter().any(|c| c.selected))
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| {
                    let text = cell.field.render(&cell.value).to_string();
                    decorate(text, cell.selected, cell.editing.then(|| state.draft()).flatten())
                })
                .collect()
        })
        .collect();

    format_table(&header, &rows)
}

/// Render the populated extent of the sheet plus a formula-bar line
pub fn render_sheet(sheet: &SheetGrid, state: &GridState) -> String {
    let selected = state.selected();
    let (mut last_row, mut last_col) = (0, 0);
    for row in 0..sheet.row_count() {
        for col in 0..sheet.column_count() {
            if !sheet.cell(CellRef::new(row, col)).is_empty() {
                last_row = last_row.max(row);
                last_col = last_col.max(col);
            }
        }
    }
    if let Some(cell) = selected {
        last_row = last_row.max(cell.row);
        last_col = last_col.max(cell.col);
    }
    let cols = (last_col + 1).min(sheet.column_count());
    let rows = (last_row + 1).min(sheet.row_count());

    let mut header = vec![String::new()];
    header.extend(sheet.column_labels().into_iter().take(cols));

    let body: Vec<Vec<String>> = (0..rows)
        .map(|row| {
            let mut line = vec![(row + 1).to_string()];
            line.extend((0..cols).map(|col| {
                let cell = CellRef::new(row, col);
                let editing = state.is_editing_cell(cell).then(|| state.draft()).flatten();
                decorate(sheet.cell(cell).to_string(), state.is_selected(cell), editing)
            }));
            line
        })
        .collect();

    let mut out = String::new();
    if let Some(bar) = sheet.formula_bar(selected) {
        out.push_str(&format!("{} | {}\n", bar.address, bar.value));
    }
    out.push_str(&format_table(&header, &body));
    out
}

fn decorate(text: String, selected: bool, draft: Option<&str>) -> String {
    match draft {
        Some(draft) => format!("{{{}}}", draft),
        None if selected => format!("[{}]", text),
        None => text,
    }
}

fn format_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = format_line(header);
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&format_line(row));
        out.push('\n');
    }
    out
}
