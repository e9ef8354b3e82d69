//! Record grid: the record store seen through the derived view
//!
//! Rows are view rows, columns are [`Field::ALL`] positions. The grid has
//! `store.len() + empty_rows` addressable rows. Rows past the end of the
//! view render blank. Writing into one targets the canonical record at that
//! position, or appends a new record once past the end of the store.

use super::field::Field;
use super::store::RecordStore;
use super::view::{derive_view, View, ViewConfig};
use crate::grid::{CellEdit, CellGrid, CellRef, GridState};

/// Default number of blank rows rendered below the records
pub const DEFAULT_EMPTY_ROWS: usize = 20;

/// Mutable cell access to the record store in display order
pub struct RecordGrid<'a> {
    store: &'a mut RecordStore,
    config: &'a ViewConfig,
    view: View,
    empty_rows: usize,
}

impl<'a> RecordGrid<'a> {
    pub fn new(store: &'a mut RecordStore, config: &'a ViewConfig, empty_rows: usize) -> Self {
        let view = derive_view(store.records(), config.sort.as_ref(), config.filter.as_ref());
        Self {
            store,
            config,
            view,
            empty_rows,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Store index a write to `row` lands on
    ///
    /// View rows map through the view; rows hidden by a filter address the
    /// store by position; anything past the store is `store.len()` (append).
    fn target_index(&self, row: usize) -> usize {
        self.view
            .canonical_index(row)
            .unwrap_or_else(|| row.min(self.store.len()))
    }

    fn refresh_view(&mut self) {
        self.view = derive_view(
            self.store.records(),
            self.config.sort.as_ref(),
            self.config.filter.as_ref(),
        );
    }
}

impl CellGrid for RecordGrid<'_> {
    fn row_count(&self) -> usize {
        self.store.len() + self.empty_rows
    }

    fn column_count(&self) -> usize {
        Field::ALL.len()
    }

    fn cell(&self, cell: CellRef) -> &str {
        let Some(field) = Field::from_index(cell.col) else {
            return "";
        };
        self.view
            .canonical_index(cell.row)
            .and_then(|i| self.store.get(i))
            .map(|record| record.get(field))
            .unwrap_or("")
    }

    fn write_cell(&mut self, cell: CellRef, value: &str) -> Option<CellEdit> {
        let field = Field::from_index(cell.col)?;
        if cell.row >= self.row_count() {
            return None;
        }

        let target = self.target_index(cell.row);
        let update = self.store.update_field(target, field, value);
        self.refresh_view();

        Some(CellEdit {
            cell,
            old_value: update.old_value,
            new_value: value.to_string(),
            appended: update.appended,
        })
    }

    fn is_column_visible(&self, col: usize) -> bool {
        Field::from_index(col).is_some_and(|f| !self.config.is_hidden(f))
    }

    fn is_blank_row(&self, row: usize) -> bool {
        row >= self.view.len()
    }
}

/// One cell of the rendered grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub field: Field,
    pub value: String,
    pub selected: bool,
    pub editing: bool,
}

/// One rendered row: a record or a blank trailing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Position in the view
    pub row: usize,
    /// Canonical index of the record shown, `None` for blank rows
    pub record: Option<usize>,
    pub cells: Vec<RenderedCell>,
}

/// Everything presentation needs to draw the record grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub columns: Vec<Field>,
    pub rows: Vec<RenderedRow>,
}

impl GridView {
    /// Rows backed by a record
    pub fn record_rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.rows.iter().filter(|r| r.record.is_some())
    }
}

/// Build the derived view for presentation
///
/// Columns exclude hidden fields; rows cover every addressable view row.
pub fn render_grid(
    store: &RecordStore,
    config: &ViewConfig,
    state: &GridState,
    empty_rows: usize,
) -> GridView {
    let view = derive_view(store.records(), config.sort.as_ref(), config.filter.as_ref());
    let columns = config.visible_fields();
    let total_rows = store.len() + empty_rows;

    let rows = (0..total_rows)
        .map(|row| {
            let record = view.canonical_index(row);
            let cells = columns
                .iter()
                .map(|&field| {
                    let cell = CellRef::new(row, field.index());
                    RenderedCell {
                        field,
                        value: record
                            .and_then(|i| store.get(i))
                            .map(|r| r.get(field).to_string())
                            .unwrap_or_default(),
                        selected: state.is_selected(cell),
                        editing: state.is_editing_cell(cell),
                    }
                })
                .collect();
            RenderedRow { row, record, cells }
        })
        .collect();

    GridView { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{FilterDirective, SortDirection, SortDirective};

    #[test]
    fn test_row_count_includes_empty_rows() {
        let mut store = RecordStore::seeded();
        let config = ViewConfig::default();
        let grid = RecordGrid::new(&mut store, &config, DEFAULT_EMPTY_ROWS);
        assert_eq!(grid.row_count(), 25);
        assert_eq!(grid.column_count(), 10);
    }

    #[test]
    fn test_cells_follow_sorted_view() {
        let mut store = RecordStore::seeded();
        let config = ViewConfig {
            sort: Some(SortDirective::new(Field::Priority, SortDirection::Asc)),
            ..Default::default()
        };
        let grid = RecordGrid::new(&mut store, &config, 3);
        assert_eq!(grid.cell(CellRef::new(0, Field::Id.index())), "2");
        assert_eq!(grid.cell(CellRef::new(5, Field::Id.index())), "");
    }

    #[test]
    fn test_write_in_sorted_view_targets_displayed_record() {
        let mut store = RecordStore::seeded();
        let config = ViewConfig {
            sort: Some(SortDirective::new(Field::Priority, SortDirection::Asc)),
            ..Default::default()
        };
        let mut grid = RecordGrid::new(&mut store, &config, 3);
        let edit = grid
            .write_cell(CellRef::new(0, Field::Assigned.index()), "Nadia")
            .unwrap();
        assert!(!edit.appended);
        assert_eq!(edit.old_value, "Tejas Pandey");
        assert_eq!(store.get(1).unwrap().assigned, "Nadia");
    }

    #[test]
    fn test_write_in_blank_row_appends() {
        let mut store = RecordStore::seeded();
        let config = ViewConfig::default();
        let mut grid = RecordGrid::new(&mut store, &config, DEFAULT_EMPTY_ROWS);
        let edit = grid
            .write_cell(CellRef::new(12, Field::JobRequest.index()), "New")
            .unwrap();
        assert!(edit.appended);
        assert_eq!(grid.row_count(), 26);
        assert_eq!(grid.cell(CellRef::new(5, Field::JobRequest.index())), "New");
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_filtered_out_rows_write_by_position() {
        let mut store = RecordStore::seeded();
        let config = ViewConfig {
            filter: Some(FilterDirective::new(Field::Status, "blocked")),
            ..Default::default()
        };
        let mut grid = RecordGrid::new(&mut store, &config, 2);
        assert!(grid.is_blank_row(1));
        assert_eq!(grid.cell(CellRef::new(1, Field::Id.index())), "");

        let edit = grid
            .write_cell(CellRef::new(2, Field::Assigned.index()), "X")
            .unwrap();
        assert!(!edit.appended);
        assert_eq!(edit.old_value, "Rachel Lee");

        let edit = grid
            .write_cell(CellRef::new(5, Field::Status.index()), "Blocked")
            .unwrap();
        assert!(edit.appended);
        assert_eq!(store.len(), 6);
        assert_eq!(store.get(2).unwrap().assigned, "X");
    }

    #[test]
    fn test_write_past_budget_rejected() {
        let mut store = RecordStore::seeded();
        let config = ViewConfig::default();
        let mut grid = RecordGrid::new(&mut store, &config, 2);
        assert!(grid.write_cell(CellRef::new(7, 0), "x").is_none());
        assert!(grid.write_cell(CellRef::new(0, 10), "x").is_none());
    }

    #[test]
    fn test_render_grid_flags_and_hidden_columns() {
        let store = RecordStore::seeded();
        let mut config = ViewConfig::default();
        config.toggle_hidden(Field::Url);
        let mut state = GridState::new();
        state.select(CellRef::new(1, Field::Status.index()));

        let view = render_grid(&store, &config, &state, 4);
        assert_eq!(view.columns.len(), 9);
        assert_eq!(view.rows.len(), 9);
        assert_eq!(view.record_rows().count(), 5);

        let row = &view.rows[1];
        let status = row.cells.iter().find(|c| c.field == Field::Status).unwrap();
        assert!(status.selected);
        assert!(!status.editing);
        assert_eq!(status.value, "Need to start");
        assert!(view.rows[6].record.is_none());
    }
}
