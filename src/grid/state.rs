//! Selection and cell-edit state machine
//!
//! ```text
//!            select            start_edit
//!   Idle ───────────▶ Selected ───────────▶ Editing
//!                       ▲   ▲                 │
//!                       │   └── commit/blur ──┤
//!                       └────── cancel ───────┘
//! ```
//!
//! Selecting another cell while editing drops the draft. Only commits,
//! clears and pastes write to the grid.

use super::cell::{CellEdit, CellGrid, CellRef};

/// Where the grid cursor currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// Nothing selected
    #[default]
    Idle,
    /// A single highlighted cell
    Selected(CellRef),
    /// The selected cell is being edited with an uncommitted draft
    Editing { cell: CellRef, draft: String },
}

/// Snapshot of a copied cell, waiting to be pasted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedCell {
    pub cell: CellRef,
    pub value: String,
}

/// Selection, editing target and clipboard slot for one grid
#[derive(Debug, Clone, Default)]
pub struct GridState {
    pub state: EditState,
    pub clipboard: Option<CopiedCell>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected cell (also set while editing)
    pub fn selected(&self) -> Option<CellRef> {
        match &self.state {
            EditState::Idle => None,
            EditState::Selected(cell) => Some(*cell),
            EditState::Editing { cell, .. } => Some(*cell),
        }
    }

    /// Cell being edited, if any
    pub fn editing(&self) -> Option<CellRef> {
        match &self.state {
            EditState::Editing { cell, .. } => Some(*cell),
            _ => None,
        }
    }

    /// Uncommitted draft text
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn is_selected(&self, cell: CellRef) -> bool {
        self.selected() == Some(cell)
    }

    pub fn is_editing_cell(&self, cell: CellRef) -> bool {
        self.editing() == Some(cell)
    }

    /// Select a cell, discarding any in-progress draft
    pub fn select(&mut self, cell: CellRef) {
        if let EditState::Editing { cell: from, draft } = &self.state {
            tracing::debug!(from = %from, to = %cell, draft = %draft, "selection moved, draft discarded");
        }
        self.state = EditState::Selected(cell);
    }

    /// Clear selection entirely
    pub fn deselect(&mut self) {
        self.state = EditState::Idle;
    }

    /// Start editing the selected cell with its current value as the draft
    ///
    /// Returns false unless the state was `Selected`.
    pub fn start_edit<G: CellGrid + ?Sized>(&mut self, grid: &G) -> bool {
        let EditState::Selected(cell) = self.state else {
            return false;
        };
        let draft = grid.cell(cell).to_string();
        self.state = EditState::Editing { cell, draft };
        true
    }

    /// Replace the draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft, .. } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Append a character to the draft
    pub fn insert_char(&mut self, ch: char) {
        if let EditState::Editing { draft, .. } = &mut self.state {
            draft.push(ch);
        }
    }

    /// Remove the last character of the draft
    pub fn delete_backward(&mut self) {
        if let EditState::Editing { draft, .. } = &mut self.state {
            draft.pop();
        }
    }

    /// Write `value` to the edited cell and return to `Selected`
    ///
    /// A value equal to the current cell text is not written, except on a
    /// blank row where every commit lands in the store.
    pub fn commit_edit<G: CellGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        value: &str,
    ) -> Option<CellEdit> {
        let cell = self.editing()?;
        self.state = EditState::Selected(cell);
        write_if_changed(grid, cell, value)
    }

    /// Commit the current draft (losing focus always commits)
    pub fn blur<G: CellGrid + ?Sized>(&mut self, grid: &mut G) -> Option<CellEdit> {
        let draft = self.draft()?.to_string();
        self.commit_edit(grid, &draft)
    }

    /// Drop the draft and return to `Selected` without writing
    pub fn cancel_edit(&mut self) -> bool {
        let Some(cell) = self.editing() else {
            return false;
        };
        self.state = EditState::Selected(cell);
        true
    }

    /// Clear the selected cell without entering edit mode
    pub fn clear_cell<G: CellGrid + ?Sized>(&mut self, grid: &mut G) -> Option<CellEdit> {
        let EditState::Selected(cell) = self.state else {
            return None;
        };
        write_if_changed(grid, cell, "")
    }

    /// Write `value` into the selected cell from outside the cell editor
    ///
    /// An edit in progress on that cell is committed with `value` instead
    /// of its draft.
    pub fn write_selected<G: CellGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        value: &str,
    ) -> Option<CellEdit> {
        match self.state {
            EditState::Idle => None,
            EditState::Selected(cell) => write_if_changed(grid, cell, value),
            EditState::Editing { .. } => self.commit_edit(grid, value),
        }
    }

    /// Copy the selected cell's value into the clipboard slot
    pub fn copy_cell<G: CellGrid + ?Sized>(&mut self, grid: &G) -> bool {
        let Some(cell) = self.selected() else {
            return false;
        };
        self.clipboard = Some(CopiedCell {
            cell,
            value: grid.cell(cell).to_string(),
        });
        true
    }

    /// Write the clipboard value into the selected cell
    pub fn paste_cell<G: CellGrid + ?Sized>(&mut self, grid: &mut G) -> Option<CellEdit> {
        let EditState::Selected(cell) = self.state else {
            return None;
        };
        let value = self.clipboard.as_ref()?.value.clone();
        write_if_changed(grid, cell, &value)
    }
}

fn write_if_changed<G: CellGrid + ?Sized>(
    grid: &mut G,
    cell: CellRef,
    value: &str,
) -> Option<CellEdit> {
    if !grid.contains(cell) {
        return None;
    }
    if !grid.is_blank_row(cell.row) && grid.cell(cell) == value {
        return None;
    }
    let edit = grid.write_cell(cell, value)?;
    tracing::debug!(
        cell = %edit.cell,
        old = %edit.old_value,
        new = %edit.new_value,
        appended = edit.appended,
        "cell written"
    );
    Some(edit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SheetGrid;

    fn sheet() -> SheetGrid {
        let mut grid = SheetGrid::new(5, 3);
        grid.write_cell(CellRef::new(0, 0), "a");
        grid
    }

    #[test]
    fn test_start_edit_requires_selection() {
        let grid = sheet();
        let mut state = GridState::new();
        assert!(!state.start_edit(&grid));
        assert_eq!(state.state, EditState::Idle);

        state.select(CellRef::new(0, 0));
        assert!(state.start_edit(&grid));
        assert_eq!(state.draft(), Some("a"));
        assert!(state.is_editing_cell(CellRef::new(0, 0)));
    }

    #[test]
    fn test_start_edit_while_editing_is_ignored() {
        let grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        state.start_edit(&grid);
        state.set_draft("changed");
        assert!(!state.start_edit(&grid));
        assert_eq!(state.draft(), Some("changed"));
    }

    #[test]
    fn test_commit_writes_and_returns_to_selected() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        state.start_edit(&grid);

        let edit = state.commit_edit(&mut grid, "b").unwrap();
        assert_eq!(edit.old_value, "a");
        assert_eq!(edit.new_value, "b");
        assert_eq!(grid.cell(CellRef::new(0, 0)), "b");
        assert_eq!(state.state, EditState::Selected(CellRef::new(0, 0)));
    }

    #[test]
    fn test_commit_unchanged_value_writes_nothing() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        state.start_edit(&grid);
        assert!(state.commit_edit(&mut grid, "a").is_none());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        state.start_edit(&grid);
        state.insert_char('X');
        assert_eq!(state.draft(), Some("aX"));

        assert!(state.cancel_edit());
        assert_eq!(grid.cell(CellRef::new(0, 0)), "a");
        assert!(state.blur(&mut grid).is_none());
    }

    #[test]
    fn test_blur_commits_draft() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        state.start_edit(&grid);
        state.delete_backward();
        state.insert_char('z');

        let edit = state.blur(&mut grid).unwrap();
        assert_eq!(edit.new_value, "z");
        assert_eq!(grid.cell(CellRef::new(0, 0)), "z");
    }

    #[test]
    fn test_select_elsewhere_drops_draft() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        state.start_edit(&grid);
        state.set_draft("lost");

        state.select(CellRef::new(1, 1));
        assert_eq!(state.state, EditState::Selected(CellRef::new(1, 1)));
        assert!(state.blur(&mut grid).is_none());
        assert_eq!(grid.cell(CellRef::new(0, 0)), "a");
    }

    #[test]
    fn test_clear_cell_only_when_selected() {
        let mut grid = sheet();
        let mut state = GridState::new();
        assert!(state.clear_cell(&mut grid).is_none());

        state.select(CellRef::new(0, 0));
        let edit = state.clear_cell(&mut grid).unwrap();
        assert_eq!(edit.new_value, "");
        assert_eq!(grid.cell(CellRef::new(0, 0)), "");
    }

    #[test]
    fn test_copy_then_paste() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        assert!(state.copy_cell(&grid));

        state.select(CellRef::new(2, 1));
        let edit = state.paste_cell(&mut grid).unwrap();
        assert_eq!(edit.cell, CellRef::new(2, 1));
        assert_eq!(grid.cell(CellRef::new(2, 1)), "a");
        assert_eq!(
            state.clipboard,
            Some(CopiedCell {
                cell: CellRef::new(0, 0),
                value: "a".to_string()
            })
        );
    }

    #[test]
    fn test_write_selected_commits_over_draft() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(0, 0));
        state.start_edit(&grid);
        state.set_draft("draft");

        let edit = state.write_selected(&mut grid, "bar").unwrap();
        assert_eq!(edit.old_value, "a");
        assert_eq!(grid.cell(CellRef::new(0, 0)), "bar");
        assert_eq!(state.state, EditState::Selected(CellRef::new(0, 0)));
    }

    #[test]
    fn test_paste_with_empty_clipboard() {
        let mut grid = sheet();
        let mut state = GridState::new();
        state.select(CellRef::new(1, 1));
        assert!(state.paste_cell(&mut grid).is_none());
    }
}
