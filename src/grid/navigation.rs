//! Cell navigation logic
//!
//! Arrow-key movement clamped to the grid bounds. Horizontal movement
//! never wraps to an adjacent row and skips hidden columns.

use super::cell::{CellGrid, CellRef};
use super::state::{EditState, GridState};
use crate::messages::Direction;

impl GridState {
    /// Move the selection one cell in `direction`
    ///
    /// Returns true if the selection changed. Does nothing while editing or
    /// when no cell is selected.
    pub fn move_selection<G: CellGrid + ?Sized>(&mut self, grid: &G, direction: Direction) -> bool {
        let EditState::Selected(current) = self.state else {
            return false;
        };

        let target = match direction {
            Direction::Up => CellRef::new(current.row.saturating_sub(1), current.col),
            Direction::Down => {
                let last_row = grid.row_count().saturating_sub(1);
                CellRef::new((current.row + 1).min(last_row), current.col)
            }
            Direction::Left => match prev_visible_column(grid, current.col) {
                Some(col) => CellRef::new(current.row, col),
                None => current,
            },
            Direction::Right => match next_visible_column(grid, current.col) {
                Some(col) => CellRef::new(current.row, col),
                None => current,
            },
        };

        if target == current {
            return false;
        }
        self.state = EditState::Selected(target);
        true
    }

    /// Clamp the selection into the grid after the grid shrank
    pub fn clamp_selection<G: CellGrid + ?Sized>(&mut self, grid: &G) {
        let Some(cell) = self.selected() else {
            return;
        };
        let row = cell.row.min(grid.row_count().saturating_sub(1));
        let col = cell.col.min(grid.column_count().saturating_sub(1));
        if (row, col) != (cell.row, cell.col) {
            self.select(CellRef::new(row, col));
        }
    }
}

fn prev_visible_column<G: CellGrid + ?Sized>(grid: &G, col: usize) -> Option<usize> {
    (0..col).rev().find(|&c| grid.is_column_visible(c))
}

fn next_visible_column<G: CellGrid + ?Sized>(grid: &G, col: usize) -> Option<usize> {
    (col + 1..grid.column_count()).find(|&c| grid.is_column_visible(c))
}
