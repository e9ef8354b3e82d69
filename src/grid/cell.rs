//! Addressable cell model shared by every grid flavor

use std::fmt;

use super::address::cell_address;

/// Position of a cell in a grid view (zero-based)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `A1`-style address of this cell
    pub fn address(&self) -> String {
        cell_address(self.row, self.col)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address())
    }
}

/// A completed write to a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub cell: CellRef,
    pub old_value: String,
    pub new_value: String,
    /// True when the write materialized a new backing row
    pub appended: bool,
}

/// An addressable grid of text cells
///
/// Both the record grid (named fields over a record store) and the free
/// lettered sheet implement this, so the selection/edit state machine and
/// keyboard navigation are written once against it.
pub trait CellGrid {
    /// Number of addressable rows, including any trailing empty rows
    fn row_count(&self) -> usize;

    /// Number of addressable columns
    fn column_count(&self) -> usize;

    /// Current text of a cell (empty for unpopulated or out-of-range cells)
    fn cell(&self, cell: CellRef) -> &str;

    /// Write a value into a cell, returning the edit that was applied
    ///
    /// Returns `None` when the cell lies outside the grid.
    fn write_cell(&mut self, cell: CellRef, value: &str) -> Option<CellEdit>;

    /// Whether a column takes part in rendering and horizontal navigation
    fn is_column_visible(&self, _col: usize) -> bool {
        true
    }

    /// Whether a row shows no data, so any commit must reach `write_cell`
    ///
    /// Blank record rows materialize a record even when the committed value
    /// is empty; the sheet has no such rows.
    fn is_blank_row(&self, _row: usize) -> bool {
        false
    }

    /// Check whether a cell is inside the addressable area
    fn contains(&self, cell: CellRef) -> bool {
        cell.row < self.row_count() && cell.col < self.column_count()
    }
}
