//! Free lettered sheet
//!
//! A fixed-size `A1`-style grid whose cells are stored sparsely. Unlike the
//! record grid, rows here are independent and writes never grow the grid.

use std::collections::HashMap;

use super::address::column_label;
use super::cell::{CellEdit, CellGrid, CellRef};

/// Default sheet size
pub const DEFAULT_SHEET_ROWS: usize = 50;
pub const DEFAULT_SHEET_COLS: usize = 26;

/// Sparse free-form sheet
#[derive(Debug, Clone)]
pub struct SheetGrid {
    rows: usize,
    cols: usize,
    cells: HashMap<CellRef, String>,
}

/// Address and value readout for the selected cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaBar {
    pub address: String,
    pub value: String,
}

impl Default for SheetGrid {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_ROWS, DEFAULT_SHEET_COLS)
    }
}

impl SheetGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: HashMap::new(),
        }
    }

    /// Column header labels (A, B, ...)
    pub fn column_labels(&self) -> Vec<String> {
        (0..self.cols).map(column_label).collect()
    }

    /// Number of non-empty cells
    pub fn populated_count(&self) -> usize {
        self.cells.len()
    }

    /// Readout for the formula bar, or `None` when nothing is selected
    pub fn formula_bar(&self, selected: Option<CellRef>) -> Option<FormulaBar> {
        let cell = selected?;
        Some(FormulaBar {
            address: cell.address(),
            value: self.cell(cell).to_string(),
        })
    }
}

impl CellGrid for SheetGrid {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.cols
    }

    fn cell(&self, cell: CellRef) -> &str {
        self.cells.get(&cell).map(String::as_str).unwrap_or("")
    }

    fn write_cell(&mut self, cell: CellRef, value: &str) -> Option<CellEdit> {
        if !self.contains(cell) {
            return None;
        }

        let old_value = if value.is_empty() {
            self.cells.remove(&cell)
        } else {
            self.cells.insert(cell, value.to_string())
        };

        Some(CellEdit {
            cell,
            old_value: old_value.unwrap_or_default(),
            new_value: value.to_string(),
            appended: false,
        })
    }
}
