//! Addressable grid engine
//!
//! One selection/edit state machine and one navigator, shared by every grid
//! flavor through the [`CellGrid`] trait.
//!
//! ```text
//! GridState ──(reads/writes)──▶ dyn CellGrid
//!                                 ├── RecordGrid (records::grid)
//!                                 └── SheetGrid  (free A1 sheet)
//! ```

pub mod address;
mod cell;
mod navigation;
mod sheet;
mod state;

pub use address::{cell_address, column_index, column_label, parse_address};
pub use cell::{CellEdit, CellGrid, CellRef};
pub use sheet::{FormulaBar, SheetGrid, DEFAULT_SHEET_COLS, DEFAULT_SHEET_ROWS};
pub use state::{CopiedCell, EditState, GridState};
