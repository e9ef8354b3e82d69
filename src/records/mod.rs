//! Record grid data model
//!
//! ```text
//! RecordStore (canonical order)
//! └── derive_view(sort, filter) ──▶ View (display order)
//!                                    └── RecordGrid / render_grid
//! ```

mod field;
mod grid;
mod store;
mod view;

pub use field::{Field, Priority, RenderHint, Rendered, Status, UnknownField};
pub use grid::{render_grid, GridView, RecordGrid, RenderedCell, RenderedRow, DEFAULT_EMPTY_ROWS};
pub use store::{seed_records, FieldUpdate, Record, RecordStore};
pub use view::{derive_view, FilterDirective, SortDirection, SortDirective, View, ViewConfig};
