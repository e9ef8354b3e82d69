//! Application model - the complete state of the grid engine
//!
//! Two grids live side by side: the record grid (project tracker over the
//! record store) and the free sheet. Each keeps its own selection state so
//! switching between them doesn't lose the cursor.

mod notification;

pub use notification::{Notification, NotificationLevel};

use crate::config::GridConfig;
use crate::grid::{GridState, SheetGrid};
use crate::records::{render_grid, GridView, RecordStore, ViewConfig};

/// Which grid receives grid messages and key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridKind {
    #[default]
    Records,
    Sheet,
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Canonical records, in insertion order
    pub records: RecordStore,
    /// Sort, filter and hidden columns for the record grid
    pub view: ViewConfig,
    /// Selection/edit state over the record grid's derived view
    pub record_state: GridState,
    /// Free lettered grid
    pub sheet: SheetGrid,
    pub sheet_state: GridState,
    pub active: GridKind,
    /// Pending notifications, oldest first
    pub notifications: Vec<Notification>,
    pub config: GridConfig,
}

impl AppModel {
    /// Model seeded with the demonstration records
    pub fn new(config: GridConfig) -> Self {
        Self::with_store(RecordStore::seeded(), config)
    }

    pub fn with_store(records: RecordStore, config: GridConfig) -> Self {
        Self {
            records,
            view: ViewConfig::default(),
            record_state: GridState::new(),
            sheet: SheetGrid::new(config.sheet.rows, config.sheet.cols),
            sheet_state: GridState::new(),
            active: GridKind::default(),
            notifications: Vec::new(),
            config,
        }
    }

    /// Selection state of the active grid
    pub fn grid_state(&self) -> &GridState {
        match self.active {
            GridKind::Records => &self.record_state,
            GridKind::Sheet => &self.sheet_state,
        }
    }

    /// Blank rows rendered after the last record
    pub fn empty_rows(&self) -> usize {
        self.config.empty_row_budget
    }

    /// Derived record grid as the presentation would draw it
    pub fn record_view(&self) -> GridView {
        render_grid(&self.records, &self.view, &self.record_state, self.empty_rows())
    }

    pub fn notify(&mut self, notification: Notification) {
        tracing::info!(target: "notification", %notification, "queued");
        self.notifications.push(notification);
    }

    /// Remove and return all pending notifications
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
