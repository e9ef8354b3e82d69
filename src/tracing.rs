//! Tracing setup and state-diff helpers
//!
//! Configure console output via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug` - selection/edit transitions only
//! - `RUST_LOG=gridlite::io=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridlite/logs/gridlite.log` with daily rotation.
//! File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::grid::{CellRef, EditState, GridState};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "gridlite.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // try_init: tests and embedders may already have a subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of selection/edit state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub selected: Option<CellRef>,
    pub editing: bool,
    pub record_count: usize,
}

impl SelectionSnapshot {
    pub fn capture(state: &GridState, record_count: usize) -> Self {
        Self {
            selected: state.selected(),
            editing: matches!(state.state, EditState::Editing { .. }),
            record_count,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.selected != other.selected {
            changes.push(format!(
                "selection: {} → {}",
                describe(self.selected),
                describe(other.selected)
            ));
        }
        if self.editing != other.editing {
            changes.push(if other.editing {
                "edit started".to_string()
            } else {
                "edit ended".to_string()
            });
        }
        if self.record_count != other.record_count {
            changes.push(format!(
                "records: {} → {}",
                self.record_count, other.record_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(cell: Option<CellRef>) -> String {
    cell.map(|c| c.address()).unwrap_or_else(|| "none".to_string())
}
