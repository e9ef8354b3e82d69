//! gridlite - a spreadsheet-lite grid engine
//!
//! Core types and logic for an editable record grid and a free lettered
//! sheet, following the Elm Architecture pattern: messages go through
//! `update`, side effects come back out as commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod io;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod records;
pub mod render;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
