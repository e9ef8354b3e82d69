//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

// ============================================================================
// Toolbar Registry
// ============================================================================

/// A toolbar entry: the action name it dispatches and its label
#[derive(Debug, Clone)]
pub struct ActionDef {
    pub name: &'static str,
    pub label: &'static str,
    /// Whether the action needs a JSON payload
    pub takes_payload: bool,
}

/// Static registry of all toolbar actions, in toolbar order
pub static ACTIONS: &[ActionDef] = &[
    ActionDef {
        name: "hide-field",
        label: "Hide fields",
        takes_payload: true,
    },
    ActionDef {
        name: "sort",
        label: "Sort",
        takes_payload: true,
    },
    ActionDef {
        name: "filter",
        label: "Filter",
        takes_payload: true,
    },
    ActionDef {
        name: "clear-filter",
        label: "Clear filter",
        takes_payload: false,
    },
    ActionDef {
        name: "cell-view",
        label: "Cell view",
        takes_payload: false,
    },
    ActionDef {
        name: "import",
        label: "Import",
        takes_payload: true,
    },
    ActionDef {
        name: "export",
        label: "Export",
        takes_payload: false,
    },
    ActionDef {
        name: "share",
        label: "Share",
        takes_payload: false,
    },
    ActionDef {
        name: "new-action",
        label: "New Action",
        takes_payload: false,
    },
];

/// Look up a toolbar entry by action name
pub fn action_def(name: &str) -> Option<&'static ActionDef> {
    ACTIONS.iter().find(|def| def.name == name)
}

// ============================================================================
// Side-effect Commands
// ============================================================================

/// Commands returned from update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the grid
    Redraw,
    /// Write an export file into the output directory
    WriteExport { filename: String, contents: String },
    /// Read an import file; completes with `Msg::ImportLoaded`
    ReadImport { path: PathBuf },
    /// Hand a link to the host share target
    Share {
        title: String,
        text: String,
        url: String,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Export doesn't change the grid
            Cmd::WriteExport { .. } => false,
            // ImportLoaded triggers the redraw when the read completes
            Cmd::ReadImport { .. } => false,
            Cmd::Share { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
