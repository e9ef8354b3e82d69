//! Command-line argument parsing
//!
//! Supports:
//! - Importing a CSV/JSON file at startup
//! - Sort, filter and hidden columns for the record grid
//! - Replaying a key sequence from a starting selection
//! - Dispatching toolbar actions by name (`--action sort={"field":"id"}`)
//! - Exporting the store and printing the grid as a table or JSON

use clap::Parser;
use std::path::PathBuf;

use crate::commands::action_def;
use crate::grid::{parse_address, CellRef};
use crate::keymap::Keystroke;
use crate::messages::Action;
use crate::model::GridKind;
use crate::records::{Field, FilterDirective, SortDirection, SortDirective};

/// A spreadsheet-lite grid engine
#[derive(Parser, Debug, Default)]
#[command(name = "gridlite", version, about = "A spreadsheet-lite grid engine")]
pub struct CliArgs {
    /// CSV or JSON file to import before anything else
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Sort the record grid (`field` or `field:asc|desc`)
    #[arg(long, value_name = "FIELD[:DIR]")]
    pub sort: Option<String>,

    /// Filter the record grid (`field=substring`)
    #[arg(long, value_name = "FIELD=TEXT")]
    pub filter: Option<String>,

    /// Hide a column (repeatable)
    #[arg(long = "hide", value_name = "FIELD")]
    pub hide: Vec<String>,

    /// Toolbar action to dispatch (`NAME` or `NAME=PAYLOAD`, repeatable)
    ///
    /// The payload is JSON; anything that does not parse as JSON is passed
    /// as a string (`hide-field=url`).
    #[arg(long = "action", value_name = "NAME[=PAYLOAD]")]
    pub actions: Vec<String>,

    /// Print the toolbar actions and exit
    #[arg(long)]
    pub list_actions: bool,

    /// Cell to select before replaying keys (e.g. `B3`)
    #[arg(long, value_name = "ADDRESS")]
    pub select: Option<String>,

    /// Comma-separated keys to replay (e.g. `Down,Down,Enter`)
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Write the CSV export into DIR (current directory if omitted)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub export: Option<PathBuf>,

    /// Print the records as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Work on the free lettered sheet instead of the record grid
    #[arg(long)]
    pub sheet: bool,

    /// Blank rows rendered after the last record
    #[arg(long, value_name = "N")]
    pub budget: Option<usize>,
}

/// How the final state is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub input: Option<PathBuf>,
    pub sort: Option<SortDirective>,
    pub filter: Option<FilterDirective>,
    pub hidden: Vec<Field>,
    pub actions: Vec<Action>,
    pub list_actions: bool,
    pub select: Option<CellRef>,
    pub keys: Vec<Keystroke>,
    pub export_dir: Option<PathBuf>,
    pub output: OutputFormat,
    pub grid: GridKind,
    pub empty_row_budget: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let sort = self.sort.as_deref().map(parse_sort).transpose()?;
        let filter = self.filter.as_deref().map(parse_filter).transpose()?;

        let hidden = self
            .hide
            .iter()
            .map(|name| name.parse::<Field>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let actions = self
            .actions
            .iter()
            .map(|arg| parse_action(arg))
            .collect::<Result<Vec<_>, _>>()?;

        let select = self
            .select
            .as_deref()
            .map(|address| {
                parse_address(address).ok_or_else(|| format!("invalid cell address: {}", address))
            })
            .transpose()?;

        let keys = match self.keys.as_deref() {
            Some(keys) => keys
                .split(',')
                .filter(|k| !k.trim().is_empty())
                .map(|k| k.parse::<Keystroke>().map_err(|e| e.to_string()))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(StartupConfig {
            input: self.input,
            sort,
            filter,
            hidden,
            actions,
            list_actions: self.list_actions,
            select,
            keys,
            export_dir: self.export,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
            grid: if self.sheet {
                GridKind::Sheet
            } else {
                GridKind::Records
            },
            empty_row_budget: self.budget,
        })
    }
}

fn parse_sort(arg: &str) -> Result<SortDirective, String> {
    let (field, direction) = match arg.split_once(':') {
        Some((field, dir)) => (field, dir),
        None => (arg, "asc"),
    };
    let field = field.parse::<Field>().map_err(|e| e.to_string())?;
    let direction = match direction.to_ascii_lowercase().as_str() {
        "asc" | "ascending" => SortDirection::Asc,
        "desc" | "descending" => SortDirection::Desc,
        other => return Err(format!("invalid sort direction: {}", other)),
    };
    Ok(SortDirective::new(field, direction))
}

fn parse_filter(arg: &str) -> Result<FilterDirective, String> {
    let (field, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("filter must be FIELD=TEXT: {}", arg))?;
    let field = field.parse::<Field>().map_err(|e| e.to_string())?;
    Ok(FilterDirective::new(field, value))
}

/// Decode `NAME[=PAYLOAD]` against the toolbar registry
fn parse_action(arg: &str) -> Result<Action, String> {
    let (name, payload) = match arg.split_once('=') {
        Some((name, payload)) => (name.trim(), Some(payload)),
        None => (arg.trim(), None),
    };
    let def = action_def(name).ok_or_else(|| format!("unknown action: {}", name))?;

    let payload = match (def.takes_payload, payload) {
        (true, None) => return Err(format!("action {} needs a payload", name)),
        (false, Some(_)) => return Err(format!("action {} takes no payload", name)),
        (true, Some(raw)) => Some(
            serde_json::from_str(raw)
                .unwrap_or_else(|_| serde_json::Value::String(raw.to_string())),
        ),
        (false, None) => None,
    };

    Action::from_name(def.name, payload).map_err(|e| e.to_string())
}
