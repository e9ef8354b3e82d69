//! Import/export codecs for the record store
//!
//! Import is dispatched by file extension:
//! - `.json` - whole-array replace
//! - `.csv` - header-skipping row parse
//! - anything else - ignored

mod csv;
mod json;

use std::path::{Path, PathBuf};

use crate::records::Record;

pub use self::csv::{export_csv, parse_csv, CsvDialect, QuoteStyle};
pub use self::json::{export_json, parse_json};

/// Notification text shown when an import fails
pub const IMPORT_FAILED_MESSAGE: &str = "Error importing data. Please check the file format.";

/// Notification text shown when an import succeeds
pub const IMPORT_SUCCEEDED_MESSAGE: &str = "Data imported successfully!";

/// Error raised while importing a file
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV parse error at line {line}: {message}")]
    Csv { message: String, line: usize },
}

/// Error raised while serializing an export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supported import file types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Detect format from a file name's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(ImportFormat::Json),
            "csv" => Some(ImportFormat::Csv),
            _ => None,
        }
    }
}

/// Parse file content according to its extension
///
/// Returns `Ok(None)` for unsupported extensions, which callers ignore.
pub fn import_records(
    path: &Path,
    content: &str,
    dialect: CsvDialect,
) -> Result<Option<Vec<Record>>, ImportError> {
    match ImportFormat::from_path(path) {
        Some(ImportFormat::Json) => parse_json(content).map(Some),
        Some(ImportFormat::Csv) => parse_csv(content, dialect).map(Some),
        None => Ok(None),
    }
}
