//! JSON import/export for the record store

use super::{ExportError, ImportError};
use crate::records::Record;

/// Parse a JSON array of record objects
///
/// Keys follow the camelCase field keys. Missing keys become empty text and
/// non-string scalars are kept as their JSON text; nothing else is validated.
pub fn parse_json(content: &str) -> Result<Vec<Record>, ImportError> {
    Ok(serde_json::from_str(content)?)
}

/// Serialize records as a pretty-printed JSON array
pub fn export_json(records: &[Record]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}
