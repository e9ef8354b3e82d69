//! CSV export and import for the record store
//!
//! Export always writes canonical order with a fixed header row. Import skips
//! the header, drops rows without a job request, and renumbers survivors.

use serde::{Deserialize, Serialize};

use super::{ExportError, ImportError};
use crate::records::{Field, Record};

/// How exported fields are quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Quote only fields containing a delimiter, quote or line break (RFC 4180)
    #[default]
    Necessary,
    /// Quote every field
    Always,
}

impl QuoteStyle {
    fn to_csv(self) -> csv::QuoteStyle {
        match self {
            QuoteStyle::Necessary => csv::QuoteStyle::Necessary,
            QuoteStyle::Always => csv::QuoteStyle::Always,
        }
    }
}

/// How imported CSV lines are split into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvDialect {
    /// Quote-aware parsing
    #[default]
    Rfc4180,
    /// Plain comma split with no quote handling
    Legacy,
}

/// Serialize records to CSV in the order given
pub fn export_csv(records: &[Record], quote_style: QuoteStyle) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(quote_style.to_csv())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(Field::ALL.iter().map(|f| f.header()))?;
    for record in records {
        writer.write_record(record.values())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse CSV content into records
pub fn parse_csv(content: &str, dialect: CsvDialect) -> Result<Vec<Record>, ImportError> {
    let rows = match dialect {
        CsvDialect::Rfc4180 => split_rfc4180(content)?,
        CsvDialect::Legacy => split_legacy(content),
    };

    let records = rows
        .into_iter()
        .filter_map(|values| row_to_record(&values))
        .enumerate()
        .map(|(i, mut record)| {
            record.id = (i + 1).to_string();
            record
        })
        .collect();

    Ok(records)
}

fn split_rfc4180(content: &str) -> Result<Vec<Vec<String>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ImportError::Csv {
            message: e.to_string(),
            line: line_num + 2,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn split_legacy(content: &str) -> Vec<Vec<String>> {
    content
        .split('\n')
        .skip(1)
        .map(|line| {
            line.trim_end_matches('\r')
                .split(',')
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Build a record from positional values; `None` when the job request is empty
///
/// Quote characters are stripped from the job request in either dialect.
fn row_to_record(values: &[String]) -> Option<Record> {
    let value = |i: usize| values.get(i).cloned().unwrap_or_default();

    let job_request = value(1).replace('"', "");
    if job_request.is_empty() {
        return None;
    }

    let mut record = Record {
        job_request,
        ..Default::default()
    };
    for field in &Field::ALL[2..] {
        record.set(*field, value(field.index()));
    }
    Some(record)
}
