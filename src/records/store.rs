//! Canonical record store
//!
//! Insertion order is canonical order: it drives identifiers and export.
//! The store is the only writer of record data.

use serde::{Deserialize, Deserializer, Serialize};

use super::field::Field;

/// A single row of the record grid
///
/// Values are plain text. JSON numbers and booleans are accepted on import
/// and kept as their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub job_request: String,
    #[serde(deserialize_with = "lenient_text")]
    pub submitted: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(deserialize_with = "lenient_text")]
    pub submitter: String,
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(deserialize_with = "lenient_text")]
    pub assigned: String,
    #[serde(deserialize_with = "lenient_text")]
    pub priority: String,
    #[serde(deserialize_with = "lenient_text")]
    pub due_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub est_value: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::JobRequest => &self.job_request,
            Field::Submitted => &self.submitted,
            Field::Status => &self.status,
            Field::Submitter => &self.submitter,
            Field::Url => &self.url,
            Field::Assigned => &self.assigned,
            Field::Priority => &self.priority,
            Field::DueDate => &self.due_date,
            Field::EstValue => &self.est_value,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Id => &mut self.id,
            Field::JobRequest => &mut self.job_request,
            Field::Submitted => &mut self.submitted,
            Field::Status => &mut self.status,
            Field::Submitter => &mut self.submitter,
            Field::Url => &mut self.url,
            Field::Assigned => &mut self.assigned,
            Field::Priority => &mut self.priority,
            Field::DueDate => &mut self.due_date,
            Field::EstValue => &mut self.est_value,
        }
    }

    /// Replace one field, returning the previous value
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> String {
        std::mem::replace(self.slot_mut(field), value.into())
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Values in canonical field order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        Field::ALL.into_iter().map(move |f| self.get(f))
    }
}

/// Ordered, single-writer collection of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Store pre-filled with the demonstration rows
    pub fn seeded() -> Self {
        Self::from_records(seed_records())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Append a record, assigning `len + 1` as its identifier
    ///
    /// Returns the canonical index of the new record. The identifier is not
    /// checked for uniqueness; a collision is only logged.
    pub fn append(&mut self, mut record: Record) -> usize {
        let id = (self.records.len() + 1).to_string();
        if self.records.iter().any(|r| r.id == id) {
            tracing::warn!(id = %id, "appended record reuses an existing identifier");
        }
        record.id = id;
        self.records.push(record);
        self.records.len() - 1
    }

    /// Write one field of the record at canonical position `index`
    ///
    /// An index past the end materializes a new record holding only this
    /// field (plus its generated identifier). Returns the previous value,
    /// which is empty for a materialized record.
    pub fn update_field(&mut self, index: usize, field: Field, value: &str) -> FieldUpdate {
        if let Some(record) = self.records.get_mut(index) {
            let old_value = record.set(field, value);
            return FieldUpdate {
                index,
                old_value,
                appended: false,
            };
        }

        let index = self.append(Record::default());
        let record = &mut self.records[index];
        if field != Field::Id || !value.is_empty() {
            record.set(field, value);
        }
        tracing::debug!(index, field = %field, "materialized record from virtual row");
        FieldUpdate {
            index,
            old_value: String::new(),
            appended: true,
        }
    }

    /// Replace every record wholesale
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Identifiers that occur more than once, in first-seen order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for record in &self.records {
            if !seen.insert(record.id.as_str()) && !dups.contains(&record.id.as_str()) {
                dups.push(record.id.as_str());
            }
        }
        dups
    }
}

/// Result of [`RecordStore::update_field`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Canonical index that was written
    pub index: usize,
    pub old_value: String,
    pub appended: bool,
}

#[allow(clippy::too_many_arguments)]
fn seed_record(
    id: &str,
    job_request: &str,
    submitted: &str,
    status: &str,
    submitter: &str,
    url: &str,
    assigned: &str,
    priority: &str,
    due_date: &str,
    est_value: &str,
) -> Record {
    Record {
        id: id.into(),
        job_request: job_request.into(),
        submitted: submitted.into(),
        status: status.into(),
        submitter: submitter.into(),
        url: url.into(),
        assigned: assigned.into(),
        priority: priority.into(),
        due_date: due_date.into(),
        est_value: est_value.into(),
    }
}

/// The five demonstration rows a fresh grid starts with
pub fn seed_records() -> Vec<Record> {
    vec![
        seed_record(
            "1",
            "Launch social media campaign for pro...",
            "15-11-2024",
            "In-progress",
            "Aisha Patel",
            "www.aishapatel...",
            "Sophie Choudhury",
            "Medium",
            "20-11-2024",
            "6,200,000",
        ),
        seed_record(
            "2",
            "Update press kit for company redesign",
            "28-10-2024",
            "Need to start",
            "Irfan Khan",
            "www.irfankhan...",
            "Tejas Pandey",
            "High",
            "30-10-2024",
            "3,500,000",
        ),
        seed_record(
            "3",
            "Finalize user testing feedback for app...",
            "05-12-2024",
            "In-progress",
            "Mark Johnson",
            "www.markjohns...",
            "Rachel Lee",
            "Medium",
            "10-12-2024",
            "4,750,000",
        ),
        seed_record(
            "4",
            "Design new features for the website",
            "10-01-2025",
            "Complete",
            "Emily Green",
            "www.emilygreen...",
            "Tom Wright",
            "Low",
            "15-01-2025",
            "5,800,000",
        ),
        seed_record(
            "5",
            "Prepare monthly report for Q4",
            "25-01-2025",
            "Blocked",
            "Jessica Brown",
            "www.jessicabro...",
            "Kevin Smith",
            "Low",
            "30-01-2025",
            "2,600,000",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = RecordStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.get(1).unwrap().priority, "High");
        assert!(store.duplicate_ids().is_empty());
    }

    #[test]
    fn test_append_assigns_count_plus_one() {
        let mut store = RecordStore::seeded();
        let index = store.append(Record::default().with(Field::JobRequest, "x"));
        assert_eq!(index, 5);
        assert_eq!(store.get(5).unwrap().id, "6");
    }

    #[test]
    fn test_append_can_duplicate_ids() {
        let mut store = RecordStore::from_records(vec![Record::default().with(Field::Id, "2")]);
        store.append(Record::default());
        assert_eq!(store.duplicate_ids(), vec!["2"]);
    }

    #[test]
    fn test_update_existing_field() {
        let mut store = RecordStore::seeded();
        let update = store.update_field(0, Field::Status, "Complete");
        assert_eq!(update.old_value, "In-progress");
        assert!(!update.appended);
        assert_eq!(store.get(0).unwrap().status, "Complete");
        assert_eq!(store.get(0).unwrap().priority, "Medium");
    }

    #[test]
    fn test_update_past_end_materializes_sparse_record() {
        let mut store = RecordStore::seeded();
        let update = store.update_field(17, Field::Assigned, "Dana");
        assert!(update.appended);
        assert_eq!(update.index, 5);
        assert_eq!(store.len(), 6);

        let record = store.get(5).unwrap();
        assert_eq!(record.assigned, "Dana");
        assert_eq!(record.id, "6");
        assert_eq!(record.job_request, "");
    }

    #[test]
    fn test_record_json_is_lenient() {
        let record: Record =
            serde_json::from_str(r#"{"id": 7, "jobRequest": "A", "estValue": 12.5, "url": null}"#)
                .unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.job_request, "A");
        assert_eq!(record.est_value, "12.5");
        assert_eq!(record.url, "");
        assert_eq!(record.status, "");
    }
}
