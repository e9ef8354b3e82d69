//! Sort → filter view pipeline
//!
//! [`derive_view`] is a pure function of the records and the active
//! directives. It never touches the store, so it can be recomputed after
//! every state change.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

/// Single active sort: field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    #[serde(alias = "key")]
    pub field: Field,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(field: Field, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ord = a.get(self.field).cmp(b.get(self.field));
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Single active filter: case-insensitive substring match on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDirective {
    #[serde(alias = "column")]
    pub field: Field,
    pub value: String,
}

impl FilterDirective {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        record
            .get(self.field)
            .to_lowercase()
            .contains(&self.value.to_lowercase())
    }
}

/// Presentation configuration owned by the model and passed to the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewConfig {
    pub sort: Option<SortDirective>,
    pub filter: Option<FilterDirective>,
    pub hidden: BTreeSet<Field>,
}

impl ViewConfig {
    /// Hide a visible field or show a hidden one; returns true if now hidden
    pub fn toggle_hidden(&mut self, field: Field) -> bool {
        if self.hidden.remove(&field) {
            false
        } else {
            self.hidden.insert(field);
            true
        }
    }

    pub fn is_hidden(&self, field: Field) -> bool {
        self.hidden.contains(&field)
    }

    /// Fields to render, in canonical order
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.hidden.contains(f))
            .collect()
    }
}

/// The derived display order: canonical indices of the records to show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    rows: Vec<usize>,
}

impl View {
    /// Identity view over `len` records
    pub fn unsorted(len: usize) -> Self {
        Self {
            rows: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Canonical index shown at view row `row`
    pub fn canonical_index(&self, row: usize) -> Option<usize> {
        self.rows.get(row).copied()
    }

    pub fn indices(&self) -> &[usize] {
        &self.rows
    }

    /// Resolve the view against the records it was derived from
    pub fn records<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        self.rows.iter().filter_map(move |&i| records.get(i))
    }
}

/// Derive the displayed sequence: stable sort, then filter
///
/// Records comparing equal on the sort field keep their canonical order.
pub fn derive_view(
    records: &[Record],
    sort: Option<&SortDirective>,
    filter: Option<&FilterDirective>,
) -> View {
    let mut rows: Vec<usize> = (0..records.len()).collect();

    if let Some(sort) = sort {
        rows.sort_by(|&a, &b| sort.compare(&records[a], &records[b]));
    }

    if let Some(filter) = filter {
        rows.retain(|&i| filter.matches(&records[i]));
    }

    View { rows }
}
