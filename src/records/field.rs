//! Record field schema and render hints
//!
//! Every field is stored as text. Status, priority, links and money are only
//! interpreted when a cell is rendered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named column of the record grid, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    JobRequest,
    Submitted,
    Status,
    Submitter,
    Url,
    Assigned,
    Priority,
    DueDate,
    EstValue,
}

/// How presentation should draw a field's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    Identifier,
    Text,
    Date,
    Status,
    Person,
    Link,
    Priority,
    Currency,
}

impl Field {
    /// All fields in canonical (export) order
    pub const ALL: [Field; 10] = [
        Field::Id,
        Field::JobRequest,
        Field::Submitted,
        Field::Status,
        Field::Submitter,
        Field::Url,
        Field::Assigned,
        Field::Priority,
        Field::DueDate,
        Field::EstValue,
    ];

    /// Position of this field in [`Field::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field at a column position
    pub fn from_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }

    /// Key used in JSON records and action payloads
    pub fn key(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::JobRequest => "jobRequest",
            Field::Submitted => "submitted",
            Field::Status => "status",
            Field::Submitter => "submitter",
            Field::Url => "url",
            Field::Assigned => "assigned",
            Field::Priority => "priority",
            Field::DueDate => "dueDate",
            Field::EstValue => "estValue",
        }
    }

    /// CSV export header
    pub fn header(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::JobRequest => "Job Request",
            Field::Submitted => "Submitted",
            Field::Status => "Status",
            Field::Submitter => "Submitter",
            Field::Url => "URL",
            Field::Assigned => "Assigned",
            Field::Priority => "Priority",
            Field::DueDate => "Due Date",
            Field::EstValue => "Est. Value",
        }
    }

    /// Column title shown above the grid
    pub fn title(self) -> &'static str {
        match self {
            Field::Id => "#",
            other => other.header(),
        }
    }

    pub fn render_hint(self) -> RenderHint {
        match self {
            Field::Id => RenderHint::Identifier,
            Field::JobRequest => RenderHint::Text,
            Field::Submitted | Field::DueDate => RenderHint::Date,
            Field::Status => RenderHint::Status,
            Field::Submitter | Field::Assigned => RenderHint::Person,
            Field::Url => RenderHint::Link,
            Field::Priority => RenderHint::Priority,
            Field::EstValue => RenderHint::Currency,
        }
    }

    /// Interpret a raw cell value for display
    pub fn render(self, value: &str) -> Rendered<'_> {
        if value.is_empty() {
            return Rendered::Empty;
        }
        match self.render_hint() {
            RenderHint::Status => Rendered::Status(Status::parse(value), value),
            RenderHint::Priority => Rendered::Priority(Priority::parse(value), value),
            RenderHint::Link => Rendered::Link(value),
            RenderHint::Currency => Rendered::Currency(value),
            _ => Rendered::Plain(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for an unrecognized field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the JSON key or the export header, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(needle) || f.header().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Workflow status, interpreted from free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    NeedToStart,
    Complete,
    Blocked,
    Other,
}

impl Status {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "in-progress" => Status::InProgress,
            "need to start" => Status::NeedToStart,
            "complete" => Status::Complete,
            "blocked" => Status::Blocked,
            _ => Status::Other,
        }
    }
}

/// Task priority, interpreted from free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
    Other,
}

impl Priority {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other,
        }
    }
}

/// A cell value after render-time interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered<'a> {
    Empty,
    Plain(&'a str),
    Status(Status, &'a str),
    Priority(Priority, &'a str),
    Link(&'a str),
    Currency(&'a str),
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Empty => Ok(()),
            Rendered::Plain(text) | Rendered::Link(text) => f.write_str(text),
            Rendered::Status(_, text) => write!(f, "[{}]", text),
            Rendered::Priority(_, text) => f.write_str(text),
            Rendered::Currency(amount) => write!(f, "₹{}", amount),
        }
    }
}
