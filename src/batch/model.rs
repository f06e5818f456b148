// src/batch/model.rs

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;

/// Top-level batch file as read from TOML or JSON.
///
/// TOML form:
///
/// ```toml
/// [[task]]
/// title = "Design"
/// due_date = "2024-01-05"
///
/// [[task]]
/// title = "Build"
/// due_date = "2024-01-03"
/// dependencies = ["Design"]
/// ```
///
/// JSON form, matching the schedule request body:
///
/// ```json
/// { "tasks": [ { "title": "Build", "dueDate": "2024-01-03", "dependencies": ["Design"] } ] }
/// ```
///
/// A missing (or `null`) task list is an empty batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTaskBatch {
    #[serde(default, alias = "task")]
    pub tasks: Option<Vec<RawTaskEntry>>,
}

/// One unvalidated task entry.
///
/// Field names are accepted in camelCase (JSON) and snake_case (TOML);
/// `after` is accepted as an alias of `dependencies`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTaskEntry {
    #[serde(default)]
    pub title: String,

    /// Effort estimate in whole hours. Kept signed here so that validation
    /// can report zero or negative values instead of a serde error.
    #[serde(default, alias = "estimated_hours")]
    pub estimated_hours: Option<i64>,

    /// Due date as text; see [`parse_due_date`] for the accepted shapes.
    #[serde(default, alias = "due_date", alias = "due")]
    pub due_date: Option<String>,

    #[serde(default, alias = "after")]
    pub dependencies: Option<Vec<String>>,
}

/// Validated batch: the list handed to the scheduler.
///
/// Order of `tasks` is the order of the input file. Duplicate titles,
/// dangling references and cycles are all allowed here; they are policy
/// decisions of the scheduler, not validation failures.
#[derive(Debug, Clone, Default)]
pub struct TaskBatch {
    pub tasks: Vec<TaskDescriptor>,
}

impl TaskBatch {
    /// Construct without validation. Prefer `TaskBatch::try_from(raw)`.
    pub fn new_unchecked(tasks: Vec<TaskDescriptor>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskDescriptor> {
        self.tasks.iter()
    }
}

/// Immutable input record for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    /// Identity of the task within its batch.
    pub title: String,
    /// Effort estimate; `None` sorts after every real estimate.
    pub estimated_hours: Option<u32>,
    /// `None` sorts after every real due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Titles of other tasks in the same batch this one waits for.
    pub dependencies: BTreeSet<String>,
}

impl TaskDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            estimated_hours: None,
            due_date: None,
            dependencies: BTreeSet::new(),
        }
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_estimated_hours(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_dependency(mut self, title: impl Into<String>) -> Self {
        self.dependencies.insert(title.into());
        self
    }

    /// Whether this task declares any dependency, resolvable or not.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    pub fn due_key(&self) -> DueKey {
        DueKey::from(self.due_date)
    }

    /// Effort key for sorting: a missing estimate counts as the largest value.
    pub fn hours_key(&self) -> u32 {
        self.estimated_hours.unwrap_or(u32::MAX)
    }
}

/// Sort key for a due date where "no due date" is later than any real one.
///
/// Variant order matters: the derived `Ord` puts every `At` before
/// `Unscheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DueKey {
    At(DateTime<Utc>),
    Unscheduled,
}

impl From<Option<DateTime<Utc>>> for DueKey {
    fn from(due: Option<DateTime<Utc>>) -> Self {
        match due {
            Some(at) => DueKey::At(at),
            None => DueKey::Unscheduled,
        }
    }
}

/// Parse a due date string.
///
/// Accepted, in order:
/// - RFC 3339 (`2024-01-05T10:00:00+02:00`), normalised to UTC
/// - naive date-time (`2024-01-05T10:00:00`, `2024-01-05 10:00:00`), taken as UTC
/// - plain date (`2024-01-05`), midnight UTC
pub fn parse_due_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
