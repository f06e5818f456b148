#![allow(dead_code)]

use taskorder::batch::{RawTaskBatch, RawTaskEntry, TaskBatch, TaskDescriptor, parse_due_date};

/// Builder for a validated `TaskDescriptor`, for tests that call the
/// scheduler directly.
pub struct TaskBuilder {
    task: TaskDescriptor,
}

impl TaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskDescriptor::new(title),
        }
    }

    /// Due date in any shape `parse_due_date` accepts, e.g. `"2024-01-05"`.
    pub fn due(mut self, date: &str) -> Self {
        let parsed = parse_due_date(date)
            .unwrap_or_else(|| panic!("invalid due date in test builder: {date}"));
        self.task = self.task.with_due_date(parsed);
        self
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.task = self.task.with_estimated_hours(hours);
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task = self.task.with_dependency(dep);
        self
    }

    pub fn build(self) -> TaskDescriptor {
        self.task
    }
}

/// Builder for `RawTaskEntry`, mirroring what a batch file would contain.
pub struct RawTaskBuilder {
    entry: RawTaskEntry,
}

impl RawTaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            entry: RawTaskEntry {
                title: title.to_string(),
                estimated_hours: None,
                due_date: None,
                dependencies: None,
            },
        }
    }

    pub fn due(mut self, date: &str) -> Self {
        self.entry.due_date = Some(date.to_string());
        self
    }

    pub fn hours(mut self, hours: i64) -> Self {
        self.entry.estimated_hours = Some(hours);
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.entry
            .dependencies
            .get_or_insert_with(Vec::new)
            .push(dep.to_string());
        self
    }

    pub fn build(self) -> RawTaskEntry {
        self.entry
    }
}

/// Builder for `TaskBatch` that goes through validation, like a loaded file.
pub struct BatchBuilder {
    raw: RawTaskBatch,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawTaskBatch { tasks: None },
        }
    }

    pub fn with_task(mut self, entry: RawTaskEntry) -> Self {
        self.raw.tasks.get_or_insert_with(Vec::new).push(entry);
        self
    }

    pub fn build_raw(self) -> RawTaskBatch {
        self.raw
    }

    pub fn build(self) -> TaskBatch {
        TaskBatch::try_from(self.raw).expect("Failed to build valid batch from builder")
    }
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
