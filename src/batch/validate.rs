// src/batch/validate.rs

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::batch::model::{RawTaskBatch, RawTaskEntry, TaskBatch, TaskDescriptor, parse_due_date};
use crate::dag::diagnostics::{dangling_references, duplicate_titles, find_cycles};
use crate::errors::{Result, TaskOrderError};

impl TryFrom<RawTaskBatch> for TaskBatch {
    type Error = TaskOrderError;

    fn try_from(raw: RawTaskBatch) -> std::result::Result<Self, Self::Error> {
        let entries = raw.tasks.unwrap_or_default();

        let tasks = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| validate_entry(position, entry))
            .collect::<Result<Vec<_>>>()?;

        report_scheduling_hazards(&tasks);

        Ok(TaskBatch::new_unchecked(tasks))
    }
}

fn validate_entry(position: usize, entry: RawTaskEntry) -> Result<TaskDescriptor> {
    let title = entry.title.as_str();
    if title.trim().is_empty() {
        return Err(TaskOrderError::InputError(format!(
            "task #{} has an empty title",
            position + 1
        )));
    }

    let estimated_hours = match entry.estimated_hours {
        None => None,
        Some(hours) if hours <= 0 => {
            return Err(TaskOrderError::InputError(format!(
                "task '{}' has estimated_hours {} (must be >= 1)",
                title, hours
            )));
        }
        Some(hours) => Some(u32::try_from(hours).map_err(|_| {
            TaskOrderError::InputError(format!(
                "task '{}' has estimated_hours {} (too large)",
                title, hours
            ))
        })?),
    };

    let due_date = match entry.due_date.as_deref() {
        None => None,
        Some(text) if text.trim().is_empty() => None,
        Some(text) => Some(parse_due_date(text).ok_or_else(|| {
            TaskOrderError::InputError(format!(
                "task '{}' has unparseable due_date '{}' (expected RFC 3339 or YYYY-MM-DD)",
                title, text
            ))
        })?),
    };

    // References must match titles byte for byte; an empty or padded
    // reference simply dangles.
    let dependencies: BTreeSet<String> = entry.dependencies.unwrap_or_default().into_iter().collect();

    Ok(TaskDescriptor {
        title: title.to_string(),
        estimated_hours,
        due_date,
        dependencies,
    })
}

/// Log conditions that the scheduler tolerates but a user probably did not
/// intend. None of these fail validation.
fn report_scheduling_hazards(tasks: &[TaskDescriptor]) {
    for title in duplicate_titles(tasks) {
        warn!(task = %title, "duplicate task title; the last definition wins in dependency lookups");
    }

    for (task, dep) in dangling_references(tasks) {
        warn!(task = %task, dep = %dep, "dependency not in batch; ignoring");
    }

    for cycle in find_cycles(tasks) {
        match cycle.as_slice() {
            [single] => warn!(
                task = %single,
                "task depends on itself; ordering will fall back to due dates"
            ),
            _ => warn!(
                ?cycle,
                "dependency cycle; ordering will fall back to due dates"
            ),
        }
    }

    debug!(tasks = tasks.len(), "validated task batch");
}
