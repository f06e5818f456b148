// src/report.rs

//! Output assembly for the recommended order and for `--dry-run`.

use std::fmt;

use chrono::SecondsFormat;
use serde::Serialize;

use crate::batch::model::TaskBatch;
use crate::dag::diagnostics::{dangling_references, duplicate_titles, find_cycles};
use crate::dag::outcome::{Schedule, ScheduleStatus};
use crate::errors::Result;
use crate::types::OutputFormat;

/// JSON shape of a schedule. `recommendedOrder` matches the response body
/// of the project schedule endpoint; `status` is extra.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleResponse<'a> {
    recommended_order: &'a [String],
    status: &'a ScheduleStatus,
}

/// Render a schedule for stdout. The result ends with a newline unless it
/// is empty.
pub fn render(schedule: &Schedule, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(schedule)),
        OutputFormat::Json => render_json(schedule),
    }
}

/// Numbered list, one title per line.
pub fn render_text(schedule: &Schedule) -> String {
    schedule
        .order
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{}. {}\n", i + 1, title))
        .collect()
}

pub fn render_json(schedule: &Schedule) -> Result<String> {
    let response = ScheduleResponse {
        recommended_order: &schedule.order,
        status: &schedule.status,
    };
    let mut json = serde_json::to_string_pretty(&response)?;
    json.push('\n');
    Ok(json)
}

/// Describe a batch without ordering it: tasks, their keys, and anything
/// that would make the scheduler ignore or fall back on dependencies.
pub fn render_dry_run(batch: &TaskBatch) -> Result<String> {
    let mut out = String::new();
    write_dry_run(&mut out, batch).map_err(anyhow::Error::from)?;
    Ok(out)
}

fn write_dry_run(out: &mut impl fmt::Write, batch: &TaskBatch) -> fmt::Result {
    writeln!(out, "taskorder dry-run")?;
    writeln!(out)?;
    writeln!(out, "tasks ({}):", batch.len())?;

    for task in batch.iter() {
        writeln!(out, "  - {}", task.title)?;
        if let Some(due) = task.due_date {
            writeln!(
                out,
                "      due_date: {}",
                due.to_rfc3339_opts(SecondsFormat::Secs, true)
            )?;
        }
        if let Some(hours) = task.estimated_hours {
            writeln!(out, "      estimated_hours: {hours}")?;
        }
        if task.has_dependencies() {
            writeln!(out, "      dependencies: {:?}", task.dependencies)?;
        }
    }

    let duplicates = duplicate_titles(&batch.tasks);
    if !duplicates.is_empty() {
        writeln!(out)?;
        writeln!(out, "duplicate titles:")?;
        for title in duplicates {
            writeln!(out, "  - {title}")?;
        }
    }

    let dangling = dangling_references(&batch.tasks);
    if !dangling.is_empty() {
        writeln!(out)?;
        writeln!(out, "ignored dependencies (not in batch):")?;
        for (task, dep) in dangling {
            writeln!(out, "  - {task} -> {dep}")?;
        }
    }

    let cycles = find_cycles(&batch.tasks);
    if !cycles.is_empty() {
        writeln!(out)?;
        writeln!(out, "cycles (order will fall back to due dates):")?;
        for cycle in cycles {
            writeln!(out, "  - {}", cycle.join(" <-> "))?;
        }
    }

    Ok(())
}
