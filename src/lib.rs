// src/lib.rs

pub mod batch;
pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::batch::{load_and_validate, load_and_validate_as};
use crate::cli::CliArgs;
use crate::errors::TaskOrderError;

pub use crate::batch::{TaskBatch, TaskDescriptor};
pub use crate::dag::{FallbackReason, Schedule, ScheduleStatus, Strategy, recommend_order, schedule};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - batch loading and validation
/// - the scheduler
/// - report rendering to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let input_path = PathBuf::from(&args.input);
    let batch = match args.input_format {
        Some(format) => load_and_validate_as(&input_path, format)?,
        None => load_and_validate(&input_path)?,
    };
    info!(
        path = %input_path.display(),
        tasks = batch.len(),
        "loaded task batch"
    );

    if args.dry_run {
        print!("{}", report::render_dry_run(&batch)?);
        debug!("dry-run complete (no ordering)");
        return Ok(());
    }

    let outcome = dag::schedule(&batch.tasks);
    print!("{}", report::render(&outcome, args.format)?);

    if args.fail_on_fallback {
        if let Some(reason) = outcome.fallback_reason() {
            return Err(TaskOrderError::FallbackRejected(reason.to_string()).into());
        }
    }

    Ok(())
}
