// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::{InputFormat, OutputFormat};

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Recommend an execution order for tasks with due dates and dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task batch (TOML, or JSON when the extension is `.json`).
    #[arg(short, long, value_name = "PATH", default_value = "Tasks.toml")]
    pub input: String,

    /// Input format (toml or json). Overrides detection by file extension.
    #[arg(long, value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Output format for the recommended order.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, describe the batch, but don't compute an order.
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if dependencies could not be honoured and the
    /// order fell back to due dates only.
    #[arg(long)]
    pub fail_on_fallback: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
