// src/batch/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::batch::model::{RawTaskBatch, TaskBatch};
use crate::errors::Result;
use crate::types::InputFormat;

/// Load a batch file from a given path and return the raw `RawTaskBatch`.
///
/// The format is chosen from the extension (see [`InputFormat::from_path`]).
/// This only performs deserialization; use [`load_and_validate`] to get
/// scheduler-ready descriptors.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskBatch> {
    let path = path.as_ref();
    load_from_path_as(path, InputFormat::from_path(path))
}

/// Like [`load_from_path`], with the format given explicitly.
pub fn load_from_path_as(path: impl AsRef<Path>, format: InputFormat) -> Result<RawTaskBatch> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    debug!(path = %path.display(), ?format, "read task batch file");

    parse_batch(&contents, format)
}

/// Deserialize batch text in the given format.
pub fn parse_batch(contents: &str, format: InputFormat) -> Result<RawTaskBatch> {
    let raw = match format {
        InputFormat::Toml => toml::from_str(contents)?,
        InputFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a batch file from path and validate its entries.
///
/// - Reads TOML or JSON.
/// - Rejects blank titles, non-positive hour estimates and unparseable
///   due dates.
/// - Leaves duplicates, dangling references and cycles to the scheduler.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskBatch> {
    let raw = load_from_path(&path)?;
    let batch = TaskBatch::try_from(raw)?;
    Ok(batch)
}

/// Like [`load_and_validate`], ignoring the file extension.
pub fn load_and_validate_as(path: impl AsRef<Path>, format: InputFormat) -> Result<TaskBatch> {
    let raw = load_from_path_as(&path, format)?;
    let batch = TaskBatch::try_from(raw)?;
    Ok(batch)
}

/// Default batch file: `Tasks.toml` in the current working directory.
pub fn default_input_path() -> PathBuf {
    PathBuf::from("Tasks.toml")
}
