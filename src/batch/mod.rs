// src/batch/mod.rs

//! Task batch input for taskorder.
//!
//! Responsibilities:
//! - Define the on-disk data model and the validated descriptors (`model.rs`).
//! - Load a batch file from disk in TOML or JSON form (`loader.rs`).
//! - Validate raw entries into [`TaskDescriptor`] values (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_input_path, load_and_validate, load_and_validate_as, load_from_path,
    load_from_path_as, parse_batch,
};
pub use model::{DueKey, RawTaskBatch, RawTaskEntry, TaskBatch, TaskDescriptor, parse_due_date};
