// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`graph`] builds the per-call adjacency lists and indegree table.
//! - [`frontier`] is the priority queue of ready tasks.
//! - [`scheduler`] runs the fast path, the traversal and the fallback.
//! - [`outcome`] defines the tagged result of a scheduling call.
//! - [`diagnostics`] reports cycles, duplicates and dangling references.

pub mod diagnostics;
pub mod frontier;
pub mod graph;
pub mod outcome;
pub mod scheduler;

pub use frontier::{PriorityFrontier, ReadyTask};
pub use graph::DependencyGraph;
pub use outcome::{FallbackReason, Schedule, ScheduleStatus, Strategy};
pub use scheduler::{recommend_order, schedule};
