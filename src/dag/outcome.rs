// src/dag/outcome.rs

//! Result types for a scheduling call.

use std::fmt;

use serde::Serialize;

/// Recommended order plus how it was produced.
///
/// `order` is exactly what [`recommend_order`](crate::dag::recommend_order)
/// returns; `status` lets a caller tell a dependency-aware order apart from
/// the due-date fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub order: Vec<String>,
    pub status: ScheduleStatus,
}

impl Schedule {
    pub fn ordered(order: Vec<String>, strategy: Strategy) -> Self {
        Self {
            order,
            status: ScheduleStatus::Ordered { strategy },
        }
    }

    pub fn fallback(order: Vec<String>, reason: FallbackReason) -> Self {
        Self {
            order,
            status: ScheduleStatus::FallbackOrdered { reason },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.status, ScheduleStatus::FallbackOrdered { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match &self.status {
            ScheduleStatus::FallbackOrdered { reason } => Some(reason),
            ScheduleStatus::Ordered { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Every task was placed by the chosen strategy.
    Ordered { strategy: Strategy },
    /// The dependency traversal could not place every task; the order is a
    /// plain due-date sort of the whole batch and may violate dependencies.
    #[serde(rename = "fallback")]
    FallbackOrdered { reason: FallbackReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// No task declared a dependency: sorted by due date, then estimate.
    DueDate,
    /// Topological traversal with due date / title priority.
    Dependencies,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cause", rename_all = "snake_case")]
pub enum FallbackReason {
    /// Tasks whose indegree never reached zero (cycle members, tasks
    /// downstream of a cycle, self references). Sorted by title.
    Unresolved { blocked: Vec<String> },
    /// The batch repeated titles, so the graph had fewer nodes than the
    /// batch had tasks.
    DuplicateTitles { titles: Vec<String> },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Unresolved { blocked } => {
                write!(f, "unresolvable dependencies for: {}", blocked.join(", "))
            }
            FallbackReason::DuplicateTitles { titles } => {
                write!(f, "duplicate task titles: {}", titles.join(", "))
            }
        }
    }
}
