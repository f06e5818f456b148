// src/dag/scheduler.rs

use tracing::{debug, info, warn};

use crate::batch::model::TaskDescriptor;
use crate::dag::diagnostics::{duplicate_titles, find_cycles};
use crate::dag::frontier::PriorityFrontier;
use crate::dag::graph::DependencyGraph;
use crate::dag::outcome::{FallbackReason, Schedule, Strategy};

/// Recommended execution order for a batch of tasks, as titles.
///
/// Never fails: an empty batch gives an empty order, dangling references
/// are ignored, and an inconsistent dependency structure falls back to a
/// due-date sort. Use [`schedule`] to find out which of those happened.
pub fn recommend_order(tasks: &[TaskDescriptor]) -> Vec<String> {
    schedule(tasks).order
}

/// Same order as [`recommend_order`], tagged with how it was produced.
///
/// - No task declares a dependency: sort by `(due date, estimate)`.
/// - Otherwise: Kahn traversal over the dependency graph, always taking the
///   ready task with the earliest due date (title breaks ties).
/// - If the traversal emits fewer titles than the batch holds, the partial
///   result is dropped and the whole batch is sorted by due date only.
pub fn schedule(tasks: &[TaskDescriptor]) -> Schedule {
    if tasks.is_empty() {
        debug!("scheduler: empty batch");
        return Schedule::ordered(Vec::new(), Strategy::DueDate);
    }

    if !tasks.iter().any(TaskDescriptor::has_dependencies) {
        debug!(
            tasks = tasks.len(),
            "scheduler: no dependencies declared; sorting by due date and estimate"
        );
        return Schedule::ordered(sort_by_due_and_effort(tasks), Strategy::DueDate);
    }

    let graph = DependencyGraph::build(tasks);
    let traversal = traverse(&graph);

    if traversal.emitted.len() == tasks.len() {
        info!(
            tasks = tasks.len(),
            "scheduler: dependency-aware order complete"
        );
        let order = traversal.emitted.into_iter().map(str::to_string).collect();
        return Schedule::ordered(order, Strategy::Dependencies);
    }

    let reason = if traversal.blocked.is_empty() {
        FallbackReason::DuplicateTitles {
            titles: duplicate_titles(tasks),
        }
    } else {
        let mut blocked: Vec<String> = traversal.blocked.into_iter().map(str::to_string).collect();
        blocked.sort();
        FallbackReason::Unresolved { blocked }
    };

    warn!(
        emitted = traversal.emitted.len(),
        tasks = tasks.len(),
        cycles = ?find_cycles(tasks),
        %reason,
        "scheduler: traversal incomplete; falling back to due-date order"
    );

    Schedule::fallback(sort_by_due(tasks), reason)
}

/// Titles emitted by a traversal, and the nodes it never reached.
struct Traversal<'a> {
    emitted: Vec<&'a str>,
    blocked: Vec<&'a str>,
}

fn traverse<'a>(graph: &DependencyGraph<'a>) -> Traversal<'a> {
    let mut indegree = graph.indegrees();
    let mut frontier = PriorityFrontier::with_capacity(graph.len());

    for (node, &degree) in indegree.iter().enumerate() {
        if degree == 0 {
            frontier.insert(graph.task(node).due_key(), graph.title_of(node), node);
        }
    }

    let mut emitted = Vec::with_capacity(graph.len());

    while let Some(ready) = frontier.extract_min() {
        debug!(task = %ready.title, due = ?ready.due, "scheduler: emitting task");
        emitted.push(ready.title);

        for &dependent in graph.dependents_of(ready.node) {
            indegree[dependent] -= 1;
            if indegree[dependent] == 0 {
                frontier.insert(
                    graph.task(dependent).due_key(),
                    graph.title_of(dependent),
                    dependent,
                );
            }
        }
    }

    let blocked = indegree
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree > 0)
        .map(|(node, _)| graph.title_of(node))
        .collect();

    Traversal { emitted, blocked }
}

/// Fast path: due date, then estimate, missing values last. Stable, so
/// tasks equal on both keys keep their input order.
fn sort_by_due_and_effort(tasks: &[TaskDescriptor]) -> Vec<String> {
    let mut sorted: Vec<&TaskDescriptor> = tasks.iter().collect();
    sorted.sort_by_key(|t| (t.due_key(), t.hours_key()));
    sorted.into_iter().map(|t| t.title.clone()).collect()
}

/// Fallback: due date only. Dependencies, estimates and titles are ignored.
fn sort_by_due(tasks: &[TaskDescriptor]) -> Vec<String> {
    let mut sorted: Vec<&TaskDescriptor> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.due_key());
    sorted.into_iter().map(|t| t.title.clone()).collect()
}
