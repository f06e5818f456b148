// src/dag/diagnostics.rs

//! Read-only checks used to explain a batch: cycles, duplicates and
//! references to tasks that are not in the batch.
//!
//! None of these affect the order the scheduler produces.

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::batch::model::TaskDescriptor;
use crate::dag::graph::DependencyGraph;

/// Dependency cycles among resolvable references.
///
/// Returns every strongly connected component with more than one task,
/// plus every task that lists itself. Each cycle is sorted by title and the
/// list of cycles is sorted, so output is stable across runs.
pub fn find_cycles(tasks: &[TaskDescriptor]) -> Vec<Vec<String>> {
    let dag = DependencyGraph::build(tasks);

    // Edge direction: dep -> task, same as the scheduler's graph.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for title in dag.titles() {
        graph.add_node(title);
    }
    for (from, to) in dag.edges() {
        graph.add_edge(from, to, ());
    }

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| match component.as_slice() {
            [single] => graph.contains_edge(*single, *single),
            _ => true,
        })
        .map(|component| {
            let mut titles: Vec<String> = component.into_iter().map(str::to_string).collect();
            titles.sort();
            titles
        })
        .collect();

    cycles.sort();
    cycles
}

/// Titles that occur more than once in the batch, sorted.
pub fn duplicate_titles(tasks: &[TaskDescriptor]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for task in tasks {
        *counts.entry(task.title.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(title, _)| title.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `(task, dependency)` pairs where the dependency names no task in the
/// batch. In input order.
pub fn dangling_references(tasks: &[TaskDescriptor]) -> Vec<(String, String)> {
    let known: HashSet<&str> = tasks.iter().map(|t| t.title.as_str()).collect();

    let mut dangling = Vec::new();
    for task in tasks {
        for dep in &task.dependencies {
            if !known.contains(dep.as_str()) {
                dangling.push((task.title.clone(), dep.clone()));
            }
        }
    }
    dangling
}
