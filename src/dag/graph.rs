// src/dag/graph.rs

use std::collections::HashMap;

use crate::batch::model::TaskDescriptor;

/// Dependency graph for one batch of tasks.
///
/// Nodes are dense indices assigned in order of first appearance of each
/// title. Edges point from a dependency to the tasks that depend on it, so
/// walking `dependents_of` follows the execution direction.
///
/// The graph borrows the batch it was built from and lives for a single
/// scheduling call.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    /// Descriptor per node. For a repeated title this is the last one seen.
    nodes: Vec<&'a TaskDescriptor>,
    index: HashMap<&'a str, usize>,
    /// Direct dependents per node (dependency -> dependent edges).
    dependents: Vec<Vec<usize>>,
    /// Number of resolvable dependencies per node.
    indegree: Vec<usize>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the adjacency lists and indegree table for `tasks`.
    ///
    /// - A repeated title maps to a single node whose descriptor is the last
    ///   occurrence (last-write-wins).
    /// - Dependencies naming a title that is not in the batch are dropped and
    ///   do not count towards indegree.
    /// - A task listing itself gets a self edge, so its indegree can never
    ///   reach zero during traversal.
    pub fn build(tasks: &'a [TaskDescriptor]) -> Self {
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());
        let mut nodes: Vec<&'a TaskDescriptor> = Vec::with_capacity(tasks.len());

        for task in tasks {
            match index.get(task.title.as_str()) {
                Some(&slot) => nodes[slot] = task,
                None => {
                    index.insert(task.title.as_str(), nodes.len());
                    nodes.push(task);
                }
            }
        }

        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut indegree: Vec<usize> = vec![0; nodes.len()];

        for (node, task) in nodes.iter().enumerate() {
            for dep in &task.dependencies {
                if let Some(&from) = index.get(dep.as_str()) {
                    dependents[from].push(node);
                    indegree[node] += 1;
                }
            }
        }

        Self {
            nodes,
            index,
            dependents,
            indegree,
        }
    }

    /// Number of distinct titles in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    pub fn task(&self, node: usize) -> &'a TaskDescriptor {
        self.nodes[node]
    }

    pub fn title_of(&self, node: usize) -> &'a str {
        let task: &'a TaskDescriptor = self.nodes[node];
        task.title.as_str()
    }

    /// Immediate dependents of a node.
    pub fn dependents_of(&self, node: usize) -> &[usize] {
        &self.dependents[node]
    }

    /// Resolvable dependency count of a node before any traversal.
    pub fn indegree_of(&self, node: usize) -> usize {
        self.indegree[node]
    }

    /// Fresh copy of the indegree table, for a traversal to consume.
    pub fn indegrees(&self) -> Vec<usize> {
        self.indegree.clone()
    }

    /// Titles of the tasks that directly depend on `title`.
    ///
    /// Unknown titles have no dependents.
    pub fn dependent_titles(&self, title: &str) -> Vec<&'a str> {
        self.index_of(title)
            .map(|node| {
                self.dependents[node]
                    .iter()
                    .map(|&d| self.title_of(d))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All `(dependency, dependent)` edges by title.
    pub fn edges(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.dependents.iter().enumerate().flat_map(move |(from, tos)| {
            tos.iter()
                .map(move |&to| (self.title_of(from), self.title_of(to)))
        })
    }

    pub fn titles(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.nodes.iter().map(|&t| t.title.as_str())
    }
}
