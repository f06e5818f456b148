// src/dag/frontier.rs

//! Ready set for the topological traversal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::batch::model::DueKey;

/// A task whose dependencies have all been emitted.
///
/// Field order defines the derived ordering: due date first, then title.
/// `node` never decides a comparison because titles are unique per graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadyTask<'a> {
    pub due: DueKey,
    pub title: &'a str,
    pub node: usize,
}

/// Min-priority queue of ready tasks keyed on `(due, title)`.
///
/// A missing due date sorts after every real one; equal due dates are
/// broken by byte-wise title order, so extraction order is total and
/// deterministic.
#[derive(Debug, Default)]
pub struct PriorityFrontier<'a> {
    heap: BinaryHeap<Reverse<ReadyTask<'a>>>,
}

impl<'a> PriorityFrontier<'a> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// O(log n).
    pub fn insert(&mut self, due: DueKey, title: &'a str, node: usize) {
        self.heap.push(Reverse(ReadyTask { due, title, node }));
    }

    /// Remove and return the task with the smallest key. O(log n).
    pub fn extract_min(&mut self) -> Option<ReadyTask<'a>> {
        self.heap.pop().map(|Reverse(task)| task)
    }

    pub fn peek_min(&self) -> Option<&ReadyTask<'a>> {
        self.heap.peek().map(|Reverse(task)| task)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
