//! Min-heap ready queue for the priority engine.
//!
//! Entries are ordered by `(priority, tie_key)`; the lowest pair is popped
//! first. The tie key makes equal-priority ordering reproducible instead of
//! depending on heap layout.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A queued process slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyEntry {
    priority: i64,
    tie_key: i64,
    slot: usize,
}

/// Ready queue keyed by priority (lower value = more important).
///
/// # Example
/// ```
/// use proc_schedule::scheduler::ReadyQueue;
///
/// let mut queue = ReadyQueue::new();
/// queue.push(0, 5, 0);
/// queue.push(1, 1, 1);
/// queue.push(2, 1, 2);
///
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(0));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<Reverse<ReadyEntry>>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `slot` with the given priority and tie key.
    pub fn push(&mut self, slot: usize, priority: i64, tie_key: i64) {
        self.heap.push(Reverse(ReadyEntry {
            priority,
            tie_key,
            slot,
        }));
    }

    /// Removes and returns the most important slot.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(e)| e.slot)
    }

    /// Priority of the most important slot.
    pub fn peek_priority(&self) -> Option<i64> {
        self.heap.peek().map(|Reverse(e)| e.priority)
    }

    /// Number of queued slots.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no slot is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
