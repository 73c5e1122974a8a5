//! Process model.
//!
//! A process is one schedulable unit of CPU work: it becomes ready at its
//! arrival tick and needs `burst_duration` ticks of processor time.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable once loaded. Identity is `id`; uniqueness is checked by the
/// loader (see [`crate::validation`]), not by the scheduling engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub id: i64,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required before completion.
    pub burst_duration: i64,
    /// Scheduling priority (lower value = more important).
    pub priority: i64,
}

impl Process {
    /// Creates a process arriving at t=0 with default priority.
    pub fn new(id: i64, burst_duration: i64) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by tick `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival_time <= t
    }
}

/// Sum of burst durations (total CPU work in the set).
pub fn total_burst(processes: &[Process]) -> i64 {
    processes.iter().map(|p| p.burst_duration).sum()
}
