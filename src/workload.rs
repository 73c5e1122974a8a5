//! Seeded random workload generation.
//!
//! Produces reproducible process sets for experiments and property checks.
//! The same seed and settings always yield the same processes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::Process;

/// Random process-set generator.
///
/// # Example
/// ```
/// use proc_schedule::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(1)
///     .with_count(5)
///     .with_burst_range(1..=4)
///     .generate();
///
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst_duration)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    burst: RangeInclusive<i64>,
    arrival_span: i64,
    priority: RangeInclusive<i64>,
    distinct_priorities: bool,
}

impl WorkloadGenerator {
    /// Creates a generator: 8 processes, bursts 1..=10, arrivals within
    /// 0..=15, priorities 0..=5.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 8,
            burst: 1..=10,
            arrival_span: 15,
            priority: 0..=5,
            distinct_priorities: false,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the burst duration range. The lower bound is raised to 1.
    pub fn with_burst_range(mut self, burst: RangeInclusive<i64>) -> Self {
        let (lo, hi) = burst.into_inner();
        let lo = lo.max(1);
        self.burst = lo..=hi.max(lo);
        self
    }

    /// Arrivals are drawn from `0..=span`.
    pub fn with_arrival_span(mut self, span: i64) -> Self {
        self.arrival_span = span.max(0);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, priority: RangeInclusive<i64>) -> Self {
        let (lo, hi) = priority.into_inner();
        self.priority = lo..=hi.max(lo);
        self
    }

    /// Gives every process a different priority (a shuffled `0..count`).
    pub fn with_distinct_priorities(mut self) -> Self {
        self.distinct_priorities = true;
        self
    }

    /// Generates the process set. IDs are `1..=count` in input order.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut distinct: Vec<i64> = (0..self.count as i64).collect();
        if self.distinct_priorities {
            distinct.shuffle(&mut rng);
        }

        (0..self.count)
            .map(|i| {
                let burst = rng.random_range(self.burst.clone());
                let arrival = rng.random_range(0..=self.arrival_span);
                let priority = if self.distinct_priorities {
                    distinct[i]
                } else {
                    rng.random_range(self.priority.clone())
                };
                Process::new(i as i64 + 1, burst)
                    .with_arrival(arrival)
                    .with_priority(priority)
            })
            .collect()
    }
}
