//! Per-process timing statistics and schedule summary.
//!
//! Derives waiting, turnaround and completion times from the waiting
//! time each engine measured, and aggregates them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting | Ticks ready but not running |
//! | Turnaround | burst + waiting |
//! | Completion | arrival + waiting + burst |
//! | Average waiting / turnaround | Arithmetic mean over all processes |
//! | Throughput | process count / reference completion |
//!
//! The reference completion depends on the policy, see [`ThroughputBasis`].

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Timing statistics for one process under one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// The process these figures describe.
    pub process: Process,
    /// Ticks spent ready but not running.
    pub waiting_time: i64,
    /// Ticks from arrival to completion.
    pub turnaround_time: i64,
    /// Absolute tick at which the process finished.
    pub completion_time: i64,
}

impl ProcessStats {
    /// Derives turnaround and completion from a measured waiting time.
    pub fn from_waiting(process: &Process, waiting_time: i64) -> Self {
        Self {
            process: process.clone(),
            waiting_time,
            turnaround_time: process.burst_duration + waiting_time,
            completion_time: process.arrival_time + waiting_time + process.burst_duration,
        }
    }

    /// ID of the described process.
    #[inline]
    pub fn process_id(&self) -> i64 {
        self.process.id
    }
}

/// Aggregate figures for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Processes completed per tick.
    pub throughput: f64,
}

/// Which completion time divides the process count for throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThroughputBasis {
    /// Completion of the last process in dispatch order (FCFS).
    LastDispatched,
    /// Latest completion over all processes (SRTF, priority).
    LatestCompletion,
}

/// Pure statistics calculator.
///
/// # Example
/// ```
/// use proc_schedule::models::Process;
/// use proc_schedule::scheduler::{StatsCalculator, ThroughputBasis};
///
/// let processes = vec![Process::new(1, 4), Process::new(2, 3).with_arrival(1)];
/// let (stats, summary) =
///     StatsCalculator::new(ThroughputBasis::LatestCompletion).calculate(&processes, &[0, 3]);
///
/// assert_eq!(stats[1].turnaround_time, 6);
/// assert_eq!(stats[1].completion_time, 7);
/// assert!((summary.average_waiting - 1.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatsCalculator {
    basis: ThroughputBasis,
}

impl StatsCalculator {
    /// Creates a calculator with the given throughput basis.
    pub fn new(basis: ThroughputBasis) -> Self {
        Self { basis }
    }

    /// Computes per-process statistics and the summary.
    ///
    /// `waiting_times[i]` belongs to `processes[i]`; both slices are in the
    /// engine's dispatch order.
    pub fn calculate(
        &self,
        processes: &[Process],
        waiting_times: &[i64],
    ) -> (Vec<ProcessStats>, ScheduleSummary) {
        debug_assert_eq!(processes.len(), waiting_times.len());

        let stats: Vec<ProcessStats> = processes
            .iter()
            .zip(waiting_times)
            .map(|(p, &w)| ProcessStats::from_waiting(p, w))
            .collect();

        let summary = self.summarize(&stats);
        (stats, summary)
    }

    /// Aggregates already computed statistics.
    pub fn summarize(&self, stats: &[ProcessStats]) -> ScheduleSummary {
        if stats.is_empty() {
            return ScheduleSummary::default();
        }

        let count = stats.len() as f64;
        let total_waiting: i64 = stats.iter().map(|s| s.waiting_time).sum();
        let total_turnaround: i64 = stats.iter().map(|s| s.turnaround_time).sum();

        let reference_completion = match self.basis {
            ThroughputBasis::LastDispatched => stats.last().map(|s| s.completion_time),
            ThroughputBasis::LatestCompletion => stats.iter().map(|s| s.completion_time).max(),
        }
        .unwrap_or(0);

        // Carry-over FCFS can finish "before" t=0; the ratio is kept as is.
        let throughput = if reference_completion == 0 {
            0.0
        } else {
            count / reference_completion as f64
        };

        ScheduleSummary {
            average_waiting: total_waiting as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            throughput,
        }
    }
}
