//! Scheduling engines and timing statistics.
//!
//! Each policy is a pure function of the process list: it owns its own
//! remaining-work records and [`Timeline`], and returns a
//! [`SimulationOutcome`]. Policies share no state, so several can run over
//! the same input concurrently.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | No | Input order |
//! | SRTF | Yes | Least remaining burst, lowest index on ties |
//! | Priority | Yes | Lowest priority value, min-heap |
//!
//! # Example
//!
//! ```
//! use proc_schedule::models::Process;
//! use proc_schedule::scheduler::{Policy, Scheduler, Srtf};
//!
//! let processes = vec![Process::new(1, 5), Process::new(2, 2).with_arrival(1)];
//! let outcome = Srtf.schedule(&processes);
//!
//! assert_eq!(outcome.policy, Policy::Srtf);
//! assert_eq!(outcome.timeline.len(), 3);
//! assert_eq!(outcome.stats[0].waiting_time, 2);
//! ```

mod fcfs;
mod priority;
mod ready_queue;
mod srtf;
mod stats;

pub use fcfs::Fcfs;
pub use priority::PreemptivePriority;
pub use ready_queue::ReadyQueue;
pub use srtf::Srtf;
pub use stats::{ProcessStats, ScheduleSummary, StatsCalculator, ThroughputBasis};

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;
use std::thread;

use crate::config::{ParseOptionError, SimulationConfig};
use crate::models::{Process, Timeline};

/// The closed set of dispatch policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-come, first-served.
    Fcfs,
    /// Shortest remaining time first.
    Srtf,
    /// Preemptive priority.
    Priority,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Srtf, Policy::Priority];

    /// Report title.
    pub fn title(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-come, first-serve",
            Policy::Srtf => "Shortest-job-first",
            Policy::Priority => "Priority",
        }
    }

    /// Builds the engine for this policy, tuned by `config`.
    pub fn scheduler(&self, config: &SimulationConfig) -> Box<dyn Scheduler> {
        match self {
            Policy::Fcfs => Box::new(Fcfs::new(config.fcfs_accounting)),
            Policy::Srtf => Box::new(Srtf),
            Policy::Priority => Box::new(PreemptivePriority::new(
                config.priority_clock,
                config.priority_ties,
            )),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fcfs => "fcfs",
            Policy::Srtf => "srtf",
            Policy::Priority => "priority",
        };
        f.write_str(name)
    }
}

impl FromStr for Policy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "srtf" | "sjf" => Ok(Policy::Srtf),
            "priority" | "prio" => Ok(Policy::Priority),
            _ => Err(ParseOptionError {
                option: "policy",
                value: s.to_string(),
            }),
        }
    }
}

/// A scheduling policy: `(processes) -> (timeline, stats)`.
pub trait Scheduler: Send + Sync + Debug {
    /// Which policy this engine implements.
    fn policy(&self) -> Policy;

    /// Simulates the policy over `processes` from scratch.
    fn schedule(&self, processes: &[Process]) -> SimulationOutcome;
}

/// Result of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Gantt timeline.
    pub timeline: Timeline,
    /// Per-process statistics, in the policy's dispatch order.
    pub stats: Vec<ProcessStats>,
    /// Aggregate figures.
    pub summary: ScheduleSummary,
}

impl SimulationOutcome {
    /// Outcome of a run over no processes.
    pub fn empty(policy: Policy) -> Self {
        Self {
            policy,
            timeline: Timeline::new(),
            stats: Vec::new(),
            summary: ScheduleSummary::default(),
        }
    }

    /// Statistics for one process.
    pub fn stats_for(&self, process_id: i64) -> Option<&ProcessStats> {
        self.stats.iter().find(|s| s.process_id() == process_id)
    }

    /// Latest completion time across all processes.
    pub fn latest_completion(&self) -> i64 {
        self.stats
            .iter()
            .map(|s| s.completion_time)
            .max()
            .unwrap_or(0)
    }
}

/// Runs every configured policy over the same processes.
///
/// Outcomes are returned in `config.policies` order. With
/// `config.parallel` each policy runs on its own scoped thread.
pub fn run_policies(processes: &[Process], config: &SimulationConfig) -> Vec<SimulationOutcome> {
    let schedulers: Vec<Box<dyn Scheduler>> =
        config.policies.iter().map(|p| p.scheduler(config)).collect();

    info!(
        "simulating {} processes under {} policies{}",
        processes.len(),
        schedulers.len(),
        if config.parallel { " (parallel)" } else { "" }
    );

    if !config.parallel {
        return schedulers.iter().map(|s| s.schedule(processes)).collect();
    }

    thread::scope(|scope| {
        let handles: Vec<_> = schedulers
            .iter()
            .map(|s| scope.spawn(move || s.schedule(processes)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FcfsAccounting, PriorityClock};
    use crate::models::total_burst;
    use crate::workload::WorkloadGenerator;

    fn scenario() -> Vec<Process> {
        vec![
            Process::new(1, 4).with_priority(2),
            Process::new(2, 3).with_arrival(1).with_priority(1),
            Process::new(3, 2).with_arrival(2).with_priority(3),
        ]
    }

    #[test]
    fn test_policy_parse_and_display() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
        }
        assert_eq!("SJF".parse::<Policy>(), Ok(Policy::Srtf));
        assert!("rr".parse::<Policy>().is_err());
    }

    #[test]
    fn test_policy_builds_matching_scheduler() {
        let config = SimulationConfig::new();
        for policy in Policy::ALL {
            assert_eq!(policy.scheduler(&config).policy(), policy);
        }
    }

    #[test]
    fn test_run_policies_order() {
        let config = SimulationConfig::new().with_policies(vec![Policy::Priority, Policy::Fcfs]);
        let outcomes = run_policies(&scenario(), &config);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].policy, Policy::Priority);
        assert_eq!(outcomes[1].policy, Policy::Fcfs);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let processes = WorkloadGenerator::new(7).with_count(12).generate();
        let sequential = run_policies(&processes, &SimulationConfig::new());
        let parallel = run_policies(&processes, &SimulationConfig::new().with_parallel(true));

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_stats_identities_hold_for_every_policy() {
        let config = SimulationConfig::new();
        for seed in 0..20 {
            let processes = WorkloadGenerator::new(seed).generate();
            for outcome in run_policies(&processes, &config) {
                for s in &outcome.stats {
                    let p = &s.process;
                    assert_eq!(s.turnaround_time, p.burst_duration + s.waiting_time);
                    assert_eq!(
                        s.completion_time,
                        p.arrival_time + s.waiting_time + p.burst_duration
                    );
                }
            }
        }
    }

    #[test]
    fn test_preemptive_timelines_are_well_formed() {
        let config = SimulationConfig::new()
            .with_policies(vec![Policy::Srtf, Policy::Priority])
            .with_priority_clock(PriorityClock::EarliestArrival);

        for seed in 0..20 {
            let processes = WorkloadGenerator::new(seed).generate();
            for outcome in run_policies(&processes, &config) {
                assert!(outcome.timeline.is_well_formed(), "{:?}", outcome.policy);
                assert_eq!(outcome.timeline.busy_time(), total_burst(&processes));
                assert!(outcome.stats.iter().all(|s| s.waiting_time >= 0));
                assert_eq!(outcome.timeline.makespan(), outcome.latest_completion());
            }
        }
    }

    #[test]
    fn test_clocked_fcfs_is_well_formed() {
        let config = SimulationConfig::new()
            .with_policies(vec![Policy::Fcfs])
            .with_fcfs_accounting(FcfsAccounting::Clocked);

        for seed in 0..20 {
            let processes = WorkloadGenerator::new(seed).generate();
            let outcome = &run_policies(&processes, &config)[0];
            assert!(outcome.timeline.is_well_formed());
            assert_eq!(outcome.timeline.busy_time(), total_burst(&processes));
        }
    }

    #[test]
    fn test_deterministic() {
        let processes = WorkloadGenerator::new(42).with_count(25).generate();
        let config = SimulationConfig::new();

        assert_eq!(
            run_policies(&processes, &config),
            run_policies(&processes, &config)
        );
    }

    #[test]
    fn test_priority_runs_most_important_ready_process() {
        // Distinct priorities: at every tick the running process has the
        // lowest priority value among arrived, unfinished processes.
        let processes = WorkloadGenerator::new(3)
            .with_count(10)
            .with_distinct_priorities()
            .generate();
        let outcome = PreemptivePriority::new(
            PriorityClock::EarliestArrival,
            Default::default(),
        )
        .schedule(&processes);

        for interval in outcome.timeline.intervals() {
            let running = processes
                .iter()
                .find(|p| p.id == interval.process_id)
                .unwrap();
            for t in interval.start..interval.stop {
                let competitor = processes.iter().find(|p| {
                    p.id != running.id
                        && p.arrival_time <= t
                        && outcome.stats_for(p.id).unwrap().completion_time > t
                        && p.priority < running.priority
                });
                assert!(competitor.is_none(), "tick {t}: {competitor:?} outranks {running:?}");
            }
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = Srtf.schedule(&scenario());
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"policy\":\"Srtf\""));
        let back: SimulationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timeline, outcome.timeline);
        assert_eq!(back.stats, outcome.stats);
        assert!((back.summary.throughput - outcome.summary.throughput).abs() < 1e-12);
    }
}
