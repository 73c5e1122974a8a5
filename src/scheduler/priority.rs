//! Preemptive priority scheduling driven by a min-heap.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Start the clock at the configured origin ([`PriorityClock`]).
//! 3. Every tick, admit processes that have arrived and were not yet
//!    queued, pop the most important one (lowest priority value) and run
//!    it for one tick.
//! 4. Re-queue it with the same priority while work remains; on completion
//!    turnaround is `t - arrival` and waiting is `turnaround - burst`.
//!
//! Priorities do not age. Statistics are reported in arrival order.

use log::{debug, trace};

use super::{
    Policy, ReadyQueue, Scheduler, SimulationOutcome, StatsCalculator, ThroughputBasis,
};
use crate::config::{PriorityClock, PriorityTieBreak};
use crate::models::{Process, Timeline};

/// Preemptive priority engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority {
    clock: PriorityClock,
    ties: PriorityTieBreak,
}

impl PreemptivePriority {
    /// Creates an engine with the given clock origin and tie-breaking.
    pub fn new(clock: PriorityClock, ties: PriorityTieBreak) -> Self {
        Self { clock, ties }
    }

    fn tie_key(&self, slot: usize, p: &Process) -> i64 {
        match self.ties {
            PriorityTieBreak::ArrivalOrder => slot as i64,
            PriorityTieBreak::ProcessId => p.id,
        }
    }
}

impl Scheduler for PreemptivePriority {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn schedule(&self, processes: &[Process]) -> SimulationOutcome {
        let Some(first_listed) = processes.first() else {
            return SimulationOutcome::empty(Policy::Priority);
        };

        let mut ordered: Vec<Process> = processes.to_vec();
        ordered.sort_by_key(|p| p.arrival_time);

        let mut t = match self.clock {
            PriorityClock::FirstListed => first_listed.arrival_time,
            PriorityClock::EarliestArrival => ordered[0].arrival_time,
        };

        let mut remaining: Vec<i64> = ordered.iter().map(|p| p.burst_duration).collect();
        let mut waiting_times = vec![0; ordered.len()];
        let mut queue = ReadyQueue::new();
        let mut timeline = Timeline::new();
        let mut admitted = 0;

        loop {
            while admitted < ordered.len() && ordered[admitted].has_arrived(t) {
                let p = &ordered[admitted];
                trace!("priority: t={t} admit process {} (priority {})", p.id, p.priority);
                queue.push(admitted, p.priority, self.tie_key(admitted, p));
                admitted += 1;
            }

            let Some(slot) = queue.pop() else {
                if admitted == ordered.len() {
                    break;
                }
                let next = ordered[admitted].arrival_time;
                trace!("priority: idle [{t}, {next})");
                t = next;
                continue;
            };

            let p = &ordered[slot];
            timeline.record_tick(p.id, t);
            remaining[slot] -= 1;
            t += 1;
            timeline.close_tick(t);

            if remaining[slot] > 0 {
                queue.push(slot, p.priority, self.tie_key(slot, p));
            } else {
                let turnaround = t - p.arrival_time;
                waiting_times[slot] = turnaround - p.burst_duration;
                debug!(
                    "priority: t={t} process {} completes (turnaround {turnaround})",
                    p.id
                );
            }
        }

        let (stats, summary) = StatsCalculator::new(ThroughputBasis::LatestCompletion)
            .calculate(&ordered, &waiting_times);

        SimulationOutcome {
            policy: Policy::Priority,
            timeline,
            stats,
            summary,
        }
    }
}
