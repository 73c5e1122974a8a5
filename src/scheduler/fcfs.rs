//! First-come, first-served (non-preemptive).
//!
//! Processes are dispatched in input order, each run to completion.
//! A `service_time` cursor tracks the CPU time consumed so far.
//!
//! # Waiting time
//! With [`FcfsAccounting::CarryOver`] the waiting time is a fold
//! accumulator: it is recomputed as `service_time - arrival` only when the
//! process arrives after t=0, otherwise the previous value is reused. The
//! process occupies `[wait + arrival, service_time + burst)`.
//!
//! With [`FcfsAccounting::Clocked`] a process starts at
//! `max(service_time, arrival)`.

use log::debug;

use super::{Policy, Scheduler, SimulationOutcome, StatsCalculator, ThroughputBasis};
use crate::config::FcfsAccounting;
use crate::models::{Process, Timeline};

/// FCFS engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs {
    accounting: FcfsAccounting,
}

/// Where one dispatched process lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dispatch {
    waiting: i64,
    start: i64,
    stop: i64,
}

impl Fcfs {
    /// Creates an engine with the given waiting-time model.
    pub fn new(accounting: FcfsAccounting) -> Self {
        Self { accounting }
    }

    fn dispatch(&self, previous_wait: i64, service_time: i64, p: &Process) -> Dispatch {
        match self.accounting {
            FcfsAccounting::CarryOver => {
                let waiting = carry_over_wait(previous_wait, service_time, p);
                Dispatch {
                    waiting,
                    start: waiting + p.arrival_time,
                    stop: service_time + p.burst_duration,
                }
            }
            FcfsAccounting::Clocked => {
                let start = service_time.max(p.arrival_time);
                Dispatch {
                    waiting: start - p.arrival_time,
                    start,
                    stop: start + p.burst_duration,
                }
            }
        }
    }
}

/// Next value of the carried waiting-time accumulator.
fn carry_over_wait(previous_wait: i64, service_time: i64, p: &Process) -> i64 {
    if p.arrival_time > 0 {
        service_time - p.arrival_time
    } else {
        previous_wait
    }
}

impl Scheduler for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> SimulationOutcome {
        let mut timeline = Timeline::new();
        let mut waiting_times = Vec::with_capacity(processes.len());
        let mut service_time = 0;
        let mut last_wait = 0;

        for p in processes {
            let d = self.dispatch(last_wait, service_time, p);
            debug!(
                "fcfs: process {} runs [{}, {}) after waiting {}",
                p.id, d.start, d.stop, d.waiting
            );

            timeline.record_span(p.id, d.start, d.stop);
            waiting_times.push(d.waiting);
            last_wait = d.waiting;
            service_time = match self.accounting {
                FcfsAccounting::CarryOver => service_time + p.burst_duration,
                FcfsAccounting::Clocked => d.stop,
            };
        }

        let (stats, summary) =
            StatsCalculator::new(ThroughputBasis::LastDispatched).calculate(processes, &waiting_times);

        SimulationOutcome {
            policy: Policy::Fcfs,
            timeline,
            stats,
            summary,
        }
    }
}
