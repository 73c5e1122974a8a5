//! Shortest remaining time first (preemptive).
//!
//! # Algorithm
//!
//! Unit ticks from t=0. Every tick:
//! 1. Among arrived processes with work left, pick the smallest remaining
//!    burst; ties go to the lowest input index.
//! 2. If none is ready, the processor idles (not recorded in the timeline).
//! 3. Otherwise run the pick for one tick and extend the timeline.
//!
//! On completion the waiting time is `t - burst - arrival`, clamped at 0.

use log::{debug, trace};

use super::{Policy, Scheduler, SimulationOutcome, StatsCalculator, ThroughputBasis};
use crate::models::{Process, Timeline};

/// SRTF engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

/// Remaining work for one process, owned by a single run.
#[derive(Debug)]
struct Slot<'a> {
    process: &'a Process,
    remaining: i64,
}

impl Slot<'_> {
    fn is_ready(&self, t: i64) -> bool {
        self.process.has_arrived(t) && self.remaining > 0
    }
}

/// Index of the ready slot with the least remaining work (first on ties).
fn shortest_ready(slots: &[Slot<'_>], t: i64) -> Option<usize> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_ready(t))
        .min_by_key(|(_, s)| s.remaining)
        .map(|(i, _)| i)
}

/// Earliest arrival after `t` among slots with work left.
fn next_arrival(slots: &[Slot<'_>], t: i64) -> Option<i64> {
    slots
        .iter()
        .filter(|s| s.remaining > 0 && s.process.arrival_time > t)
        .map(|s| s.process.arrival_time)
        .min()
}

impl Scheduler for Srtf {
    fn policy(&self) -> Policy {
        Policy::Srtf
    }

    fn schedule(&self, processes: &[Process]) -> SimulationOutcome {
        let mut slots: Vec<Slot<'_>> = processes
            .iter()
            .map(|process| Slot {
                process,
                remaining: process.burst_duration,
            })
            .collect();
        let mut waiting_times = vec![0; processes.len()];
        let mut timeline = Timeline::new();
        let mut pending = slots.iter().filter(|s| s.remaining > 0).count();
        let mut running: Option<usize> = None;
        let mut t = 0;

        while pending > 0 {
            let Some(idx) = shortest_ready(&slots, t) else {
                // Idle until the next arrival; the ticks in between are empty.
                match next_arrival(&slots, t) {
                    Some(next) => {
                        trace!("srtf: idle [{t}, {next})");
                        t = next;
                        continue;
                    }
                    None => break,
                }
            };

            if running != Some(idx) {
                let id = slots[idx].process.id;
                match running {
                    Some(prev) => debug!(
                        "srtf: t={t} process {id} preempts process {}",
                        slots[prev].process.id
                    ),
                    None => debug!("srtf: t={t} dispatch process {id}"),
                }
                running = Some(idx);
            }

            let slot = &mut slots[idx];
            timeline.record_tick(slot.process.id, t);
            slot.remaining -= 1;
            t += 1;
            timeline.close_tick(t);

            if slot.remaining == 0 {
                let p = slot.process;
                waiting_times[idx] = (t - p.burst_duration - p.arrival_time).max(0);
                debug!("srtf: t={t} process {} completes", p.id);
                pending -= 1;
                running = None;
            }
        }

        let (stats, summary) = StatsCalculator::new(ThroughputBasis::LatestCompletion)
            .calculate(processes, &waiting_times);

        SimulationOutcome {
            policy: Policy::Srtf,
            timeline,
            stats,
            summary,
        }
    }
}
