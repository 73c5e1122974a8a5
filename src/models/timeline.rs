//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of maximal contiguous spans during which
//! a single process held the processor. Engines build it one tick at a
//! time: [`Timeline::record_tick`] opens or extends a span and
//! [`Timeline::close_tick`] moves the open span's stop forward.
//!
//! # Invariants
//! - Intervals are ordered by `start` and do not overlap.
//! - No two adjacent intervals share a process id.

use serde::{Deserialize, Serialize};

/// One contiguous span of processor occupancy.
///
/// Covers ticks `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process holding the processor.
    pub process_id: i64,
    /// First tick of the span.
    pub start: i64,
    /// Tick at which the span ends (exclusive).
    pub stop: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: i64, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the span in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Ordered sequence of execution intervals for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `process_id` runs during tick `tick`.
    ///
    /// Opens a new interval `{process_id, tick, tick}` when the timeline is
    /// empty or the last interval belongs to another process; otherwise the
    /// last interval is left open for [`close_tick`](Self::close_tick).
    pub fn record_tick(&mut self, process_id: i64, tick: i64) {
        match self.intervals.last() {
            Some(last) if last.process_id == process_id => {}
            _ => self
                .intervals
                .push(ExecutionInterval::new(process_id, tick, tick)),
        }
    }

    /// Sets the stop of the last interval. No-op on an empty timeline.
    pub fn close_tick(&mut self, tick: i64) {
        if let Some(last) = self.intervals.last_mut() {
            last.stop = tick;
        }
    }

    /// Records a whole span `[start, stop)` for a non-preemptive dispatch.
    ///
    /// Extends the last interval instead when it belongs to the same process.
    pub fn record_span(&mut self, process_id: i64, start: i64, stop: i64) {
        match self.intervals.last_mut() {
            Some(last) if last.process_id == process_id => last.stop = stop,
            _ => self
                .intervals
                .push(ExecutionInterval::new(process_id, start, stop)),
        }
    }

    /// All intervals, ordered by start.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no process has run.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Total ticks the processor was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// Stop of the latest interval, 0 when empty.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.stop).max().unwrap_or(0)
    }

    /// Intervals belonging to one process.
    pub fn intervals_for(&self, process_id: i64) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Checks ordering, non-overlap, merging and non-empty spans.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.start < i.stop)
            && self.intervals.windows(2).all(|w| {
                w[0].stop <= w[1].start && w[0].process_id != w[1].process_id
            })
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_through(timeline: &mut Timeline, pid: i64, from: i64, to: i64) {
        for t in from..to {
            timeline.record_tick(pid, t);
            timeline.close_tick(t + 1);
        }
    }

    #[test]
    fn test_record_tick_merges_same_process() {
        let mut tl = Timeline::new();
        tick_through(&mut tl, 1, 0, 3);

        assert_eq!(tl.intervals(), &[ExecutionInterval::new(1, 0, 3)]);
    }

    #[test]
    fn test_record_tick_splits_on_switch() {
        let mut tl = Timeline::new();
        tick_through(&mut tl, 1, 0, 1);
        tick_through(&mut tl, 2, 1, 3);
        tick_through(&mut tl, 1, 3, 7);

        assert_eq!(
            tl.intervals(),
            &[
                ExecutionInterval::new(1, 0, 1),
                ExecutionInterval::new(2, 1, 3),
                ExecutionInterval::new(1, 3, 7),
            ]
        );
        assert!(tl.is_well_formed());
        assert_eq!(tl.busy_time(), 7);
        assert_eq!(tl.makespan(), 7);
        assert_eq!(tl.intervals_for(1).len(), 2);
    }

    #[test]
    fn test_open_interval_before_close() {
        let mut tl = Timeline::new();
        tl.record_tick(4, 2);
        assert_eq!(tl.intervals()[0], ExecutionInterval::new(4, 2, 2));
        assert!(!tl.is_well_formed()); // zero-length until closed
        tl.close_tick(3);
        assert!(tl.is_well_formed());
    }

    #[test]
    fn test_close_tick_on_empty_is_noop() {
        let mut tl = Timeline::new();
        tl.close_tick(5);
        assert!(tl.is_empty());
        assert_eq!(tl.makespan(), 0);
    }

    #[test]
    fn test_record_span() {
        let mut tl = Timeline::new();
        tl.record_span(1, 0, 4);
        tl.record_span(2, 4, 7);
        tl.record_span(2, 7, 9);

        assert_eq!(tl.len(), 2);
        assert_eq!(tl.intervals()[1], ExecutionInterval::new(2, 4, 9));
    }

    #[test]
    fn test_idle_gap_is_well_formed() {
        let mut tl = Timeline::new();
        tl.record_span(1, 0, 2);
        tl.record_span(2, 5, 6);
        assert!(tl.is_well_formed());
        assert_eq!(tl.busy_time(), 3);
    }

    #[test]
    fn test_overlap_is_not_well_formed() {
        let mut tl = Timeline::new();
        tl.record_span(1, 0, 4);
        tl.record_span(2, 0, 7);
        assert!(!tl.is_well_formed());
    }
}
