//! Simulation configuration.
//!
//! Selects which policies run and tunes the engines. By default FCFS uses
//! carry-over waiting times, the priority clock starts at the first listed
//! process, and equal priorities run in arrival order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::scheduler::Policy;

/// How FCFS derives waiting time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FcfsAccounting {
    /// Waiting time is recomputed as `service_time - arrival` only for
    /// processes arriving after t=0; a process arriving at t=0 inherits the
    /// previous process's waiting time.
    #[default]
    CarryOver,
    /// Clock-driven: a process starts at `max(cursor, arrival)` and waits
    /// `start - arrival`. Idle gaps are honoured.
    Clocked,
}

/// Where the preemptive priority clock starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityClock {
    /// Arrival time of the first process in input order.
    #[default]
    FirstListed,
    /// Earliest arrival time in the set.
    EarliestArrival,
}

/// Secondary ordering among ready processes with equal priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTieBreak {
    /// Earlier arrival (stable input order among equal arrivals) first.
    #[default]
    ArrivalOrder,
    /// Lower process ID first.
    ProcessId,
}

/// Configuration for a batch of simulation runs.
///
/// # Example
/// ```
/// use proc_schedule::config::{PriorityClock, SimulationConfig};
/// use proc_schedule::scheduler::Policy;
///
/// let config = SimulationConfig::new()
///     .with_policies(vec![Policy::Srtf, Policy::Priority])
///     .with_priority_clock(PriorityClock::EarliestArrival)
///     .with_parallel(true);
/// assert_eq!(config.policies.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Policies to run, in output order.
    pub policies: Vec<Policy>,
    /// FCFS waiting-time model.
    pub fcfs_accounting: FcfsAccounting,
    /// Priority engine clock origin.
    pub priority_clock: PriorityClock,
    /// Priority engine tie-breaking.
    pub priority_ties: PriorityTieBreak,
    /// Run each policy on its own thread.
    pub parallel: bool,
}

impl SimulationConfig {
    /// Creates a configuration running every policy with default tuning.
    pub fn new() -> Self {
        Self {
            policies: Policy::ALL.to_vec(),
            fcfs_accounting: FcfsAccounting::default(),
            priority_clock: PriorityClock::default(),
            priority_ties: PriorityTieBreak::default(),
            parallel: false,
        }
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Sets the FCFS waiting-time model.
    pub fn with_fcfs_accounting(mut self, accounting: FcfsAccounting) -> Self {
        self.fcfs_accounting = accounting;
        self
    }

    /// Sets the priority clock origin.
    pub fn with_priority_clock(mut self, clock: PriorityClock) -> Self {
        self.priority_clock = clock;
        self
    }

    /// Sets the priority tie-breaking.
    pub fn with_priority_ties(mut self, ties: PriorityTieBreak) -> Self {
        self.priority_ties = ties;
        self
    }

    /// Enables or disables parallel policy runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Error for an unrecognised option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    /// Option being parsed.
    pub option: &'static str,
    /// Rejected value.
    pub value: String,
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.option, self.value)
    }
}

impl std::error::Error for ParseOptionError {}

fn unknown(option: &'static str, value: &str) -> ParseOptionError {
    ParseOptionError {
        option,
        value: value.to_string(),
    }
}

impl FromStr for FcfsAccounting {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "carry-over" | "carryover" => Ok(Self::CarryOver),
            "clocked" => Ok(Self::Clocked),
            _ => Err(unknown("FCFS accounting", s)),
        }
    }
}

impl FromStr for PriorityClock {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-listed" | "first" => Ok(Self::FirstListed),
            "earliest-arrival" | "earliest" => Ok(Self::EarliestArrival),
            _ => Err(unknown("priority clock", s)),
        }
    }
}

impl FromStr for PriorityTieBreak {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arrival" | "arrival-order" => Ok(Self::ArrivalOrder),
            "id" | "process-id" => Ok(Self::ProcessId),
            _ => Err(unknown("priority tie-break", s)),
        }
    }
}
