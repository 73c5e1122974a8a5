//! Single-processor CPU scheduling simulator.
//!
//! Simulates dispatch policies over a fixed, fully-known set of processes
//! and reports per-process timing statistics plus a Gantt timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`, `Timeline`
//! - **`scheduler`**: Policies (FCFS, SRTF, preemptive priority), the
//!   `Scheduler` trait, statistics, and `run_policies`
//! - **`config`**: `SimulationConfig` and policy tuning
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, arrivals)
//! - **`loader`**: CSV parsing into `Process` records
//! - **`report`**: Title, Gantt and table rendering
//! - **`workload`**: Seeded random process sets
//! - **`error`**: `SimError`, `SimResult`
//!
//! # Example
//!
//! ```
//! use proc_schedule::config::SimulationConfig;
//! use proc_schedule::models::Process;
//! use proc_schedule::scheduler::run_policies;
//!
//! let processes = vec![
//!     Process::new(1, 4),
//!     Process::new(2, 3).with_arrival(1),
//!     Process::new(3, 2).with_arrival(2),
//! ];
//! let outcomes = run_policies(&processes, &SimulationConfig::new());
//!
//! assert_eq!(outcomes.len(), 3);
//! let fcfs = &outcomes[0];
//! let waits: Vec<i64> = fcfs.stats.iter().map(|s| s.waiting_time).collect();
//! assert_eq!(waits, vec![0, 3, 5]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimErrorKind, SimResult};
