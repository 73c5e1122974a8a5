//! Scheduling domain models.
//!
//! Provides the data types shared by every policy: the immutable
//! [`Process`] record and the [`Timeline`] of execution intervals an
//! engine produces.
//!
//! # Terminology
//!
//! | proc-schedule | Textbook term |
//! |---------------|---------------|
//! | Process | Job / task |
//! | Burst duration | Service time |
//! | Timeline | Gantt chart |
//! | ExecutionInterval | Gantt bar |

mod process;
mod timeline;

pub use process::{total_burst, Process};
pub use timeline::{ExecutionInterval, Timeline};
