//! Input validation for process sets.
//!
//! Checks structural integrity of process records before scheduling.
//! Detects:
//! - Duplicate process IDs
//! - Non-positive burst durations
//! - Negative arrival times
//!
//! The engines assume these hold; the loader runs the checks and rejects
//! the input otherwise.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID.
    pub process_id: i64,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs no CPU time (or negative time).
    NonPositiveBurst,
    /// A process arrives before the epoch.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, process_id: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            process_id,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst duration is > 0
/// 3. Every arrival time is >= 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                p.id,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.id,
                format!(
                    "Process {} has non-positive burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
