//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process set (and policy parameters)
//! before any simulation begins. Detects:
//! - Empty process lists
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate pids
//! - Non-positive round-robin quanta
//!
//! All problems are collected, not just the first one found.

use std::collections::HashSet;

use crate::models::ProcessSpec;
use crate::policy::PolicyConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyProcessList,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Two processes share the same pid.
    DuplicateId,
    /// Round robin was configured with a zero or negative quantum.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "No processes to schedule",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.pid, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.pid, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the process set together with the policy configuration.
///
/// Adds the quantum check when the configuration selects round robin.
pub fn validate_run(config: &PolicyConfig, processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = match validate_processes(processes) {
        Ok(()) => Vec::new(),
        Err(e) => e,
    };

    if let PolicyConfig::RoundRobin { quantum } = *config {
        if quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
