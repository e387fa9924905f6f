//! Process records.
//!
//! [`ProcessSpec`] describes one schedulable unit of work; [`ProcessOutcome`]
//! is the completion-derived result a policy run produces for it.
//!
//! # Time Representation
//! All times are integer ticks on a simulated clock starting at t=0.
//! The consumer defines what one tick means (a millisecond, a cycle, ...).

use serde::{Deserialize, Serialize};

/// Immutable description of one schedulable process.
///
/// Constructed from caller input before any run. Policies read specs through
/// a shared slice and never mutate them; all run state (remaining time,
/// completion) lives in the policy or in [`ProcessOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub pid: u32,
    /// Tick at which the process becomes eligible for scheduling (>= 0).
    pub arrival: i64,
    /// Total CPU time required to finish (> 0).
    pub burst: i64,
    /// Scheduling priority. Lower = more urgent.
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a spec with default priority 0.
    pub fn new(pid: u32, arrival: i64, burst: i64) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Completion-derived result for one process.
///
/// Written exactly once per run, at the moment the process's final execution
/// segment ends. For every policy: `completion >= arrival + burst` and
/// `waiting >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process this outcome belongs to.
    pub pid: u32,
    /// Tick at which the final segment ended.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`: time spent runnable but not executing.
    pub waiting: i64,
}

impl ProcessOutcome {
    /// Derives the outcome for `spec` finishing at `completion`.
    pub fn at_completion(spec: &ProcessSpec, completion: i64) -> Self {
        let turnaround = completion - spec.arrival;
        Self {
            pid: spec.pid,
            completion,
            turnaround,
            waiting: turnaround - spec.burst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let p = ProcessSpec::new(7, 3, 10).with_priority(2);
        assert_eq!(p.pid, 7);
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 10);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(ProcessSpec::new(1, 0, 5).priority, 0);
    }

    #[test]
    fn test_outcome_derivation() {
        let p = ProcessSpec::new(2, 1, 4);
        let o = ProcessOutcome::at_completion(&p, 9);
        assert_eq!(o.pid, 2);
        assert_eq!(o.completion, 9);
        assert_eq!(o.turnaround, 8); // 9 - 1
        assert_eq!(o.waiting, 4); // 8 - 4
    }

    #[test]
    fn test_outcome_zero_waiting() {
        // Runs immediately on arrival
        let p = ProcessSpec::new(1, 5, 3);
        let o = ProcessOutcome::at_completion(&p, 8);
        assert_eq!(o.waiting, 0);
    }

    #[test]
    fn test_spec_serde_roundtrip() {
        let p = ProcessSpec::new(4, 2, 6).with_priority(1);
        let json = serde_json::to_string(&p).unwrap();
        let back: ProcessSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
