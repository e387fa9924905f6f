//! Scheduling policies.
//!
//! Each policy consumes a shared immutable process slice and produces a
//! [`Timeline`]: the ordered execution segments plus one
//! [`ProcessOutcome`](crate::models::ProcessOutcome) per process, recorded
//! at the moment that process's final segment ends.
//!
//! # Clock model
//!
//! A single monotonically non-decreasing integer clock drives every policy.
//! It advances only by (a) a completed burst or remaining-time slice, (b)
//! the round-robin quantum, or (c) a forward jump to the next arrival when
//! no process is ready. No policy may decrease the clock or read a process
//! before its arrival tick.
//!
//! # Usage
//!
//! ```
//! use schedsim::models::ProcessSpec;
//! use schedsim::policy::PolicyConfig;
//!
//! let processes = vec![ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 0, 2)];
//! let timeline = PolicyConfig::RoundRobin { quantum: 2 }.build().run(&processes);
//! assert_eq!(timeline.segment_count(), 3);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use priority::{effective_priority, Priority, AGING_INTERVAL};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{ProcessSpec, Timeline};

/// A scheduling policy: one uniform operation over the process set.
///
/// # Contract
/// The input slice is non-empty with unique pids and positive bursts
/// (enforced upstream by [`crate::validation`]); the policy never mutates
/// it. The returned timeline's segments are ordered by non-decreasing start
/// and never overlap, and every process gets exactly one outcome.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Runs the policy over the process set, producing the full timeline.
    fn run(&self, processes: &[ProcessSpec]) -> Timeline;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Runtime policy selection.
///
/// Serde-enabled so a CLI or configuration-file collaborator can pick the
/// policy without touching engine code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyConfig {
    /// First come, first served.
    Fcfs,
    /// Shortest job first (non-preemptive).
    Sjf,
    /// Round robin with a fixed time quantum (> 0).
    RoundRobin {
        /// Time slice granted per dispatch.
        quantum: i64,
    },
    /// Priority scheduling (non-preemptive), optionally with aging.
    Priority {
        /// Whether waiting processes age toward higher urgency.
        aging: bool,
    },
}

impl PolicyConfig {
    /// Builds the configured policy.
    pub fn build(&self) -> Box<dyn SchedulingPolicy> {
        match *self {
            PolicyConfig::Fcfs => Box::new(Fcfs),
            PolicyConfig::Sjf => Box::new(Sjf),
            PolicyConfig::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
            PolicyConfig::Priority { aging } => Box::new(Priority { aging }),
        }
    }

    /// Human-readable label including parameters.
    pub fn label(&self) -> String {
        match *self {
            PolicyConfig::Fcfs => "FCFS".into(),
            PolicyConfig::Sjf => "SJF".into(),
            PolicyConfig::RoundRobin { quantum } => format!("Round Robin (q={quantum})"),
            PolicyConfig::Priority { aging: false } => "Priority".into(),
            PolicyConfig::Priority { aging: true } => "Priority + Aging".into(),
        }
    }
}
