//! Priority scheduling (non-preemptive), with optional aging.
//!
//! Lower priority values are more urgent. With aging enabled, a waiting
//! process gains one level of urgency per [`AGING_INTERVAL`] ticks waited,
//! clamped at 0, so long waits cannot starve low-priority work.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.3.3 (priority scheduling and starvation)

use crate::models::{ExecutionSegment, ProcessOutcome, ProcessSpec, Timeline};

use super::SchedulingPolicy;

/// Ticks of waiting required to gain one level of urgency.
pub const AGING_INTERVAL: i64 = 5;

/// Priority after aging: `max(0, priority - waited / AGING_INTERVAL)`.
///
/// `now` must be at or after the process's arrival.
pub fn effective_priority(spec: &ProcessSpec, now: i64) -> i64 {
    let waited = now - spec.arrival;
    (i64::from(spec.priority) - waited / AGING_INTERVAL).max(0)
}

/// Non-preemptive priority scheduling.
///
/// At each decision point the arrived, unfinished process with the minimum
/// priority value runs to completion; a process that starts is never
/// interrupted, even if a more urgent one arrives mid-burst.
///
/// Tie-breaking differs between the two variants and the asymmetry is kept:
/// - aging: minimum effective priority, then earlier arrival, then smaller
///   burst;
/// - no aging: minimum static priority, first-encountered in the scan on
///   ties (position-dependent, matching SJF's implicit rule).
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority {
    /// Whether waiting processes age toward higher urgency.
    pub aging: bool,
}

impl Priority {
    /// Static-priority variant.
    pub fn new() -> Self {
        Self { aging: false }
    }

    /// Aging variant.
    pub fn with_aging() -> Self {
        Self { aging: true }
    }

    fn select(&self, processes: &[ProcessSpec], done: &[bool], clock: i64) -> Option<usize> {
        if self.aging {
            let mut pick: Option<(usize, i64)> = None;
            for (i, p) in processes.iter().enumerate() {
                if done[i] || p.arrival > clock {
                    continue;
                }
                let eff = effective_priority(p, clock);
                let better = match pick {
                    None => true,
                    Some((j, best)) => {
                        let q = &processes[j];
                        (eff, p.arrival, p.burst) < (best, q.arrival, q.burst)
                    }
                };
                if better {
                    pick = Some((i, eff));
                }
            }
            pick.map(|(i, _)| i)
        } else {
            // Strict `<` keeps the first-encountered process on ties.
            let mut pick: Option<usize> = None;
            let mut best = i32::MAX;
            for (i, p) in processes.iter().enumerate() {
                if !done[i] && p.arrival <= clock && p.priority < best {
                    pick = Some(i);
                    best = p.priority;
                }
            }
            pick
        }
    }
}

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        if self.aging {
            "Priority+Aging"
        } else {
            "Priority"
        }
    }

    fn run(&self, processes: &[ProcessSpec]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut done = vec![false; processes.len()];
        let mut clock: i64 = 0;
        let mut completed = 0;

        while completed < processes.len() {
            let Some(idx) = self.select(processes, &done, clock) else {
                clock = next_arrival(processes, &done).unwrap_or(clock);
                continue;
            };

            let p = &processes[idx];
            let start = clock;
            clock += p.burst;
            timeline.add_segment(ExecutionSegment::new(p.pid, start, clock));
            timeline.add_outcome(ProcessOutcome::at_completion(p, clock));
            done[idx] = true;
            completed += 1;
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }
}

/// Earliest arrival among unfinished processes.
fn next_arrival(processes: &[ProcessSpec], done: &[bool]) -> Option<i64> {
    processes
        .iter()
        .zip(done)
        .filter(|(_, &d)| !d)
        .map(|(p, _)| p.arrival)
        .min()
}
