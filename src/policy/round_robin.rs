//! Round robin (preemptive).

use std::collections::VecDeque;

use crate::models::{ExecutionSegment, ProcessOutcome, ProcessSpec, Timeline};

use super::SchedulingPolicy;

/// Preemptive time-slice scheduling with a fixed quantum.
///
/// All processes are enqueued once, in arrival-sorted order, into a FIFO
/// ready queue at simulation start; arrivals are not re-checked after
/// seeding. A process whose remaining time exceeds the quantum runs for
/// exactly one quantum and re-enters the queue at the tail; otherwise it
/// runs out its remainder and its outcome is finalized.
///
/// A dequeued process may not have arrived yet under the upfront seeding;
/// the dispatch clock is clamped to its arrival so no segment starts before
/// the process exists, at the cost of idle time even when a later queue
/// entry is already runnable.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Time slice granted per dispatch. Must be positive; enforced by
    /// [`crate::validation`] before the policy runs.
    pub quantum: i64,
}

impl RoundRobin {
    /// Creates a round-robin policy with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RoundRobin"
    }

    fn run(&self, processes: &[ProcessSpec]) -> Timeline {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival);
        let mut queue: VecDeque<usize> = order.into();

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        while let Some(idx) = queue.pop_front() {
            let p = &processes[idx];
            clock = clock.max(p.arrival);
            let start = clock;

            if remaining[idx] > self.quantum {
                clock += self.quantum;
                remaining[idx] -= self.quantum;
                timeline.add_segment(ExecutionSegment::new(p.pid, start, clock));
                queue.push_back(idx);
            } else {
                clock += remaining[idx];
                remaining[idx] = 0;
                timeline.add_segment(ExecutionSegment::new(p.pid, start, clock));
                timeline.add_outcome(ProcessOutcome::at_completion(p, clock));
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
