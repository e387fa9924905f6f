//! Shortest job first (non-preemptive).

use crate::models::{ExecutionSegment, ProcessOutcome, ProcessSpec, Timeline};

use super::SchedulingPolicy;

/// Non-preemptive shortest-job-first scheduling.
///
/// At each decision point the arrived, unfinished process with the smallest
/// burst runs to completion. Burst ties resolve to whichever process comes
/// first in input iteration order — a position-dependent tie-break, kept
/// distinct on purpose from the explicit rule the aging priority variant
/// uses. When nothing has arrived, the clock jumps to the earliest arrival
/// among unfinished processes and selection is retried.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[ProcessSpec]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut done = vec![false; processes.len()];
        let mut clock: i64 = 0;
        let mut completed = 0;

        while completed < processes.len() {
            // Strict `<` keeps the first-encountered process on burst ties.
            let mut pick: Option<usize> = None;
            let mut best_burst = i64::MAX;
            for (i, p) in processes.iter().enumerate() {
                if !done[i] && p.arrival <= clock && p.burst < best_burst {
                    pick = Some(i);
                    best_burst = p.burst;
                }
            }

            let Some(idx) = pick else {
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
        "Shortest Job First"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_runs_first() {
        let processes = vec![
            ProcessSpec::new(1, 0, 8),
            ProcessSpec::new(2, 0, 2),
            ProcessSpec::new(3, 0, 4),
        ];
        let t = Sjf.run(&processes);
        let pids: Vec<u32> = t.segments.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
        assert_eq!(t.makespan(), 14);
    }

    #[test]
    fn test_burst_tie_goes_to_first_in_input() {
        let processes = vec![
            ProcessSpec::new(5, 0, 3),
            ProcessSpec::new(2, 0, 3),
            ProcessSpec::new(9, 0, 3),
        ];
        let t = Sjf.run(&processes);
        let pids: Vec<u32> = t.segments.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![5, 2, 9]);
    }

    #[test]
    fn test_late_arrival_not_considered_early() {
        // The short job arrives after the long one started: non-preemptive,
        // so the long job finishes first.
        let processes = vec![ProcessSpec::new(1, 0, 10), ProcessSpec::new(2, 1, 1)];
        let t = Sjf.run(&processes);
        assert_eq!(t.segments[0], ExecutionSegment::new(1, 0, 10));
        assert_eq!(t.segments[1], ExecutionSegment::new(2, 10, 11));
    }

    #[test]
    fn test_idle_jump_to_next_arrival() {
        let processes = vec![ProcessSpec::new(1, 4, 2), ProcessSpec::new(2, 6, 1)];
        let t = Sjf.run(&processes);
        assert_eq!(t.segments[0], ExecutionSegment::new(1, 4, 6));
        assert_eq!(t.idle_time(), 4);
    }

    #[test]
    fn test_idle_jump_selects_shortest_among_simultaneous() {
        // Both arrive at t=5 while the CPU is idle; the shorter one wins
        // selection after the jump.
        let processes = vec![ProcessSpec::new(1, 5, 4), ProcessSpec::new(2, 5, 2)];
        let t = Sjf.run(&processes);
        assert_eq!(t.segments[0].pid, 2);
    }
}
