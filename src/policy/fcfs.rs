//! First come, first served.

use crate::models::{ExecutionSegment, ProcessOutcome, ProcessSpec, Timeline};

use super::SchedulingPolicy;

/// Non-preemptive arrival-order scheduling.
///
/// Processes run to completion in arrival order; equal arrivals keep their
/// input order (the sort is stable). When the next process has not arrived
/// yet, the clock jumps forward, leaving an idle gap in the timeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[ProcessSpec]) -> Timeline {
        let mut order: Vec<&ProcessSpec> = processes.iter().collect();
        order.sort_by_key(|p| p.arrival);

        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        for p in order {
            clock = clock.max(p.arrival);
            let start = clock;
            clock += p.burst;
            timeline.add_segment(ExecutionSegment::new(p.pid, start, clock));
            timeline.add_outcome(ProcessOutcome::at_completion(p, clock));
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_process_scenario() {
        // P1(arr=0, burst=3), P2(arr=1, burst=2)
        let processes = vec![ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 1, 2)];
        let t = Fcfs.run(&processes);

        assert_eq!(
            t.segments,
            vec![ExecutionSegment::new(1, 0, 3), ExecutionSegment::new(2, 3, 5)]
        );
        assert_eq!(t.outcome_for(1).unwrap().turnaround, 3);
        assert_eq!(t.outcome_for(2).unwrap().turnaround, 4);
        assert_eq!(t.outcome_for(1).unwrap().waiting, 0);
        assert_eq!(t.outcome_for(2).unwrap().waiting, 2);
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let processes = vec![
            ProcessSpec::new(3, 0, 2),
            ProcessSpec::new(1, 0, 2),
            ProcessSpec::new(2, 0, 2),
        ];
        let t = Fcfs.run(&processes);
        let pids: Vec<u32> = t.segments.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![3, 1, 2]);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let processes = vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 5, 1)];
        let t = Fcfs.run(&processes);
        assert_eq!(t.segments[1], ExecutionSegment::new(2, 5, 6));
        assert_eq!(t.idle_time(), 3);
    }

    #[test]
    fn test_unsorted_input() {
        let processes = vec![ProcessSpec::new(2, 4, 1), ProcessSpec::new(1, 0, 2)];
        let t = Fcfs.run(&processes);
        assert_eq!(t.segments[0].pid, 1);
        assert_eq!(t.segments[1].pid, 2);
    }
}
