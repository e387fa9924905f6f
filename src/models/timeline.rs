//! Execution timeline model.
//!
//! A [`Timeline`] is the complete output of one policy run: the ordered
//! CPU-time segments plus one outcome per process. Analogous to a Gantt
//! chart in data form.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::ProcessOutcome;

/// One contiguous slice of CPU time given to a process.
///
/// Immutable once created. Within a run, segments are ordered by
/// non-decreasing `start` and never overlap; gaps between consecutive
/// segments are idle CPU time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process that occupied the CPU.
    pub pid: u32,
    /// Start tick.
    pub start: i64,
    /// End tick (`end > start`).
    pub end: i64,
}

impl ExecutionSegment {
    /// Creates a segment.
    pub fn new(pid: u32, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// Segment length (`end - start`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Complete output of one policy run.
///
/// A non-preemptive policy produces exactly one segment per process; a
/// preemptive one may produce several. Outcomes are recorded in completion
/// order, one per process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution segments, ordered by non-decreasing start.
    pub segments: Vec<ExecutionSegment>,
    /// Per-process completion results, in completion order.
    pub outcomes: Vec<ProcessOutcome>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn add_segment(&mut self, segment: ExecutionSegment) {
        self.segments.push(segment);
    }

    /// Records a process outcome.
    pub fn add_outcome(&mut self, outcome: ProcessOutcome) {
        self.outcomes.push(outcome);
    }

    /// Makespan: latest segment end, or 0 when empty.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total CPU time spent executing (sum of segment durations).
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Total CPU time spent idle (`makespan - busy_time`).
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// All segments belonging to one process.
    pub fn segments_for(&self, pid: u32) -> Vec<&ExecutionSegment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }

    /// The outcome for one process, if it completed in this run.
    pub fn outcome_for(&self, pid: u32) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.pid == pid)
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.add_segment(ExecutionSegment::new(1, 0, 3));
        t.add_segment(ExecutionSegment::new(2, 3, 5));
        t.add_segment(ExecutionSegment::new(1, 7, 9)); // idle gap 5..7
        t.add_outcome(ProcessOutcome::at_completion(
            &ProcessSpec::new(2, 0, 2),
            5,
        ));
        t.add_outcome(ProcessOutcome::at_completion(
            &ProcessSpec::new(1, 0, 5),
            9,
        ));
        t
    }

    #[test]
    fn test_segment_duration() {
        assert_eq!(ExecutionSegment::new(1, 2, 7).duration(), 5);
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_timeline().makespan(), 9);
        assert_eq!(Timeline::new().makespan(), 0);
    }

    #[test]
    fn test_busy_and_idle_time() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 7); // 3 + 2 + 2
        assert_eq!(t.idle_time(), 2); // gap between 5 and 7
    }

    #[test]
    fn test_segments_for() {
        let t = sample_timeline();
        assert_eq!(t.segments_for(1).len(), 2);
        assert_eq!(t.segments_for(2).len(), 1);
        assert!(t.segments_for(99).is_empty());
    }

    #[test]
    fn test_outcome_for() {
        let t = sample_timeline();
        assert_eq!(t.outcome_for(1).unwrap().completion, 9);
        assert!(t.outcome_for(99).is_none());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.segment_count(), 0);
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.idle_time(), 0);
    }
}
