//! Run-level performance metrics.
//!
//! Computes standard scheduling performance indicators from a completed
//! [`Timeline`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest segment end |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Throughput | process count / makespan |
//! | CPU Utilization | busy time / makespan |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.2: Scheduling Criteria

use crate::models::Timeline;

/// Aggregate performance indicators for one policy run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunMetrics {
    /// Number of processes that completed.
    pub process_count: usize,
    /// Latest segment end tick.
    pub makespan: i64,
    /// Total CPU time spent executing.
    pub busy_time: i64,
    /// Total CPU time spent idle within the makespan.
    pub idle_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Processes completed per tick of makespan. 0.0 on an empty timeline.
    pub throughput: f64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl RunMetrics {
    /// Computes metrics from a completed timeline.
    ///
    /// A zero makespan (possible only for an empty timeline, which
    /// validation already excludes upstream) yields 0.0 for throughput and
    /// utilization rather than dividing by zero.
    pub fn calculate(timeline: &Timeline) -> Self {
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let process_count = timeline.outcomes.len();

        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        for o in &timeline.outcomes {
            total_turnaround += o.turnaround;
            total_waiting += o.waiting;
        }

        let (avg_turnaround, avg_waiting) = if process_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / process_count as f64,
                total_waiting as f64 / process_count as f64,
            )
        };

        let (throughput, cpu_utilization) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                process_count as f64 / makespan as f64,
                busy_time as f64 / makespan as f64,
            )
        };

        Self {
            process_count,
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            avg_turnaround,
            avg_waiting,
            throughput,
            cpu_utilization,
        }
    }
}
