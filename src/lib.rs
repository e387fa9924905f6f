//! CPU scheduling policy simulator.
//!
//! Simulates classic single-core scheduling policies over a static set of
//! processes known in advance, producing an execution timeline and
//! per-process performance metrics. Time is a simulated integer counter
//! advanced by the policies; nothing here touches a real operating system.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `ProcessOutcome`,
//!   `ExecutionSegment`, `Timeline`
//! - **`policy`**: The `SchedulingPolicy` trait, the four policies
//!   (FCFS, SJF, round robin, priority with optional aging), and
//!   `PolicyConfig` for runtime selection
//! - **`sim`**: `Simulator` orchestration and `SimulationReport`
//! - **`metrics`**: `RunMetrics` aggregates (averages, throughput, utilization)
//! - **`validation`**: Input integrity checks (duplicate pids, bad bursts)
//! - **`workload`**: Sample and random workload construction
//!
//! # Example
//!
//! ```
//! use schedsim::models::ProcessSpec;
//! use schedsim::policy::PolicyConfig;
//! use schedsim::sim::Simulator;
//!
//! let processes = vec![
//!     ProcessSpec::new(1, 0, 3),
//!     ProcessSpec::new(2, 1, 2),
//! ];
//!
//! let report = Simulator::new()
//!     .run(&PolicyConfig::Fcfs, &processes)
//!     .expect("valid input");
//!
//! assert_eq!(report.timeline.makespan(), 5);
//! assert_eq!(report.metrics.avg_waiting, 1.0);
//! ```
//!
//! # Architecture
//!
//! The crate is a pure library: presentation concerns (result tables, Gantt
//! charts, interactive menus) live in consumers, which must treat timelines
//! and metrics as read-only and never re-derive scheduling decisions.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod metrics;
pub mod models;
pub mod policy;
pub mod sim;
pub mod validation;
pub mod workload;
