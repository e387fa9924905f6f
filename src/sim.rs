//! Simulation orchestration.
//!
//! [`Simulator`] ties the pieces together: validate the input, build the
//! configured policy, run it over the shared immutable process slice, and
//! attach aggregate metrics. Each run owns its timeline and every run sees
//! the same input, so comparing policies never cross-contaminates state.
//!
//! The engine is a pure deterministic computation — identical input always
//! produces identical output. Errors are reported synchronously through
//! [`SimulationError`]; none are swallowed.

use std::fmt;

use crate::metrics::RunMetrics;
use crate::models::{ProcessSpec, Timeline};
use crate::policy::PolicyConfig;
use crate::validation::{validate_run, ValidationError};

/// Why a simulation run was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The input failed validation; no partial state was produced.
    InvalidInput(Vec<ValidationError>),
    /// The run produced a zero makespan, which would make throughput
    /// undefined. Cannot occur for input that passes validation.
    DegenerateMetrics,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid input ({} problem(s)):", errors.len())?;
                for e in errors {
                    write!(f, " {};", e.message)?;
                }
                Ok(())
            }
            SimulationError::DegenerateMetrics => {
                write!(f, "run produced a zero makespan; metrics are undefined")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// The complete result of one policy run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Label of the policy that produced this run, including parameters.
    pub policy: String,
    /// Execution segments and per-process outcomes.
    pub timeline: Timeline,
    /// Aggregate metrics over the timeline.
    pub metrics: RunMetrics,
}

/// Runs scheduling policies over validated process sets.
///
/// # Example
///
/// ```
/// use schedsim::models::ProcessSpec;
/// use schedsim::policy::PolicyConfig;
/// use schedsim::sim::Simulator;
///
/// let processes = vec![
///     ProcessSpec::new(1, 0, 5).with_priority(2),
///     ProcessSpec::new(2, 0, 3).with_priority(1),
/// ];
///
/// let report = Simulator::new()
///     .run(&PolicyConfig::Priority { aging: false }, &processes)
///     .unwrap();
/// assert_eq!(report.timeline.segments[0].pid, 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Runs one policy over the process set.
    ///
    /// Validation failures reject the run before any scheduling happens.
    pub fn run(
        &self,
        config: &PolicyConfig,
        processes: &[ProcessSpec],
    ) -> Result<SimulationReport, SimulationError> {
        validate_run(config, processes).map_err(SimulationError::InvalidInput)?;

        let policy = config.build();
        let timeline = policy.run(processes);
        if timeline.makespan() <= 0 {
            return Err(SimulationError::DegenerateMetrics);
        }

        let metrics = RunMetrics::calculate(&timeline);
        Ok(SimulationReport {
            policy: config.label(),
            timeline,
            metrics,
        })
    }

    /// Runs several policy configurations over the same process set.
    ///
    /// Reports come back in configuration order. The first invalid
    /// configuration aborts the comparison.
    pub fn compare(
        &self,
        configs: &[PolicyConfig],
        processes: &[ProcessSpec],
    ) -> Result<Vec<SimulationReport>, SimulationError> {
        configs.iter().map(|c| self.run(c, processes)).collect()
    }
}
