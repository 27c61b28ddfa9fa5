//! CPU scheduling engine.
//!
//! Runs one discipline over a process list to completion and derives
//! per-process and aggregate metrics.
//!
//! # Disciplines
//!
//! - [`Fcfs`]: non-preemptive, arrival order.
//! - [`RoundRobin`]: preemptive, fixed quantum, FIFO ready queue.
//!
//! Both produce an [`Execution`] (completion times in input order, makespan,
//! dispatch timeline), which the metrics step turns into a
//! [`SimulationOutcome`].
//!
//! # Usage
//!
//! ```
//! use proc_schedule::models::{Discipline, Process};
//! use proc_schedule::scheduler::simulate;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let outcome = simulate(&processes, Discipline::Fcfs).unwrap();
//! assert_eq!(outcome.completion_times(), vec![5, 8, 16]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod round_robin;

pub use fcfs::Fcfs;
pub use kpi::process_results;
pub use round_robin::{RoundRobin, RunQueue};

use std::fmt::Debug;

use log::debug;

use crate::models::{Discipline, Process, SimulationOutcome, Timeline};
use crate::validation::{validate_input, ScheduleError};

/// Raw product of running a discipline, before metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Completion tick per process, in input order.
    pub completion_times: Vec<i64>,
    /// Discipline-specific makespan.
    pub makespan: i64,
    /// Dispatch history.
    pub timeline: Timeline,
}

/// A CPU scheduling discipline.
///
/// Implementations assume validated input (non-empty, non-negative
/// arrivals, positive bursts). Use [`simulate`] for the checked path.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Discipline descriptor for this policy.
    fn discipline(&self) -> Discipline;

    /// Runs the policy to completion over `processes`.
    ///
    /// `processes` is only read; working state lives in the call.
    fn execute(&self, processes: &[Process]) -> Execution;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Builds the policy for a discipline.
///
/// Fails with `InvalidQuantum` for a non-positive Round Robin quantum.
pub fn policy_for(discipline: Discipline) -> Result<Box<dyn SchedulingPolicy>, ScheduleError> {
    match discipline {
        Discipline::Fcfs => Ok(Box::new(Fcfs)),
        Discipline::RoundRobin { quantum } => RoundRobin::new(quantum)
            .map(|rr| Box::new(rr) as Box<dyn SchedulingPolicy>)
            .map_err(|e| ScheduleError::InvalidInput(vec![e])),
    }
}

/// Validates the input, runs the discipline, and computes metrics.
///
/// # Errors
/// - `InvalidInput` with `EmptyInput`, `InvalidProcess` or `InvalidQuantum`
///   kinds when validation fails (nothing is simulated).
/// - `DegenerateMakespan` when the makespan is not positive.
pub fn simulate(
    processes: &[Process],
    discipline: Discipline,
) -> Result<SimulationOutcome, ScheduleError> {
    validate_input(processes, &discipline)?;
    let policy = policy_for(discipline)?;

    debug!(
        "simulating {} processes under {}",
        processes.len(),
        discipline
    );

    let execution = policy.execute(processes);
    let outcome = kpi::build_outcome(processes, discipline, execution)?;

    debug!(
        "{} finished: makespan={} avg_tat={:.3} avg_wait={:.3} throughput={:.4}",
        discipline,
        outcome.summary.makespan,
        outcome.summary.average_turnaround_time,
        outcome.summary.average_waiting_time,
        outcome.summary.throughput
    );

    Ok(outcome)
}

/// Indices of `processes` sorted by arrival time.
///
/// The sort is stable: equal arrivals keep their input order.
pub fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}
