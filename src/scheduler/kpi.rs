//! Run metrics.
//!
//! Turns a raw [`Execution`] into per-process results and an aggregate
//! summary.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Throughput | count / makespan |
//! | Utilization | busy / makespan |
//!
//! The makespan comes from the discipline. A non-positive makespan is an
//! error rather than an infinite or NaN throughput.

use super::Execution;
use crate::models::{Discipline, Process, ProcessResult, RunSummary, SimulationOutcome, Timeline};
use crate::validation::ScheduleError;

/// Per-process results in input order.
///
/// # Arguments
/// * `processes` - The simulated processes.
/// * `execution` - Output of the discipline for the same processes.
pub fn process_results(processes: &[Process], execution: &Execution) -> Vec<ProcessResult> {
    processes
        .iter()
        .zip(&execution.completion_times)
        .enumerate()
        .map(|(idx, (process, &completion_time))| {
            let turnaround_time = completion_time - process.arrival_time;
            let waiting_time = turnaround_time - process.burst_time;
            let response_time = execution
                .timeline
                .first_start(idx)
                .map(|start| start - process.arrival_time)
                .unwrap_or(waiting_time);

            ProcessResult {
                process_id: process.id.clone(),
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                completion_time,
                waiting_time,
                turnaround_time,
                response_time,
            }
        })
        .collect()
}

impl RunSummary {
    /// Computes aggregate metrics.
    ///
    /// # Arguments
    /// * `results` - Per-process results.
    /// * `makespan` - Discipline-specific makespan.
    /// * `timeline` - Dispatch history (for busy time and dispatch count).
    ///
    /// # Errors
    /// `DegenerateMakespan` if `makespan <= 0`.
    pub fn calculate(
        results: &[ProcessResult],
        makespan: i64,
        timeline: &Timeline,
    ) -> Result<Self, ScheduleError> {
        if makespan <= 0 {
            return Err(ScheduleError::DegenerateMakespan { makespan });
        }

        let count = results.len();
        // Per-process values fit in i64 but their sums may not.
        let mean = |total: i128| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let total_turnaround: i128 = results.iter().map(|r| i128::from(r.turnaround_time)).sum();
        let total_waiting: i128 = results.iter().map(|r| i128::from(r.waiting_time)).sum();
        let total_response: i128 = results.iter().map(|r| i128::from(r.response_time)).sum();
        let busy_time = timeline.busy_time();

        Ok(Self {
            process_count: count,
            makespan,
            average_turnaround_time: mean(total_turnaround),
            average_waiting_time: mean(total_waiting),
            average_response_time: mean(total_response),
            throughput: count as f64 / makespan as f64,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization: busy_time as f64 / makespan as f64,
            dispatch_count: timeline.dispatch_count(),
        })
    }
}

pub(crate) fn build_outcome(
    processes: &[Process],
    discipline: Discipline,
    execution: Execution,
) -> Result<SimulationOutcome, ScheduleError> {
    let results = process_results(processes, &execution);
    let summary = RunSummary::calculate(&results, execution.makespan, &execution.timeline)?;

    Ok(SimulationOutcome {
        discipline,
        results,
        summary,
        timeline: execution.timeline,
    })
}
