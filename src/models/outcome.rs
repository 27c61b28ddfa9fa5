//! Simulation output model.
//!
//! A run produces one [`ProcessResult`] per input process (in input order),
//! an aggregate [`RunSummary`], and the [`Timeline`] of dispatches.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Throughput | process count / makespan |
//! | CPU utilization | busy time / makespan |

use serde::{Deserialize, Serialize};

use super::{Discipline, Timeline};

/// Computed metrics for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub process_id: String,
    /// Arrival tick (echoed from input).
    pub arrival_time: i64,
    /// Burst ticks (echoed from input).
    pub burst_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

/// Aggregate metrics for a run.
///
/// Values are full precision. Rounding is left to the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of processes.
    pub process_count: usize,
    /// Completion tick of the last process to finish.
    pub makespan: i64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Processes completed per tick of makespan.
    pub throughput: f64,
    /// Ticks the CPU was executing a process.
    pub busy_time: i64,
    /// Ticks in `[0, makespan)` the CPU sat idle.
    pub idle_time: i64,
    /// `busy_time / makespan` (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Number of dispatches.
    pub dispatch_count: usize,
}

/// Everything a single run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Discipline that produced this outcome.
    pub discipline: Discipline,
    /// Per-process results, in input order.
    pub results: Vec<ProcessResult>,
    /// Aggregate metrics.
    pub summary: RunSummary,
    /// Dispatch history.
    pub timeline: Timeline,
}

impl ProcessResult {
    /// Whether the result is internally consistent with its own inputs.
    pub fn is_consistent(&self) -> bool {
        self.turnaround_time == self.completion_time - self.arrival_time
            && self.waiting_time == self.turnaround_time - self.burst_time
            && self.waiting_time >= 0
            && self.response_time >= 0
            && self.response_time <= self.waiting_time
    }
}

impl SimulationOutcome {
    /// Finds the result for a process ID.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.process_id == process_id)
    }

    /// Completion times in input order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.completion_time).collect()
    }

    /// Waiting times in input order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.waiting_time).collect()
    }

    /// Turnaround times in input order.
    pub fn turnaround_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.turnaround_time).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(completion: i64, waiting: i64, turnaround: i64, response: i64) -> ProcessResult {
        ProcessResult {
            process_id: "P1".into(),
            arrival_time: 2,
            burst_time: 5,
            completion_time: completion,
            waiting_time: waiting,
            turnaround_time: turnaround,
            response_time: response,
        }
    }

    #[test]
    fn test_result_consistency() {
        assert!(result(10, 3, 8, 1).is_consistent());
        // turnaround does not match completion - arrival
        assert!(!result(10, 3, 9, 1).is_consistent());
        // response cannot exceed waiting
        assert!(!result(10, 3, 8, 4).is_consistent());
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = SimulationOutcome {
            discipline: Discipline::Fcfs,
            results: vec![result(7, 0, 5, 0)],
            summary: RunSummary {
                process_count: 1,
                makespan: 7,
                average_turnaround_time: 5.0,
                average_waiting_time: 0.0,
                average_response_time: 0.0,
                throughput: 1.0 / 7.0,
                busy_time: 5,
                idle_time: 2,
                cpu_utilization: 5.0 / 7.0,
                dispatch_count: 1,
            },
            timeline: Timeline::new(),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["discipline"]["kind"], "fcfs");
        assert_eq!(json["results"][0]["completion_time"], 7);

        let back: SimulationOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back.completion_times(), vec![7]);
        assert_eq!(back.result_for("P1").map(|r| r.waiting_time), Some(0));
        assert!(back.result_for("P9").is_none());
    }
}
