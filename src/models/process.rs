//! Process model.
//!
//! A process is the unit of CPU scheduling: it becomes eligible at its
//! arrival time and needs `burst_time` units of CPU to finish.
//!
//! # Time Representation
//! All times are abstract integer ticks relative to the simulation epoch
//! (t=0). The caller decides what a tick means.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Carries only the caller-supplied fields. Working state such as the
/// remaining burst under Round Robin is kept by the scheduler, so a
/// `Process` is never modified by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (non-empty, expected unique within a run).
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a process.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Earliest possible completion: arrival plus full burst, no waiting.
    ///
    /// `None` if the sum does not fit in `i64`.
    #[inline]
    pub fn earliest_completion(&self) -> Option<i64> {
        self.arrival_time.checked_add(self.burst_time)
    }
}

/// Scheduling discipline selected for a run.
///
/// Exactly one discipline runs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discipline {
    /// First-Come-First-Served: run to completion in arrival order.
    Fcfs,
    /// Round Robin with a fixed time slice per dispatch.
    RoundRobin {
        /// Maximum ticks granted per dispatch (must be positive).
        quantum: i64,
    },
}

impl Discipline {
    /// Round Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Discipline::RoundRobin { quantum }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::RoundRobin { .. } => "RR",
        }
    }

    /// Quantum, if the discipline has one.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Discipline::Fcfs => None,
            Discipline::RoundRobin { quantum } => Some(*quantum),
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discipline::Fcfs => write!(f, "FCFS"),
            Discipline::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
        }
    }
}
