//! CPU scheduling domain models.
//!
//! Provides the data types for describing a simulation input and its
//! results.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input record: id, arrival, burst |
//! | `Discipline` | FCFS or Round Robin (with quantum) |
//! | `ProcessResult` | Per-process completion/waiting/turnaround |
//! | `RunSummary` | Averages, throughput, utilization |
//! | `Timeline` | Dispatch history of a run |

mod outcome;
mod process;
mod timeline;

pub use outcome::{ProcessResult, RunSummary, SimulationOutcome};
pub use process::{Discipline, Process};
pub use timeline::{Slice, Timeline};
