//! Timeline (execution trace) model.
//!
//! A timeline is the ordered list of CPU dispatches produced by one
//! simulation run. Each slice records which process held the CPU and for
//! which half-open interval `[start, end)`. Gaps between slices are idle time.

use serde::{Deserialize, Serialize};

/// The ordered dispatch history of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Dispatches in execution order.
    pub slices: Vec<Slice>,
}

/// One contiguous CPU dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Position of the process in the input sequence.
    pub process_index: usize,
    /// Process identifier (denormalized for display).
    pub process_id: String,
    /// Dispatch start tick.
    pub start: i64,
    /// Dispatch end tick (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(process_index: usize, process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_index,
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Ticks spent on the CPU in this slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatch.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Latest end tick across all slices.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Ticks in `[0, makespan)` with no process on the CPU.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of dispatches.
    pub fn dispatch_count(&self) -> usize {
        self.slices.len()
    }

    /// All slices for the process at `process_index`.
    pub fn slices_for(&self, process_index: usize) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_index == process_index)
            .collect()
    }

    /// First dispatch tick of the process at `process_index`.
    pub fn first_start(&self, process_index: usize) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.process_index == process_index)
            .map(|s| s.start)
    }

    /// Last end tick of the process at `process_index`.
    pub fn completion_of(&self, process_index: usize) -> Option<i64> {
        self.slices_for(process_index).iter().map(|s| s.end).max()
    }
}
