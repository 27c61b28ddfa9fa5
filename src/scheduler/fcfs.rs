//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable on ties).
//! 2. Keep a clock starting at 0.
//! 3. For each process: if it has not arrived yet, the CPU idles until it
//!    does; then it runs its whole burst and completes at the new clock.
//!
//! Completion times are non-decreasing in execution order, so the makespan
//! is the completion of the last process dispatched.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use log::trace;

use super::{arrival_order, Execution, SchedulingPolicy};
use crate::models::{Discipline, Process, Slice, Timeline};

/// First-Come-First-Served (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn discipline(&self) -> Discipline {
        Discipline::Fcfs
    }

    fn execute(&self, processes: &[Process]) -> Execution {
        let mut completion_times = vec![0; processes.len()];
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;
        let mut makespan: i64 = 0;

        for idx in arrival_order(processes) {
            let process = &processes[idx];

            if process.arrival_time > clock {
                trace!("cpu idle {}..{}", clock, process.arrival_time);
                clock = process.arrival_time;
            }

            let start = clock;
            clock += process.burst_time;
            completion_times[idx] = clock;
            makespan = clock;

            trace!("dispatch {} {}..{}", process.id, start, clock);
            timeline.push(Slice::new(idx, &process.id, start, clock));
        }

        Execution {
            completion_times,
            makespan,
            timeline,
        }
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_back_to_back() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let exec = Fcfs.execute(&processes);
        assert_eq!(exec.completion_times, vec![5, 8, 16]);
        assert_eq!(exec.makespan, 16);
        assert_eq!(exec.timeline.dispatch_count(), 3);
        assert_eq!(exec.timeline.idle_time(), 0);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 10, 3)];
        let exec = Fcfs.execute(&processes);
        // P2 starts at its arrival, not at P1's completion
        assert_eq!(exec.completion_times, vec![2, 13]);
        assert_eq!(exec.timeline.first_start(1), Some(10));
        assert_eq!(exec.timeline.idle_time(), 8);
    }

    #[test]
    fn test_fcfs_late_first_arrival() {
        let exec = Fcfs.execute(&[Process::new("P1", 4, 3)]);
        assert_eq!(exec.completion_times, vec![7]);
        assert_eq!(exec.makespan, 7);
    }

    #[test]
    fn test_fcfs_tie_keeps_input_order() {
        let processes = vec![
            Process::new("X", 0, 4),
            Process::new("Y", 0, 1),
            Process::new("Z", 0, 2),
        ];
        let exec = Fcfs.execute(&processes);
        assert_eq!(exec.completion_times, vec![4, 5, 7]);
        let order: Vec<&str> = exec
            .timeline
            .slices
            .iter()
            .map(|s| s.process_id.as_str())
            .collect();
        assert_eq!(order, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_fcfs_unsorted_input() {
        let processes = vec![
            Process::new("P3", 6, 1),
            Process::new("P1", 0, 4),
            Process::new("P2", 3, 2),
        ];
        let exec = Fcfs.execute(&processes);
        // P1: 0..4, P2: 4..6, P3: 6..7
        assert_eq!(exec.completion_times, vec![7, 4, 6]);
        assert_eq!(exec.makespan, 7);
    }
}
