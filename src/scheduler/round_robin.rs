//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! Discrete-event simulation over two explicit sequences:
//! - **pending**: processes not yet arrived, sorted by arrival (stable)
//! - **ready**: FIFO of arrived, unfinished processes
//!
//! 1. Admit every pending process with `arrival <= clock`.
//! 2. While any process is unfinished:
//!    - Ready queue empty: the CPU idles until the next arrival.
//!    - Otherwise dispatch the head for `min(quantum, remaining)` ticks.
//!    - Admit arrivals up to the new clock **before** requeueing the
//!      preempted process, so newcomers run ahead of it.
//!    - Finished: record completion at the clock. Unfinished: push to tail.
//!
//! Completion order does not follow arrival order, so the makespan is the
//! maximum completion time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::trace;

use super::{arrival_order, Execution, SchedulingPolicy};
use crate::models::{Discipline, Process, Slice, Timeline};
use crate::validation::{validate_quantum, ValidationError};

/// Round Robin with a fixed quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    ///
    /// Fails with `InvalidQuantum` if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// Time slice per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn discipline(&self) -> Discipline {
        Discipline::round_robin(self.quantum)
    }

    fn execute(&self, processes: &[Process]) -> Execution {
        let n = processes.len();
        // Working copy; the caller's bursts are never touched.
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut completion_times = vec![0; n];
        let mut timeline = Timeline::new();
        let mut queue = RunQueue::new(processes);
        let mut clock: i64 = 0;
        let mut unfinished = n;

        queue.admit(processes, clock);

        while unfinished > 0 {
            let Some(idx) = queue.dispatch() else {
                // Idle ticks until the next arrival collapse into one jump.
                match queue.next_arrival(processes) {
                    Some(next) => {
                        trace!("cpu idle {}..{}", clock, next);
                        clock = next;
                        queue.admit(processes, clock);
                        continue;
                    }
                    // Every unfinished process is either ready or pending.
                    None => unreachable!(
                        "{} processes unfinished at tick {} with none ready or pending",
                        unfinished, clock
                    ),
                }
            };

            let exec = self.quantum.min(remaining[idx]);
            let start = clock;
            remaining[idx] -= exec;
            clock += exec;

            trace!(
                "dispatch {} {}..{} remaining={}",
                processes[idx].id,
                start,
                clock,
                remaining[idx]
            );
            timeline.push(Slice::new(idx, &processes[idx].id, start, clock));

            queue.admit(processes, clock);

            if remaining[idx] == 0 {
                completion_times[idx] = clock;
                unfinished -= 1;
            } else {
                queue.requeue(idx);
            }
        }

        let makespan = completion_times.iter().copied().max().unwrap_or(0);

        Execution {
            completion_times,
            makespan,
            timeline,
        }
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

/// Ready queue plus pending arrivals for Round Robin.
///
/// Holds process indices only. Both sequences are FIFO; `pending` is
/// pre-sorted by arrival time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunQueue {
    ready: VecDeque<usize>,
    pending: VecDeque<usize>,
}

impl RunQueue {
    /// Creates a queue with every process pending, in arrival order.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            ready: VecDeque::with_capacity(processes.len()),
            pending: arrival_order(processes).into(),
        }
    }

    /// Moves every pending process with `arrival <= clock` to the ready tail.
    ///
    /// Returns how many were admitted.
    pub fn admit(&mut self, processes: &[Process], clock: i64) -> usize {
        let mut admitted = 0;
        while let Some(&idx) = self.pending.front() {
            if processes[idx].arrival_time > clock {
                break;
            }
            self.pending.pop_front();
            self.ready.push_back(idx);
            admitted += 1;
        }
        admitted
    }

    /// Takes the head of the ready queue.
    pub fn dispatch(&mut self) -> Option<usize> {
        self.ready.pop_front()
    }

    /// Returns a preempted process to the ready tail.
    pub fn requeue(&mut self, idx: usize) {
        self.ready.push_back(idx);
    }

    /// Arrival time of the next pending process.
    pub fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.pending.front().map(|&idx| processes[idx].arrival_time)
    }

    /// Ready queue contents, head first.
    pub fn ready(&self) -> Vec<usize> {
        self.ready.iter().copied().collect()
    }

    /// Number of processes still waiting to arrive.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
