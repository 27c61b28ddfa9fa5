//! CPU scheduling simulator.
//!
//! Computes per-process and aggregate performance metrics for
//! First-Come-First-Served and Round Robin scheduling over a set of
//! processes, each with an arrival time and a burst time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Discipline`, `ProcessResult`,
//!   `RunSummary`, `Timeline`, `SimulationOutcome`
//! - **`scheduler`**: FCFS and Round Robin engines plus metrics
//! - **`validation`**: Input checks and error types
//! - **`registry`**: Caller-owned process collection (the engine's input)
//! - **`report`**: Text table with two-decimal display rounding
//! - **`workload`**: Seeded random process sets
//! - **`config`**: JSON simulation files
//!
//! # Example
//!
//! ```
//! use proc_schedule::models::{Discipline, Process};
//! use proc_schedule::registry::ProcessRegistry;
//!
//! let mut registry = ProcessRegistry::new();
//! registry.add(Process::new("P1", 0, 5)).unwrap();
//! registry.add(Process::new("P2", 1, 3)).unwrap();
//! registry.add(Process::new("P3", 2, 8)).unwrap();
//!
//! let outcome = registry.simulate(Discipline::round_robin(4)).unwrap();
//! assert_eq!(outcome.completion_times(), vec![12, 7, 16]);
//! assert_eq!(outcome.summary.makespan, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod models;
pub mod registry;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
