//! Plain-text rendering of simulation results.
//!
//! The engine returns full-precision values; this module applies the
//! two-decimal display rounding.

use std::fmt;

use crate::models::SimulationOutcome;

/// Rounds to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

const HEADERS: [&str; 7] = [
    "Process",
    "Arrival",
    "Burst",
    "Completion",
    "Waiting",
    "Turnaround",
    "Response",
];

/// Per-process table followed by the summary block.
///
/// # Example
/// ```
/// use proc_schedule::models::{Discipline, Process};
/// use proc_schedule::report::Report;
/// use proc_schedule::scheduler::simulate;
///
/// let outcome = simulate(&[Process::new("P1", 0, 4)], Discipline::Fcfs).unwrap();
/// let text = Report::new(&outcome).to_string();
/// assert!(text.contains("Throughput: 0.25"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    outcome: &'a SimulationOutcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a SimulationOutcome) -> Self {
        Self { outcome }
    }

    fn rows(&self) -> Vec<[String; 7]> {
        self.outcome
            .results
            .iter()
            .map(|r| {
                [
                    r.process_id.clone(),
                    r.arrival_time.to_string(),
                    r.burst_time.to_string(),
                    r.completion_time.to_string(),
                    r.waiting_time.to_string(),
                    r.turnaround_time.to_string(),
                    r.response_time.to_string(),
                ]
            })
            .collect()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        writeln!(f, "Discipline: {}", self.outcome.discipline)?;

        let header: Vec<String> = HEADERS
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{h:<w$}"))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("  "))?;

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, &w))| {
                    if i == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join("  "))?;
        }

        let s = &self.outcome.summary;
        writeln!(f)?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2}",
            round2(s.average_turnaround_time)
        )?;
        writeln!(f, "Average Waiting Time: {:.2}", round2(s.average_waiting_time))?;
        writeln!(
            f,
            "Average Response Time: {:.2}",
            round2(s.average_response_time)
        )?;
        writeln!(f, "Throughput: {:.2}", round2(s.throughput))?;
        writeln!(
            f,
            "Makespan: {}  CPU Utilization: {:.2}%",
            s.makespan,
            round2(s.cpu_utilization * 100.0)
        )
    }
}

/// Renders the per-process table followed by the summary block.
pub fn render_table(outcome: &SimulationOutcome) -> String {
    Report::new(outcome).to_string()
}

/// Renders the dispatch sequence as `id[start-end]` tokens.
pub fn render_timeline(outcome: &SimulationOutcome) -> String {
    outcome
        .timeline
        .slices
        .iter()
        .map(|s| format!("{}[{}-{}]", s.process_id, s.start, s.end))
        .collect::<Vec<_>>()
        .join(" ")
}
