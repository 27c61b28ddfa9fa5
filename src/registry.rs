//! Process registry.
//!
//! The ordered collection of processes a user has entered. It is the input
//! provider for the engine: records are checked on insertion (identifier,
//! ranges, uniqueness), and the engine receives an immutable slice.
//!
//! Running a simulation never reorders or otherwise changes the registry.

use serde::{Deserialize, Serialize};

use crate::models::{Discipline, Process, SimulationOutcome};
use crate::scheduler::simulate;
use crate::validation::{
    parse_ticks, validate_process, ErrorKind, ScheduleError, ValidationError, ValidationResult,
};

/// Ordered, caller-owned process collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Process>", into = "Vec<Process>")]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list, checking every record.
    pub fn from_processes(processes: Vec<Process>) -> Result<Self, Vec<ValidationError>> {
        let mut registry = Self::new();
        registry.replace(processes)?;
        Ok(registry)
    }

    /// Appends a process.
    ///
    /// Rejects invalid records and identifiers already present.
    pub fn add(&mut self, process: Process) -> ValidationResult {
        validate_process(&process)?;
        if self.contains(&process.id) {
            return Err(vec![ValidationError::new(
                ErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            )]);
        }
        self.processes.push(process);
        Ok(())
    }

    /// Appends a process from raw text fields, as typed into a form.
    pub fn add_row(&mut self, id: &str, arrival: &str, burst: &str) -> ValidationResult {
        let mut errors = Vec::new();

        let arrival_time = parse_ticks("Arrival time", arrival).map_err(|e| errors.push(e));
        let burst_time = parse_ticks("Burst time", burst).map_err(|e| errors.push(e));

        match (arrival_time, burst_time) {
            (Ok(arrival_time), Ok(burst_time)) => {
                self.add(Process::new(id.trim(), arrival_time, burst_time))
            }
            _ => Err(errors),
        }
    }

    /// Removes the process with the given ID, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Process> {
        let pos = self.processes.iter().position(|p| p.id == id)?;
        Some(self.processes.remove(pos))
    }

    /// Removes every process.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Replaces the contents, all-or-nothing.
    ///
    /// On error the registry is left unchanged.
    pub fn replace(&mut self, processes: Vec<Process>) -> ValidationResult {
        let mut staged = Self::new();
        let mut errors = Vec::new();
        for process in processes {
            if let Err(mut errs) = staged.add(process) {
                errors.append(&mut errs);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        *self = staged;
        Ok(())
    }

    /// Whether a process with this ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.processes.iter().any(|p| p.id == id)
    }

    /// Looks up a process by ID.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Registered processes, in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates over registered processes.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Runs a simulation over the current contents.
    pub fn simulate(&self, discipline: Discipline) -> Result<SimulationOutcome, ScheduleError> {
        simulate(&self.processes, discipline)
    }
}

impl TryFrom<Vec<Process>> for ProcessRegistry {
    type Error = ScheduleError;

    fn try_from(processes: Vec<Process>) -> Result<Self, Self::Error> {
        Self::from_processes(processes).map_err(ScheduleError::InvalidInput)
    }
}

impl From<ProcessRegistry> for Vec<Process> {
    fn from(registry: ProcessRegistry) -> Self {
        registry.processes
    }
}

impl<'a> IntoIterator for &'a ProcessRegistry {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
