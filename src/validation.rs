//! Input validation for scheduling runs.
//!
//! Checks a process list and discipline before simulation. Detects:
//! - Empty input
//! - Missing identifiers, negative arrival times, non-positive bursts
//! - Non-positive or non-integer Round Robin quanta
//! - Process sets whose latest arrival plus total burst overflows `i64`
//!
//! Identifier uniqueness is the input provider's concern (see
//! [`ProcessRegistry`](crate::registry::ProcessRegistry)); the engine keys
//! its working state by position and does not check it.

use std::fmt;

use crate::models::{Discipline, Process};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No processes supplied.
    EmptyInput,
    /// Negative arrival, non-positive burst, or missing identifier.
    InvalidProcess,
    /// Non-positive or non-integer Round Robin quantum.
    InvalidQuantum,
    /// Computed makespan is not positive, so throughput is undefined.
    DegenerateMakespan,
    /// Two processes share the same identifier.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Error returned by a simulation run.
///
/// A run either fully succeeds or fails with one of these; no partial
/// results are produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Input rejected before the simulation started.
    InvalidInput(Vec<ValidationError>),
    /// Makespan came out non-positive; throughput cannot be computed.
    DegenerateMakespan {
        /// The offending makespan.
        makespan: i64,
    },
}

impl ScheduleError {
    /// Whether this error carries the given kind.
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        match self {
            ScheduleError::InvalidInput(errors) => errors.iter().any(|e| e.kind == kind),
            ScheduleError::DegenerateMakespan { .. } => kind == ErrorKind::DegenerateMakespan,
        }
    }

    /// All error kinds carried, in detection order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            ScheduleError::InvalidInput(errors) => errors.iter().map(|e| e.kind).collect(),
            ScheduleError::DegenerateMakespan { .. } => vec![ErrorKind::DegenerateMakespan],
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            ScheduleError::DegenerateMakespan { makespan } => {
                write!(f, "makespan {makespan} is not positive; throughput is undefined")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}

/// Validates a single process record.
///
/// Checks:
/// 1. Identifier is non-empty (after trimming)
/// 2. Arrival time is non-negative
/// 3. Burst time is positive
pub fn validate_process(process: &Process) -> ValidationResult {
    let mut errors = Vec::new();

    if process.id.trim().is_empty() {
        errors.push(ValidationError::new(
            ErrorKind::InvalidProcess,
            "Process has an empty identifier",
        ));
    }

    if process.arrival_time < 0 {
        errors.push(ValidationError::new(
            ErrorKind::InvalidProcess,
            format!(
                "Process '{}' has negative arrival time {}",
                process.id, process.arrival_time
            ),
        ));
    }

    if process.burst_time <= 0 {
        errors.push(ValidationError::new(
            ErrorKind::InvalidProcess,
            format!(
                "Process '{}' has non-positive burst time {}",
                process.id, process.burst_time
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ErrorKind::InvalidQuantum,
            format!("Quantum must be a positive integer, got {quantum}"),
        ));
    }
    Ok(())
}

/// Validates the input for a scheduling run.
///
/// Checks:
/// 1. At least one process
/// 2. Every process passes [`validate_process`]
/// 3. `max(arrival) + sum(burst)` fits in `i64` (see [`time_horizon`]), so
///    no clock value reached during the run can overflow
/// 4. The discipline's quantum (if any) is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], discipline: &Discipline) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ErrorKind::EmptyInput,
            "No processes supplied",
        ));
    }

    for process in processes {
        if let Err(mut errs) = validate_process(process) {
            errors.append(&mut errs);
        }
    }

    // Only meaningful once every burst is known to be positive.
    if errors.is_empty() && time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ErrorKind::InvalidProcess,
            "Latest arrival plus total burst time exceeds the representable tick range",
        ));
    }

    if let Some(quantum) = discipline.quantum() {
        if let Err(e) = validate_quantum(quantum) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any clock value a run over `processes` can reach:
/// `max(arrival) + sum(burst)`.
///
/// Returns `None` if the bound does not fit in `i64`.
pub fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

/// Parses a tick count typed by a user.
///
/// Accepts optional surrounding whitespace; rejects fractions and text.
pub fn parse_ticks(field: &str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse::<i64>().map_err(|_| {
        ValidationError::new(
            ErrorKind::InvalidProcess,
            format!("{field} must be an integer, got '{raw}'"),
        )
    })
}

/// Parses a Round Robin quantum typed by a user.
///
/// Non-integer and non-positive values are both `InvalidQuantum`.
pub fn parse_quantum(raw: &str) -> Result<i64, ValidationError> {
    let quantum = raw.trim().parse::<i64>().map_err(|_| {
        ValidationError::new(
            ErrorKind::InvalidQuantum,
            format!("Quantum must be a positive integer, got '{raw}'"),
        )
    })?;
    validate_quantum(quantum)?;
    Ok(quantum)
}
