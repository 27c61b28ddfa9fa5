//! Simulation configuration files.
//!
//! A config is a JSON document naming the discipline, the quantum (Round
//! Robin only) and the process list:
//!
//! ```json
//! {
//!   "discipline": "round_robin",
//!   "quantum": 4,
//!   "processes": [
//!     { "id": "P1", "arrival_time": 0, "burst_time": 5 },
//!     { "id": "P2", "arrival_time": 1, "burst_time": 3 }
//!   ]
//! }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{Discipline, Process};
use crate::validation::{validate_quantum, ErrorKind, ValidationError};

/// Discipline names accepted in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineName {
    /// First-Come-First-Served.
    #[default]
    #[serde(alias = "FCFS")]
    Fcfs,
    /// Round Robin.
    #[serde(alias = "rr", alias = "RR")]
    RoundRobin,
}

/// A simulation described as data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Discipline to run.
    #[serde(default)]
    pub discipline: DisciplineName,
    /// Round Robin quantum. Ignored for FCFS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Processes in input order.
    #[serde(default)]
    pub processes: Vec<Process>,
}

/// Failure to load a config.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The document is not valid config JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl SimulationConfig {
    /// Creates a config.
    pub fn new(discipline: DisciplineName, processes: Vec<Process>) -> Self {
        Self {
            discipline,
            quantum: None,
            processes,
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Parses a JSON document.
    ///
    /// A fractional or non-numeric quantum fails here as a parse error.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Resolves the configured discipline.
    ///
    /// Round Robin needs a positive `quantum`; a missing one is
    /// `InvalidQuantum`.
    pub fn discipline(&self) -> Result<Discipline, ValidationError> {
        match self.discipline {
            DisciplineName::Fcfs => Ok(Discipline::Fcfs),
            DisciplineName::RoundRobin => {
                let quantum = self.quantum.ok_or_else(|| {
                    ValidationError::new(
                        ErrorKind::InvalidQuantum,
                        "Round Robin requires a quantum",
                    )
                })?;
                validate_quantum(quantum)?;
                Ok(Discipline::round_robin(quantum))
            }
        }
    }
}
