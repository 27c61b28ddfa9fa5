//! Random workload generation.
//!
//! Produces reproducible process sets (same seed, same processes) for demos
//! and property checks. Arrival and burst times are drawn uniformly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::validation::{ErrorKind, ValidationError};

/// Settings for a random process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes (IDs `P1..Pn`).
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Smallest burst (at least 1).
    pub min_burst: i64,
    /// Largest burst.
    pub max_burst: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            seed: 42,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the arrival upper bound.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn check(&self) -> Result<(), ValidationError> {
        let problem = if self.count == 0 {
            Some("count must be at least 1".to_string())
        } else if self.max_arrival < 0 {
            Some(format!("max_arrival must be non-negative, got {}", self.max_arrival))
        } else if self.min_burst < 1 {
            Some(format!("min_burst must be at least 1, got {}", self.min_burst))
        } else if self.min_burst > self.max_burst {
            Some(format!(
                "burst range is empty: {}..={}",
                self.min_burst, self.max_burst
            ))
        } else {
            None
        };

        match problem {
            None => Ok(()),
            Some(message) => Err(ValidationError::new(
                ErrorKind::InvalidProcess,
                format!("Invalid workload settings: {message}"),
            )),
        }
    }

    /// Generates the process set.
    ///
    /// Every generated process is valid input for the engine.
    pub fn generate(&self) -> Result<Vec<Process>, ValidationError> {
        self.check()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let processes = (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                Process::new(format!("P{i}"), arrival, burst)
            })
            .collect();

        Ok(processes)
    }
}
