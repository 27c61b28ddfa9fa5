//! `proc-schedule` command-line front end.
//!
//! Loads processes from a JSON config (or generates a random workload),
//! runs one discipline, and prints a table or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter, Log, Metadata, Record};

use proc_schedule::config::{DisciplineName, SimulationConfig};
use proc_schedule::registry::ProcessRegistry;
use proc_schedule::report::{render_table, render_timeline};
use proc_schedule::validation::{parse_quantum, ScheduleError};
use proc_schedule::workload::WorkloadGenerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisciplineArg {
    Fcfs,
    Rr,
}

impl From<DisciplineArg> for DisciplineName {
    fn from(arg: DisciplineArg) -> Self {
        match arg {
            DisciplineArg::Fcfs => DisciplineName::Fcfs,
            DisciplineArg::Rr => DisciplineName::RoundRobin,
        }
    }
}

/// Simulate FCFS and Round Robin CPU scheduling.
#[derive(Debug, Parser)]
#[command(name = "proc-schedule", version, about)]
struct Cli {
    /// JSON simulation file (discipline, quantum, processes).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Scheduling discipline (overrides the config file).
    #[arg(short, long, value_enum)]
    discipline: Option<DisciplineArg>,

    /// Round Robin time quantum (overrides the config file).
    #[arg(short, long, value_name = "TICKS")]
    quantum: Option<String>,

    /// Replace the process list with N random processes.
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,

    /// Also print the dispatch sequence.
    #[arg(long)]
    timeline: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(count) = cli.random {
        config.processes = WorkloadGenerator::new(count)
            .with_seed(cli.seed)
            .generate()?;
        info!("generated {} random processes (seed {})", count, cli.seed);
    }
    if let Some(discipline) = cli.discipline {
        config.discipline = discipline.into();
    }
    if let Some(raw) = &cli.quantum {
        config.quantum = Some(parse_quantum(raw)?);
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let discipline = config.discipline()?;
    let registry =
        ProcessRegistry::from_processes(config.processes).map_err(ScheduleError::InvalidInput)?;

    info!("running {} over {} processes", discipline, registry.len());
    let outcome = registry.simulate(discipline)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("serializing outcome")?
        );
    } else {
        print!("{}", render_table(&outcome));
        if cli.timeline {
            println!("Timeline: {}", render_timeline(&outcome));
        }
    }

    Ok(())
}
