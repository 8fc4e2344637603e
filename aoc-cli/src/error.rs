//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),

    /// Inputs absent before anything ran
    #[error("Missing {0} input file(s)")]
    MissingInputs(usize),

    /// At least one part did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input file could not be read
    #[error("Input read failed for {year}/{day:02} ({}): {source}", .path.display())]
    InputRead {
        year: u16,
        day: u8,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing or solving failed
    #[error("Solver execution failed: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// An input file was given but the filters select more or fewer than one solver
    #[error("An input file needs exactly one selected solver, but {0} match")]
    AmbiguousInput(usize),
}
