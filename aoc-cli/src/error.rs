//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("{0}")]
    Executor(#[from] ExecutorError),

    #[error("Executor thread panicked")]
    ExecutorPanicked,
}

/// A puzzle input could not be loaded
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Channel send error")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Why a single part produced no answer
#[derive(Error, Debug, Clone)]
pub enum RunError {
    /// Shared by every part of the day whose input failed to load
    #[error("{0}")]
    Input(Arc<InputError>),

    #[error("{0}")]
    Solver(Arc<aoc_solver::SolverError>),
}

impl From<aoc_solver::SolverError> for RunError {
    fn from(e: aoc_solver::SolverError) -> Self {
        RunError::Solver(Arc::new(e))
    }
}

impl From<aoc_solver::SolveError> for RunError {
    fn from(e: aoc_solver::SolveError) -> Self {
        aoc_solver::SolverError::from(e).into()
    }
}
