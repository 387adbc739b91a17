//! Error types for the GA-CVRP solver.

use thiserror::Error;

/// Errors surfaced by problem construction and the evolution loop.
#[derive(Debug, Error)]
pub enum Error {
    /// A structural precondition on the problem or configuration failed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Every individual in the first generation was infeasible, so no
    /// best-known solution could be established.
    #[error("no valid initial solution found")]
    NoValidInitialSolution,

    /// An instance file could not be parsed.
    #[error("failed to parse instance: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
