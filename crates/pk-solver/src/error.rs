//! Error types for assembly and solve operations.

use thiserror::Error;

/// Errors that can occur while assembling or solving the kinetics system.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Dimension mismatch: {what} (expected {expected}, got {actual})")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Singular system: no solution for the {size}x{size} kinetics matrix")]
    Singular { size: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;
