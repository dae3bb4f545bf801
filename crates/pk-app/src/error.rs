//! Error types for the pk-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides the single error surface the CLI reports.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Project(String),

    #[error("Reactivity error: {0}")]
    Reactivity(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Setup error: {0}")]
    Setup(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pk-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pk_project::ProjectError> for AppError {
    fn from(err: pk_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<pk_reactivity::ReactivityError> for AppError {
    fn from(err: pk_reactivity::ReactivityError) -> Self {
        AppError::Reactivity(err.to_string())
    }
}

impl From<pk_solver::SolverError> for AppError {
    fn from(err: pk_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<pk_results::ResultsError> for AppError {
    fn from(err: pk_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<pk_core::PkError> for AppError {
    fn from(err: pk_core::PkError) -> Self {
        AppError::Setup(err.to_string())
    }
}
