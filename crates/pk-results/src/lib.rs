//! pk-results: numeric artifact storage for solver runs.
//!
//! Every run persists its artifacts as whitespace-delimited text, one named
//! file per artifact (one value per line for vectors, space-separated rows
//! for matrices), plus a small JSON manifest describing the run.

pub mod store;
pub mod types;

pub use store::{ArtifactStore, names};
pub use types::RunManifest;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed numeric artifact {name} at line {line}: {token}")]
    MalformedArtifact {
        name: String,
        line: usize,
        token: String,
    },

    #[error("Artifact not found: {name}")]
    ArtifactNotFound { name: String },
}
