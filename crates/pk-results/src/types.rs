//! Result data types.

use serde::{Deserialize, Serialize};

/// Metadata written beside the numeric artifacts of one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: String,
    pub timestamp: String,
    pub solver_version: String,
    pub method: String,
    pub num_steps: usize,
    pub dt_s: f64,
    pub num_groups: usize,
}
