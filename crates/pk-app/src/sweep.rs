//! Timestep parameter sweep.
//!
//! Each sweep point is a complete, independent solution run with its own
//! output directory, so points execute in parallel with no shared state.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use pk_project::{Input, ProjectError, validate_input};
use pk_results::ArtifactStore;

use crate::error::{AppError, AppResult};
use crate::run_service::run_solution;

/// Summary artifact name: one `dt final_power` row per sweep point.
pub const SWEEP_SUMMARY: &str = "sweep.txt";

#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub dt: f64,
    pub num_steps: usize,
    pub final_power: f64,
    pub output_dir: PathBuf,
}

/// Run the solution pipeline once per timestep value.
///
/// Points land in `output_root/dt_<value>/`; the summary table is written to
/// `output_root/sweep.txt` ordered coarse to fine.
pub fn run_sweep(input: &Input, dts: &[f64], output_root: &Path) -> AppResult<Vec<SweepPoint>> {
    if dts.is_empty() {
        return Err(AppError::InvalidInput(
            "sweep needs at least one dt value".to_string(),
        ));
    }
    tracing::info!(points = dts.len(), "starting dt sweep");

    let mut points = dts
        .par_iter()
        .map(|&dt| run_point(input, dt, output_root))
        .collect::<AppResult<Vec<SweepPoint>>>()?;
    points.sort_by(|a, b| b.dt.total_cmp(&a.dt));

    let store = ArtifactStore::new(output_root)?;
    let rows: Vec<Vec<f64>> = points.iter().map(|p| vec![p.dt, p.final_power]).collect();
    store.write_matrix(SWEEP_SUMMARY, &rows)?;
    tracing::info!(points = points.len(), "sweep complete");

    Ok(points)
}

fn run_point(input: &Input, dt: f64, output_root: &Path) -> AppResult<SweepPoint> {
    let mut point_input = input.clone();
    point_input.time.dt = dt;
    // dt came from the command line, not the validated file
    let violations = validate_input(&point_input);
    if !violations.is_empty() {
        return Err(ProjectError::Validation(violations).into());
    }

    let output_dir = output_root.join(format!("dt_{dt}"));
    let summary = run_solution(&point_input, &output_dir)?;
    Ok(SweepPoint {
        dt,
        num_steps: summary.num_steps,
        final_power: summary.final_power,
        output_dir: summary.output_dir,
    })
}
