//! Solution-mode run execution.

use std::path::{Path, PathBuf};

use pk_project::Input;
use pk_results::{ArtifactStore, RunManifest, names};
use pk_solver::solve;

use crate::compile::compile_input;
use crate::error::{AppError, AppResult};

const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of one solution run.
#[derive(Debug, Clone)]
pub struct SolutionSummary {
    pub output_dir: PathBuf,
    pub num_steps: usize,
    pub num_groups: usize,
    pub final_power: f64,
}

/// Execute the full solution pipeline for a validated input.
///
/// Stages run strictly in sequence: compile, sample reactivity, assemble,
/// solve, persist. The time grid and reactivity vector are written before the
/// solve so a singular-system failure still leaves them on disk for
/// diagnosis.
pub fn run_solution(input: &Input, output_dir: &Path) -> AppResult<SolutionSummary> {
    let setup = compile_input(input)?;
    let n = setup.grid.num_steps();
    tracing::info!(
        num_steps = n,
        num_groups = setup.kinetics.num_groups(),
        dt = setup.grid.dt(),
        "compiled input"
    );

    let store = ArtifactStore::new(output_dir)?;
    let times = setup.grid.times();
    let rho = setup.profile.sample(&setup.grid);
    store.write_vector(names::TIMES, &times)?;
    store.write_vector(names::REACTIVITIES, &rho)?;

    let system = setup
        .method
        .assemble(&setup.grid, &rho, &setup.kinetics, setup.initial_power)?;
    tracing::info!(size = system.size(), "assembled block system");
    let matrix_rows: Vec<Vec<f64>> = system
        .matrix()
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect();
    store.write_matrix(names::MATRIX_A, &matrix_rows)?;
    store.write_vector(names::RHS_B, system.rhs().as_slice())?;

    let solution = solve(&system)?;
    tracing::info!("solved block system");
    store.write_vector(names::POWERS, &solution.powers)?;
    store.write_matrix(names::CONCENTRATIONS, &solution.concentrations)?;

    let manifest = RunManifest {
        run_id: "solution".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        solver_version: SOLVER_VERSION.to_string(),
        method: setup.method_name().to_string(),
        num_steps: n,
        dt_s: setup.grid.dt(),
        num_groups: setup.kinetics.num_groups(),
    };
    store.save_manifest(&manifest)?;

    let final_power = solution
        .powers
        .last()
        .copied()
        .ok_or_else(|| AppError::Solver("empty power series".to_string()))?;
    tracing::info!(final_power, output_dir = %output_dir.display(), "run persisted");

    Ok(SolutionSummary {
        output_dir: output_dir.to_path_buf(),
        num_steps: n,
        num_groups: setup.kinetics.num_groups(),
        final_power,
    })
}
