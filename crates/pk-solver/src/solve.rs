//! Direct linear solve and solution unpacking.

use nalgebra::{DMatrix, DVector};
use pk_core::Real;

use crate::assembly::BlockSystem;
use crate::error::{SolverError, SolverResult};

/// Solved power and precursor concentration time series.
#[derive(Clone, Debug)]
pub struct KineticsSolution {
    /// Reactor power at each grid point.
    pub powers: Vec<Real>,
    /// One concentration series per delayed group, each of grid length.
    pub concentrations: Vec<Vec<Real>>,
}

/// Solve an assembled block system.
pub fn solve(system: &BlockSystem) -> SolverResult<KineticsSolution> {
    solve_system(system.matrix(), system.rhs(), system.block_size())
}

/// Solve `A * x = B` and unpack `x` into per-block time series.
///
/// `block_size` is the number of grid points per block: the first block of
/// `x` is the power series, every further block one delayed group's
/// concentration series.
pub fn solve_system(
    a: &DMatrix<Real>,
    b: &DVector<Real>,
    block_size: usize,
) -> SolverResult<KineticsSolution> {
    if a.nrows() != a.ncols() {
        return Err(SolverError::DimensionMismatch {
            what: "system matrix rows vs columns",
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if b.len() != a.nrows() {
        return Err(SolverError::DimensionMismatch {
            what: "right-hand side vs matrix rows",
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    if block_size == 0 || a.nrows() % block_size != 0 || a.nrows() / block_size < 2 {
        return Err(SolverError::DimensionMismatch {
            what: "matrix rows vs block size",
            expected: block_size.max(1) * 2,
            actual: a.nrows(),
        });
    }

    let x = a
        .clone()
        .lu()
        .solve(b)
        .ok_or(SolverError::Singular { size: a.nrows() })?;

    let n = block_size;
    let num_groups = a.nrows() / n - 1;
    let powers = x.as_slice()[..n].to_vec();
    let concentrations = (0..num_groups)
        .map(|k| x.as_slice()[n * (k + 1)..n * (k + 2)].to_vec())
        .collect();

    Ok(KineticsSolution {
        powers,
        concentrations,
    })
}
