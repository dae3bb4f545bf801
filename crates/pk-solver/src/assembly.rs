//! Implicit-Euler block system assembly.
//!
//! For a grid of `n` points and `ndg` delayed groups the unknown vector is
//! `[P_0 .. P_{n-1}, C_{1,0} .. C_{1,n-1}, .., C_{ndg,0} .. C_{ndg,n-1}]`,
//! giving a square system of side `(1 + ndg) * n`. Each consecutive pair of
//! timesteps contributes one power balance row and one precursor balance row
//! per group, evaluated with the reactivity at the later index:
//!
//! ```text
//! [-1] P_i + [1 - dt*(rho_{i+1} - beta_eff)/L] P_{i+1} + [-dt*lam_k] C_{k,i+1} = 0
//! [-dt*beta_k/L] P_{i+1} + [-1] C_{k,i} + [1 + dt*lam_k] C_{k,i+1}            = 0
//! ```
//!
//! The recurrence loop fills rows 0..n-1 of each block, leaving exactly the
//! last row free; the initial conditions `P_0 = P0` and
//! `C_{k,0} = beta_k*P0/(lam_k*L)` are pinned there. That packing keeps the
//! boundary rows from aliasing the recurrence rows and is relied on by the
//! unpacking step.

use nalgebra::{DMatrix, DVector};
use pk_core::{KineticsData, Real, TimeGrid};

use crate::error::{SolverError, SolverResult};

/// Assembled left-hand matrix and right-hand vector, read-only once built.
#[derive(Clone, Debug)]
pub struct BlockSystem {
    a: DMatrix<Real>,
    b: DVector<Real>,
    block_size: usize,
    num_groups: usize,
}

impl BlockSystem {
    pub fn matrix(&self) -> &DMatrix<Real> {
        &self.a
    }

    pub fn rhs(&self) -> &DVector<Real> {
        &self.b
    }

    /// Number of grid points per block (power block and each group block).
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// Total side length, `(1 + num_groups) * block_size`.
    pub fn size(&self) -> usize {
        (1 + self.num_groups) * self.block_size
    }
}

/// Assemble the implicit-Euler system for one transient.
///
/// `rho` must hold one reactivity sample per grid point. The beta/lambda
/// group arrays are equal-length by `KineticsData` construction. `p0` is the
/// initial power the boundary rows pin.
pub fn implicit_euler(
    grid: &TimeGrid,
    rho: &[Real],
    kinetics: &KineticsData,
    p0: Real,
) -> SolverResult<BlockSystem> {
    let n = grid.num_steps();
    if rho.len() != n {
        return Err(SolverError::DimensionMismatch {
            what: "reactivity samples vs grid points",
            expected: n,
            actual: rho.len(),
        });
    }

    let ndg = kinetics.num_groups();
    let dt = grid.dt();
    let lam_prompt = kinetics.lambda_prompt();
    let beta_eff = kinetics.beta_eff();
    let betas = kinetics.delay_fractions();
    let lams = kinetics.decay_constants();

    let size = (1 + ndg) * n;
    let mut a = DMatrix::zeros(size, size);
    let mut b = DVector::zeros(size);

    for ip in 0..n - 1 {
        let rho_next = rho[ip + 1];
        // Power balance between points ip and ip+1
        a[(ip, ip)] = -1.0;
        a[(ip, ip + 1)] = 1.0 - dt * (rho_next - beta_eff) / lam_prompt;
        for k in 0..ndg {
            let ic = ip + n * (k + 1);
            a[(ip, ic + 1)] = -dt * lams[k];
            // Precursor balance for group k
            a[(ic, ip + 1)] = -dt * betas[k] / lam_prompt;
            a[(ic, ic)] = -1.0;
            a[(ic, ic + 1)] = 1.0 + dt * lams[k];
        }
    }

    // Initial conditions occupy the last row of each block
    a[(n - 1, 0)] = 1.0;
    b[n - 1] = p0;
    for k in 0..ndg {
        a[(n * (k + 2) - 1, n * (k + 1))] = 1.0;
        b[n * (k + 2) - 1] = kinetics.initial_concentration(k, p0);
    }

    Ok(BlockSystem {
        a,
        b,
        block_size: n,
        num_groups: ndg,
    })
}
