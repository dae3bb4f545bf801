//! Assembly method selection.

use pk_core::{KineticsData, Real, TimeGrid};

use crate::assembly::{self, BlockSystem};
use crate::error::SolverResult;

/// Discretization scheme used to assemble the block system.
///
/// Only backward (implicit) Euler is implemented; the enum keeps method
/// selection closed and exhaustively matched so adding a scheme is a
/// compile-checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AssemblyMethod {
    #[default]
    ImplicitEuler,
}

impl AssemblyMethod {
    pub fn assemble(
        self,
        grid: &TimeGrid,
        rho: &[Real],
        kinetics: &KineticsData,
        p0: Real,
    ) -> SolverResult<BlockSystem> {
        match self {
            Self::ImplicitEuler => assembly::implicit_euler(grid, rho, kinetics, p0),
        }
    }
}
