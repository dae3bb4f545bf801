//! Whole-trajectory point kinetics solver.
//!
//! The point kinetics equations are linear in power and precursor
//! concentrations once the reactivity history is fixed, so instead of
//! marching timestep by timestep the implicit-Euler discretization of the
//! entire transient is assembled as one block linear system and solved in a
//! single direct solve. The unknown vector stacks the power series first,
//! then one concentration series per delayed group.

pub mod assembly;
pub mod error;
pub mod method;
pub mod solve;

pub use assembly::{BlockSystem, implicit_euler};
pub use error::{SolverError, SolverResult};
pub use method::AssemblyMethod;
pub use solve::{KineticsSolution, solve, solve_system};
