//! Runtime compilation: schema definitions to core objects.
//!
//! The schema crate knows nothing about the numeric core; this module turns a
//! validated `Input` into the typed records the pipeline consumes. The core
//! constructors re-check their own invariants, so a hand-built `Input` that
//! skipped `validate_input` still cannot reach the assembler malformed.

use pk_core::{KineticsData, TimeGrid};
use pk_project::{Input, MethodDef, ReactivityDef};
use pk_reactivity::ReactivityProfile;
use pk_solver::AssemblyMethod;

use crate::error::AppResult;

/// Everything the solution pipeline needs, compiled from one input record.
#[derive(Clone, Debug)]
pub struct RunSetup {
    pub grid: TimeGrid,
    pub kinetics: KineticsData,
    pub profile: ReactivityProfile,
    pub method: AssemblyMethod,
    pub initial_power: f64,
}

impl RunSetup {
    /// Human-readable method name for manifests and logs.
    pub fn method_name(&self) -> &'static str {
        match self.method {
            AssemblyMethod::ImplicitEuler => "implicit euler",
        }
    }
}

pub fn compile_input(input: &Input) -> AppResult<RunSetup> {
    let grid = TimeGrid::from_horizon(input.time.total, input.time.dt)?;
    let kinetics = KineticsData::new(
        input.data.delay_fractions.clone(),
        input.data.decay_constants.clone(),
        input.data.lambda,
    )?;
    let profile = compile_reactivity(&input.reactivity)?;
    let method = match input.method {
        MethodDef::ImplicitEuler => AssemblyMethod::ImplicitEuler,
    };
    Ok(RunSetup {
        grid,
        kinetics,
        profile,
        method,
        initial_power: input.data.initial_power,
    })
}

fn compile_reactivity(def: &ReactivityDef) -> AppResult<ReactivityProfile> {
    let profile = match *def {
        ReactivityDef::Step { rho, start, stop } => {
            ReactivityProfile::step(rho, start, stop.unwrap_or(f64::INFINITY))?
        }
        ReactivityDef::Ramp { rho, slope, start } => ReactivityProfile::ramp(rho, slope, start)?,
        ReactivityDef::Sine { rho, frequency } => ReactivityProfile::sine(rho, frequency)?,
    };
    Ok(profile)
}
