//! Closed-form reactivity profile families.

use crate::{ReactivityError, ReactivityResult};
use pk_core::{Real, TimeGrid};

/// A time-dependent reactivity insertion.
///
/// The closed set of families matches the supported input types:
/// - `Step`: rho inside `[start, stop]` (inclusive), zero outside.
/// - `Ramp`: zero before `start`, then `slope * t` until the magnitude of
///   the target `rho` is reached, after which the value holds at `rho`.
/// - `Sine`: `rho * sin(frequency * t)`.
#[derive(Clone, Debug, PartialEq)]
pub enum ReactivityProfile {
    Step { rho: Real, start: Real, stop: Real },
    Ramp { rho: Real, slope: Real, start: Real },
    Sine { rho: Real, frequency: Real },
}

impl ReactivityProfile {
    /// Step insertion of height `rho` over `[start, stop]`.
    pub fn step(rho: Real, start: Real, stop: Real) -> ReactivityResult<Self> {
        let profile = Self::Step { rho, start, stop };
        profile.validate()?;
        Ok(profile)
    }

    /// Step insertion of height `rho` starting at `start` and never removed.
    pub fn step_from(rho: Real, start: Real) -> ReactivityResult<Self> {
        Self::step(rho, start, Real::INFINITY)
    }

    /// Linear insertion at `slope` toward a target of `rho`, held once reached.
    pub fn ramp(rho: Real, slope: Real, start: Real) -> ReactivityResult<Self> {
        let profile = Self::Ramp { rho, slope, start };
        profile.validate()?;
        Ok(profile)
    }

    /// Sinusoidal oscillation of amplitude `rho` at `frequency` rad/s.
    pub fn sine(rho: Real, frequency: Real) -> ReactivityResult<Self> {
        let profile = Self::Sine { rho, frequency };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the family parameters.
    ///
    /// A ramp whose slope points away from its target would never reach the
    /// clamp, so the disagreement is rejected rather than silently resolved;
    /// a zero slope or zero target is rejected for the same reason.
    pub fn validate(&self) -> ReactivityResult<()> {
        match *self {
            Self::Step { start, stop, .. } => {
                if stop < start {
                    return Err(ReactivityError::InvalidParameter {
                        what: "step stop precedes start",
                        value: stop,
                    });
                }
                Ok(())
            }
            Self::Ramp { rho, slope, .. } => {
                if rho == 0.0 || slope == 0.0 || rho.signum() != slope.signum() {
                    return Err(ReactivityError::RampSignMismatch { slope, rho });
                }
                Ok(())
            }
            Self::Sine { frequency, .. } => {
                if frequency < 0.0 {
                    return Err(ReactivityError::InvalidParameter {
                        what: "sine frequency",
                        value: frequency,
                    });
                }
                Ok(())
            }
        }
    }

    /// Reactivity at time `t`.
    pub fn value_at(&self, t: Real) -> Real {
        match *self {
            Self::Step { rho, start, stop } => {
                if start <= t && t <= stop {
                    rho
                } else {
                    0.0
                }
            }
            Self::Ramp { rho, slope, start } => {
                if t < start {
                    return 0.0;
                }
                let r = slope * t;
                if rho > 0.0 { r.min(rho) } else { r.max(rho) }
            }
            Self::Sine { rho, frequency } => rho * (frequency * t).sin(),
        }
    }

    /// Sample the profile at every grid point, `out[i] = rho(i * dt)`.
    pub fn sample(&self, grid: &TimeGrid) -> Vec<Real> {
        (0..grid.num_steps())
            .map(|i| self.value_at(grid.time_at(i)))
            .collect()
    }
}
