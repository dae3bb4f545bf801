//! Uniform time discretization for transient solves.

use crate::error::{PkError, PkResult};
use crate::numeric::{Real, ensure_finite};

/// Uniform time grid: `num_steps` points spaced `dt` apart, starting at t = 0.
///
/// Index 0 is the initial, unperturbed state, so a grid always has at least
/// two points (the initial condition plus one evolution step).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    num_steps: usize,
    dt: Real,
}

impl TimeGrid {
    /// Build a grid covering `[0, total]` with spacing `dt`.
    ///
    /// The number of points is `1 + floor(total / dt)`: one initial point
    /// plus one per whole step that fits in the horizon. `total` does not
    /// need to be an exact multiple of `dt`; the trailing remainder is not
    /// sampled.
    pub fn from_horizon(total: Real, dt: Real) -> PkResult<Self> {
        ensure_finite(total, "total time")?;
        ensure_finite(dt, "dt")?;
        if dt <= 0.0 {
            return Err(PkError::InvalidArg { what: "dt must be positive" });
        }
        if total <= 0.0 {
            return Err(PkError::InvalidArg {
                what: "total time must be positive",
            });
        }
        if total < dt {
            return Err(PkError::InvalidArg {
                what: "total time must be at least one dt",
            });
        }
        let num_steps = 1 + (total / dt).floor() as usize;
        debug_assert!(num_steps >= 2);
        Ok(Self { num_steps, dt })
    }

    /// Build a grid directly from a point count and spacing.
    pub fn with_steps(num_steps: usize, dt: Real) -> PkResult<Self> {
        ensure_finite(dt, "dt")?;
        if dt <= 0.0 {
            return Err(PkError::InvalidArg { what: "dt must be positive" });
        }
        if num_steps < 2 {
            return Err(PkError::InvalidArg {
                what: "grid needs at least 2 points",
            });
        }
        Ok(Self { num_steps, dt })
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Time at grid index i.
    pub fn time_at(&self, i: usize) -> Real {
        i as Real * self.dt
    }

    /// All grid times, `times[i] = i * dt`.
    pub fn times(&self) -> Vec<Real> {
        (0..self.num_steps).map(|i| self.time_at(i)).collect()
    }
}
