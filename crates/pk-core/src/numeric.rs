use crate::PkError;

/// Floating point type used throughout system
pub type Real = f64;

/// Combined absolute/relative comparison tolerance.
///
/// The defaults suit the magnitudes this solver produces: relative powers
/// near 1 and precursor concentrations up to ~1e4.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-10,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    pub fn within(&self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PkError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PkError::NonFinite { what, value: v })
    }
}
