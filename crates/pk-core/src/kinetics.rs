//! Reactor kinetics parameters: delayed-neutron group data and the prompt
//! neutron lifetime.

use crate::error::{PkError, PkResult};
use crate::numeric::{Real, ensure_finite};

/// Delayed-neutron group data for a point kinetics model.
///
/// Groups are stored as parallel arrays: `delay_fractions[k]` is the yield
/// fraction beta_k and `decay_constants[k]` the decay constant lambda_k
/// (1/s) of group k. `lambda_prompt` is the prompt neutron lifetime (s).
#[derive(Clone, Debug, PartialEq)]
pub struct KineticsData {
    delay_fractions: Vec<Real>,
    decay_constants: Vec<Real>,
    lambda_prompt: Real,
}

impl KineticsData {
    pub fn new(
        delay_fractions: Vec<Real>,
        decay_constants: Vec<Real>,
        lambda_prompt: Real,
    ) -> PkResult<Self> {
        if delay_fractions.is_empty() {
            return Err(PkError::InvalidArg {
                what: "at least one delayed group is required",
            });
        }
        if delay_fractions.len() != decay_constants.len() {
            return Err(PkError::InvalidArg {
                what: "delay fraction and decay constant counts differ",
            });
        }
        for &beta in &delay_fractions {
            ensure_finite(beta, "delay fraction")?;
            if beta < 0.0 {
                return Err(PkError::InvalidArg {
                    what: "delay fractions must be non-negative",
                });
            }
        }
        for &lam in &decay_constants {
            ensure_finite(lam, "decay constant")?;
            if lam <= 0.0 {
                return Err(PkError::InvalidArg {
                    what: "decay constants must be positive",
                });
            }
        }
        ensure_finite(lambda_prompt, "prompt neutron lifetime")?;
        if lambda_prompt <= 0.0 {
            return Err(PkError::InvalidArg {
                what: "prompt neutron lifetime must be positive",
            });
        }
        Ok(Self {
            delay_fractions,
            decay_constants,
            lambda_prompt,
        })
    }

    pub fn num_groups(&self) -> usize {
        self.delay_fractions.len()
    }

    pub fn delay_fractions(&self) -> &[Real] {
        &self.delay_fractions
    }

    pub fn decay_constants(&self) -> &[Real] {
        &self.decay_constants
    }

    pub fn lambda_prompt(&self) -> Real {
        self.lambda_prompt
    }

    /// Sum of the group yield fractions (beta effective).
    pub fn beta_eff(&self) -> Real {
        self.delay_fractions.iter().sum()
    }

    /// Steady-state precursor concentration of group k at power `p0`:
    /// `C0_k = beta_k * p0 / (lambda_k * Lambda)`.
    pub fn initial_concentration(&self, k: usize, p0: Real) -> Real {
        self.delay_fractions[k] * p0 / (self.decay_constants[k] * self.lambda_prompt)
    }

    /// Steady-state precursor concentrations of all groups at power `p0`.
    pub fn initial_concentrations(&self, p0: Real) -> Vec<Real> {
        (0..self.num_groups())
            .map(|k| self.initial_concentration(k, p0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_group() -> KineticsData {
        KineticsData::new(vec![0.0065], vec![0.0765], 2e-5).unwrap()
    }

    #[test]
    fn beta_eff_sums_groups() {
        let data = KineticsData::new(
            vec![0.0002, 0.001, 0.0012],
            vec![0.0127, 0.0317, 0.115],
            2e-5,
        )
        .unwrap();
        assert_eq!(data.num_groups(), 3);
        assert!((data.beta_eff() - 0.0024).abs() < 1e-12);
    }

    #[test]
    fn steady_state_concentration() {
        let data = one_group();
        let c0 = data.initial_concentration(0, 1.0);
        assert!((c0 - 0.0065 / (0.0765 * 2e-5)).abs() < 1e-9);
        assert_eq!(data.initial_concentrations(1.0), vec![c0]);
    }

    #[test]
    fn rejects_inconsistent_groups() {
        assert!(KineticsData::new(vec![], vec![], 2e-5).is_err());
        assert!(KineticsData::new(vec![0.0065], vec![0.0765, 0.1], 2e-5).is_err());
        assert!(KineticsData::new(vec![-0.0065], vec![0.0765], 2e-5).is_err());
        assert!(KineticsData::new(vec![0.0065], vec![0.0], 2e-5).is_err());
        assert!(KineticsData::new(vec![0.0065], vec![0.0765], 0.0).is_err());
    }
}
