//! Reactivity insertion profiles for point kinetics transients.
//!
//! A profile maps time to a reactivity value rho(t) in units consistent with
//! the delayed-neutron fractions. Profiles are pure closed-form functions;
//! sampling one over a grid allocates the per-timestep vector the matrix
//! assembler consumes.

pub mod profile;

pub use profile::ReactivityProfile;

pub type ReactivityResult<T> = Result<T, ReactivityError>;

#[derive(thiserror::Error, Debug)]
pub enum ReactivityError {
    #[error("Invalid parameter: {what} = {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Ramp slope {slope} disagrees in sign with target reactivity {rho}")]
    RampSignMismatch { slope: f64, rho: f64 },
}
