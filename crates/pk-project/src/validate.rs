//! Input validation logic.
//!
//! Validation runs before any numeric work and reports the full list of
//! violations in one pass, so a user fixing an input file sees every problem
//! at once.

use crate::schema::{DataDef, Input, ReactivityDef, TimeDef};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Total time {total} is shorter than one timestep {dt}")]
    TotalShorterThanDt { total: f64, dt: f64 },

    #[error("{fractions} delay fractions but {constants} decay constants")]
    GroupLengthMismatch { fractions: usize, constants: usize },

    #[error("At least one delayed group is required")]
    EmptyGroups,

    #[error("Ramp slope {slope} disagrees in sign with target reactivity {rho}")]
    RampSignMismatch { slope: f64, rho: f64 },
}

/// Check an input record and return every violation found.
pub fn validate_input(input: &Input) -> Vec<ValidationError> {
    let mut violations = Vec::new();
    validate_time(&input.time, &mut violations);
    validate_data(&input.data, &mut violations);
    validate_reactivity(&input.reactivity, &mut violations);
    violations
}

fn check_positive(field: &'static str, value: f64, out: &mut Vec<ValidationError>) {
    if !value.is_finite() {
        out.push(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    } else if value <= 0.0 {
        out.push(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        });
    }
}

fn validate_time(time: &TimeDef, out: &mut Vec<ValidationError>) {
    check_positive("time.total", time.total, out);
    check_positive("time.dt", time.dt, out);
    if time.total.is_finite() && time.dt.is_finite() && time.dt > 0.0 && time.total < time.dt {
        out.push(ValidationError::TotalShorterThanDt {
            total: time.total,
            dt: time.dt,
        });
    }
}

fn validate_data(data: &DataDef, out: &mut Vec<ValidationError>) {
    if data.delay_fractions.is_empty() {
        out.push(ValidationError::EmptyGroups);
    }
    if data.delay_fractions.len() != data.decay_constants.len() {
        out.push(ValidationError::GroupLengthMismatch {
            fractions: data.delay_fractions.len(),
            constants: data.decay_constants.len(),
        });
    }
    for &beta in &data.delay_fractions {
        if !beta.is_finite() || beta < 0.0 {
            out.push(ValidationError::InvalidValue {
                field: "data.delay_fractions",
                value: beta,
                reason: "must be finite and non-negative",
            });
        }
    }
    for &lam in &data.decay_constants {
        check_positive("data.decay_constants", lam, out);
    }
    check_positive("data.Lambda", data.lambda, out);
    check_positive("data.initial_power", data.initial_power, out);
}

fn validate_reactivity(reactivity: &ReactivityDef, out: &mut Vec<ValidationError>) {
    match *reactivity {
        ReactivityDef::Step { rho, start, stop } => {
            if !rho.is_finite() {
                out.push(ValidationError::InvalidValue {
                    field: "reactivity.rho",
                    value: rho,
                    reason: "must be finite",
                });
            }
            if !start.is_finite() || start < 0.0 {
                out.push(ValidationError::InvalidValue {
                    field: "reactivity.start",
                    value: start,
                    reason: "must be finite and non-negative",
                });
            }
            if let Some(stop) = stop
                && (stop.is_nan() || stop < start)
            {
                out.push(ValidationError::InvalidValue {
                    field: "reactivity.stop",
                    value: stop,
                    reason: "must not precede start",
                });
            }
        }
        ReactivityDef::Ramp { rho, slope, start } => {
            if !rho.is_finite() {
                out.push(ValidationError::InvalidValue {
                    field: "reactivity.rho",
                    value: rho,
                    reason: "must be finite",
                });
            }
            if !start.is_finite() || start < 0.0 {
                out.push(ValidationError::InvalidValue {
                    field: "reactivity.start",
                    value: start,
                    reason: "must be finite and non-negative",
                });
            }
            // A slope pointing away from the target never reaches the clamp.
            if rho == 0.0 || slope == 0.0 || rho.signum() != slope.signum() {
                out.push(ValidationError::RampSignMismatch { slope, rho });
            }
        }
        ReactivityDef::Sine { rho, frequency } => {
            if !rho.is_finite() {
                out.push(ValidationError::InvalidValue {
                    field: "reactivity.rho",
                    value: rho,
                    reason: "must be finite",
                });
            }
            if !frequency.is_finite() || frequency < 0.0 {
                out.push(ValidationError::InvalidValue {
                    field: "reactivity.frequency",
                    value: frequency,
                    reason: "must be finite and non-negative",
                });
            }
        }
    }
}
