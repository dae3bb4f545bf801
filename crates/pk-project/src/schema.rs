//! Input schema definitions.

use serde::{Deserialize, Serialize};

/// Top-level solver input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Input {
    #[serde(default)]
    pub method: MethodDef,
    pub time: TimeDef,
    pub data: DataDef,
    pub reactivity: ReactivityDef,
}

/// Discretization scheme. Only backward Euler is supported; the aliases
/// accept the common spellings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MethodDef {
    #[default]
    #[serde(
        rename = "implicit euler",
        alias = "implicit",
        alias = "backward euler",
        alias = "backward"
    )]
    ImplicitEuler,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeDef {
    /// Transient horizon (s).
    pub total: f64,
    /// Timestep size (s).
    pub dt: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataDef {
    /// Delayed-neutron yield fraction per group.
    pub delay_fractions: Vec<f64>,
    /// Decay constant per group (1/s).
    pub decay_constants: Vec<f64>,
    /// Prompt neutron lifetime (s).
    #[serde(rename = "Lambda")]
    pub lambda: f64,
    /// Starting power; results are relative to it.
    #[serde(default = "default_initial_power")]
    pub initial_power: f64,
}

fn default_initial_power() -> f64 {
    1.0
}

/// Reactivity insertion specification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReactivityDef {
    Step {
        rho: f64,
        #[serde(default)]
        start: f64,
        /// Omitted means the step is never removed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stop: Option<f64>,
    },
    Ramp {
        rho: f64,
        slope: f64,
        #[serde(default)]
        start: f64,
    },
    Sine {
        rho: f64,
        frequency: f64,
    },
}
