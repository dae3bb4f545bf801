//! pk-core: stable foundation for pointkin.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - grid (uniform time discretization)
//! - kinetics (delayed-group reactor data)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod kinetics;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PkError, PkResult};
pub use grid::TimeGrid;
pub use kinetics::KineticsData;
pub use numeric::*;
