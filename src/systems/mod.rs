//! Daily Update Rules
//!
//! The per-day passes the engine composes: pairwise drift (with optional
//! attribute bias) and structural-pressure propagation.

pub mod drift;
pub mod pressure;

pub use drift::{apply_pair_drift, BiasParams};
pub use pressure::{propagate_pressure, PressureParams};
