//! Cohort Setup
//!
//! Generation of the student cohort the engine simulates over.

pub mod cohort;

pub use cohort::{assigned, numbered, DORMITORY_CAPACITY};
