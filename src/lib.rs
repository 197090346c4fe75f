//! Cohort Relationship Simulation
//!
//! Models the day-by-day evolution of pairwise relationship strengths in a
//! student cohort. Three escalating update rules drive an N×N symmetric
//! matrix: a pure random walk, an attribute-biased walk (dormitories and
//! interests), and a structural-pressure rule that adds triadic-closure
//! feedback with hard saturation. The final matrix is thresholded into an
//! undirected graph for centrality analysis.

pub mod components;
pub mod config;
pub mod engine;
pub mod network;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::{Interest, RelationshipMatrix, Student};
pub use config::Config;
pub use engine::{DailySampler, EngineError, RelationshipEngine, SeededSampler, UpdateRule};
pub use systems::{BiasParams, PressureParams};
