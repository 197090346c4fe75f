//! Core data types: students and the relationship matrix.

pub mod matrix;
pub mod student;

pub use matrix::RelationshipMatrix;
pub use student::{Interest, Student};
