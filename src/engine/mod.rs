//! Relationship Engine
//!
//! Owns the cohort, the relationship matrix, the sampler, and the day
//! counter, and advances them under one of three escalating update rules.
//! Single-threaded and synchronous: a run is a plain nested loop over
//! day × pair (× third party, for the pressure rule).

pub mod sampler;

use thiserror::Error;
use tracing::debug;

use crate::components::{RelationshipMatrix, Student};
use crate::systems::{apply_pair_drift, propagate_pressure, BiasParams, PressureParams};

pub use sampler::{DailySampler, SeededSampler};

/// Errors the engine can produce. All failures are local and terminal; the
/// engine never recovers mid-simulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Construction with an empty cohort is rejected outright rather than
    /// defined as a degenerate zero-matrix run.
    #[error("cohort must contain at least one student")]
    EmptyCohort,
}

/// The three rule sets, in escalating order of structure.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateRule {
    /// Pure pairwise random walk. Unbounded drift.
    RandomWalk,
    /// Random walk plus same-dormitory amplification and shared-interest
    /// nudge. Still unbounded.
    AttributeBiased(BiasParams),
    /// Attribute-biased drift followed by a structural-pressure pass over a
    /// snapshot of the day's matrix, then a hard clamp.
    StructuralPressure {
        bias: BiasParams,
        pressure: PressureParams,
    },
}

impl UpdateRule {
    /// Attribute-biased rule with its documented defaults (nudge p = 0.5).
    pub fn attribute_biased() -> Self {
        UpdateRule::AttributeBiased(BiasParams::attribute_defaults())
    }

    /// Structural-pressure rule with its documented defaults
    /// (nudge p = 0.2, k = 0.0015, clamp 20).
    pub fn structural_pressure() -> Self {
        UpdateRule::StructuralPressure {
            bias: BiasParams::structural_defaults(),
            pressure: PressureParams::default(),
        }
    }

    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            UpdateRule::RandomWalk => "random_walk",
            UpdateRule::AttributeBiased(_) => "attribute_biased",
            UpdateRule::StructuralPressure { .. } => "structural_pressure",
        }
    }
}

/// Day-stepped simulation of pairwise relationship strengths.
///
/// The engine has two observable states: freshly constructed (zero matrix,
/// day 0) and simulated-k-days. [`RelationshipEngine::simulate`] is the only
/// transition. Calls compose: `simulate(10)` twice equals `simulate(20)` on
/// the same sampler stream, because the day counter and the sampler persist
/// across calls.
pub struct RelationshipEngine<S> {
    students: Vec<Student>,
    matrix: RelationshipMatrix,
    rule: UpdateRule,
    sampler: S,
    day: u32,
}

impl<S: DailySampler> RelationshipEngine<S> {
    /// Build an engine over an ordered cohort. The cohort's order is taken
    /// as-is and fixes matrix indices for the whole run.
    pub fn new(students: Vec<Student>, rule: UpdateRule, sampler: S) -> Result<Self, EngineError> {
        if students.is_empty() {
            return Err(EngineError::EmptyCohort);
        }
        let matrix = RelationshipMatrix::zeros(students.len());
        Ok(Self {
            students,
            matrix,
            rule,
            sampler,
            day: 0,
        })
    }

    /// Advance the simulation by `days` further days.
    ///
    /// Zero days is a no-op; negative day counts are unrepresentable. Each
    /// day runs the configured rule exactly once:
    ///
    /// - drift writes into the live matrix, pair by pair;
    /// - the pressure rule then reads the completed post-drift matrix as a
    ///   snapshot, accumulates pressure into a separate buffer, clamps it,
    ///   and swaps the buffer in. The two passes are never fused.
    pub fn simulate(&mut self, days: u32) {
        for _ in 0..days {
            match &self.rule {
                UpdateRule::RandomWalk => {
                    apply_pair_drift(
                        &mut self.matrix,
                        &self.students,
                        self.day,
                        None,
                        &mut self.sampler,
                    );
                }
                UpdateRule::AttributeBiased(bias) => {
                    apply_pair_drift(
                        &mut self.matrix,
                        &self.students,
                        self.day,
                        Some(bias),
                        &mut self.sampler,
                    );
                }
                UpdateRule::StructuralPressure { bias, pressure } => {
                    apply_pair_drift(
                        &mut self.matrix,
                        &self.students,
                        self.day,
                        Some(bias),
                        &mut self.sampler,
                    );
                    self.matrix = propagate_pressure(&self.matrix, pressure);
                }
            }
            self.day += 1;
        }
        debug!(
            rule = self.rule.name(),
            day = self.day,
            max_abs = self.matrix.max_abs(),
            "simulated {days} day(s)"
        );
    }

    /// Read-only view of the current matrix. Clone it to hand ownership to a
    /// downstream consumer.
    pub fn matrix(&self) -> &RelationshipMatrix {
        &self.matrix
    }

    /// The cohort the engine was constructed with, in matrix-index order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Total days simulated so far, across all `simulate` calls.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Short name of the configured rule, for logs and reports.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cohort_is_rejected() {
        let result =
            RelationshipEngine::new(vec![], UpdateRule::RandomWalk, SeededSampler::from_seed(1));
        assert_eq!(result.err(), Some(EngineError::EmptyCohort));
    }

    #[test]
    fn zero_days_is_a_no_op() {
        let students = vec![Student::numbered(1), Student::numbered(2)];
        let mut engine = RelationshipEngine::new(
            students,
            UpdateRule::RandomWalk,
            SeededSampler::from_seed(1),
        )
        .unwrap();
        engine.simulate(0);
        assert_eq!(engine.day(), 0);
        assert_eq!(engine.matrix().max_abs(), 0.0);
    }

    #[test]
    fn day_counter_accumulates_across_calls() {
        let students = vec![Student::numbered(1), Student::numbered(2)];
        let mut engine = RelationshipEngine::new(
            students,
            UpdateRule::RandomWalk,
            SeededSampler::from_seed(1),
        )
        .unwrap();
        engine.simulate(3);
        engine.simulate(4);
        assert_eq!(engine.day(), 7);
    }

    #[test]
    fn rule_names_are_stable() {
        assert_eq!(UpdateRule::RandomWalk.name(), "random_walk");
        assert_eq!(UpdateRule::attribute_biased().name(), "attribute_biased");
        assert_eq!(
            UpdateRule::structural_pressure().name(),
            "structural_pressure"
        );
    }
}
