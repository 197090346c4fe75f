//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without
//! recompiling. Every named constant of the update rules lives here, including
//! the per-variant interest-nudge probabilities (the two variants deliberately
//! use different values).

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::engine::UpdateRule;
use crate::systems::{BiasParams, PressureParams};

/// Default tuning file path.
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub dormitory: DormitoryConfig,
    pub interest: InterestConfig,
    pub pressure: PressureConfig,
    pub network: NetworkConfig,
}

/// Run-level parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub default_days: u32,
    pub cohort_size: usize,
    pub report_dir: String,
}

/// Same-dormitory amplification.
#[derive(Debug, Clone, Deserialize)]
pub struct DormitoryConfig {
    pub horizon_days: u32,
    pub amplification: f64,
}

/// Shared-interest nudge.
#[derive(Debug, Clone, Deserialize)]
pub struct InterestConfig {
    pub nudge: f64,
    pub biased_probability: f64,
    pub structural_probability: f64,
}

/// Structural-pressure propagation.
#[derive(Debug, Clone, Deserialize)]
pub struct PressureConfig {
    pub coupling: f64,
    pub clamp: f64,
}

/// Graph derivation parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub edge_threshold: f64,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default path, or fall back to defaults.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    fn bias_params(&self, nudge_probability: f64) -> BiasParams {
        BiasParams {
            dorm_horizon_days: self.dormitory.horizon_days,
            dorm_amplification: self.dormitory.amplification,
            interest_nudge_probability: nudge_probability,
            interest_nudge: self.interest.nudge,
        }
    }

    /// Attribute-biased rule with this configuration's parameters.
    pub fn attribute_rule(&self) -> UpdateRule {
        UpdateRule::AttributeBiased(self.bias_params(self.interest.biased_probability))
    }

    /// Structural-pressure rule with this configuration's parameters.
    pub fn structural_rule(&self) -> UpdateRule {
        UpdateRule::StructuralPressure {
            bias: self.bias_params(self.interest.structural_probability),
            pressure: PressureParams {
                coupling: self.pressure.coupling,
                clamp: self.pressure.clamp,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                default_days: 30,
                cohort_size: 30,
                report_dir: "output".to_string(),
            },
            dormitory: DormitoryConfig {
                horizon_days: BiasParams::DORM_HORIZON_DAYS,
                amplification: BiasParams::DORM_AMPLIFICATION,
            },
            interest: InterestConfig {
                nudge: BiasParams::INTEREST_NUDGE,
                biased_probability: 0.5,
                structural_probability: 0.2,
            },
            pressure: PressureConfig {
                coupling: PressureParams::COUPLING,
                clamp: PressureParams::CLAMP,
            },
            network: NetworkConfig {
                edge_threshold: crate::network::DEFAULT_EDGE_THRESHOLD,
            },
        }
    }
}

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_constants() {
        let config = Config::default();
        assert_eq!(config.simulation.default_days, 30);
        assert_eq!(config.dormitory.horizon_days, 50);
        assert_eq!(config.dormitory.amplification, 2.0);
        assert_eq!(config.interest.biased_probability, 0.5);
        assert_eq!(config.interest.structural_probability, 0.2);
        assert_eq!(config.pressure.coupling, 0.0015);
        assert_eq!(config.pressure.clamp, 20.0);
        assert_eq!(config.network.edge_threshold, 5.0);
    }

    #[test]
    fn variants_pick_their_own_nudge_probability() {
        let config = Config::default();
        match config.attribute_rule() {
            UpdateRule::AttributeBiased(bias) => {
                assert_eq!(bias.interest_nudge_probability, 0.5);
            }
            other => panic!("unexpected rule: {other:?}"),
        }
        match config.structural_rule() {
            UpdateRule::StructuralPressure { bias, pressure } => {
                assert_eq!(bias.interest_nudge_probability, 0.2);
                assert_eq!(pressure.coupling, 0.0015);
            }
            other => panic!("unexpected rule: {other:?}"),
        }
    }

    #[test]
    fn parse_overrides_from_toml() {
        let text = r#"
            [simulation]
            default_days = 10
            cohort_size = 8
            report_dir = "out"

            [dormitory]
            horizon_days = 5
            amplification = 3.0

            [interest]
            nudge = 0.05
            biased_probability = 0.4
            structural_probability = 0.1

            [pressure]
            coupling = 0.002
            clamp = 15.0

            [network]
            edge_threshold = 4.0
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.simulation.default_days, 10);
        assert_eq!(config.dormitory.amplification, 3.0);
        assert_eq!(config.pressure.clamp, 15.0);
    }
}
