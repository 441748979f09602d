use serde::{Deserialize, Serialize};

use super::defaults;

/// Ability estimate bootstrapping and per-answer percentage deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThetaConfig {
    /// Theta for a student with no completed exercise in the course. Default: 1.0.
    pub default_initial_theta: f64,
    /// Default: -0.04.
    pub skip_delta: f64,
    /// Default: +0.08.
    pub correct_delta: f64,
    /// Default: -0.08.
    pub incorrect_delta: f64,
}

impl Default for ThetaConfig {
    fn default() -> Self {
        Self {
            default_initial_theta: defaults::DEFAULT_INITIAL_THETA,
            skip_delta: defaults::DEFAULT_SKIP_DELTA,
            correct_delta: defaults::DEFAULT_CORRECT_DELTA,
            incorrect_delta: defaults::DEFAULT_INCORRECT_DELTA,
        }
    }
}
