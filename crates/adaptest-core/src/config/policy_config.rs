use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Strategy;

/// Pool filtering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Strategy used when the caller does not pick one. Default: streak_jump.
    pub default_strategy: Strategy,
    /// Minimum P(correct) for an unconstrained first question. Default: 0.2.
    pub initial_probability_floor: f64,
    /// Legacy: max P(correct) after a correct answer. Default: 0.5.
    pub legacy_upgrade_ceiling: f64,
    /// Legacy: min P(correct) after an incorrect or skipped answer. Default: 0.6.
    pub legacy_downgrade_floor: f64,
    /// Legacy: max distance from the current difficulty. Default: 2.
    pub legacy_max_jump: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_strategy: Strategy::default(),
            initial_probability_floor: defaults::DEFAULT_INITIAL_PROBABILITY_FLOOR,
            legacy_upgrade_ceiling: defaults::DEFAULT_LEGACY_UPGRADE_CEILING,
            legacy_downgrade_floor: defaults::DEFAULT_LEGACY_DOWNGRADE_FLOOR,
            legacy_max_jump: defaults::DEFAULT_LEGACY_MAX_JUMP,
        }
    }
}
