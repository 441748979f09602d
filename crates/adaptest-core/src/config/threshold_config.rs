use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ProgressionThresholds;

/// Thresholds applied when an exercise definition leaves a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdDefaults {
    pub correct_answers_to_upgrade: u32,
    pub incorrect_answers_to_downgrade: u32,
    pub skipped_questions_to_downgrade: u32,
}

impl Default for ThresholdDefaults {
    fn default() -> Self {
        Self {
            correct_answers_to_upgrade: defaults::DEFAULT_CORRECT_ANSWERS_TO_UPGRADE,
            incorrect_answers_to_downgrade: defaults::DEFAULT_INCORRECT_ANSWERS_TO_DOWNGRADE,
            skipped_questions_to_downgrade: defaults::DEFAULT_SKIPPED_QUESTIONS_TO_DOWNGRADE,
        }
    }
}

impl ThresholdDefaults {
    /// Fill the unset fields of a definition's thresholds.
    pub fn resolve(&self, thresholds: ProgressionThresholds) -> ProgressionThresholds {
        thresholds.or(ProgressionThresholds::new(
            self.correct_answers_to_upgrade,
            self.incorrect_answers_to_downgrade,
            self.skipped_questions_to_downgrade,
        ))
    }
}
