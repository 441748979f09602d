use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::SelectionError;

/// Per exercise-definition streak thresholds.
///
/// Unset values fall back to 3 correct answers to upgrade, 2 incorrect
/// answers to downgrade and 5 skipped questions to downgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionThresholds {
    pub correct_answers_to_upgrade: Option<u32>,
    pub incorrect_answers_to_downgrade: Option<u32>,
    pub skipped_questions_to_downgrade: Option<u32>,
}

impl ProgressionThresholds {
    pub fn new(correct: u32, incorrect: u32, skipped: u32) -> Self {
        Self {
            correct_answers_to_upgrade: Some(correct),
            incorrect_answers_to_downgrade: Some(incorrect),
            skipped_questions_to_downgrade: Some(skipped),
        }
    }

    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: ProgressionThresholds) -> Self {
        Self {
            correct_answers_to_upgrade: self
                .correct_answers_to_upgrade
                .or(fallback.correct_answers_to_upgrade),
            incorrect_answers_to_downgrade: self
                .incorrect_answers_to_downgrade
                .or(fallback.incorrect_answers_to_downgrade),
            skipped_questions_to_downgrade: self
                .skipped_questions_to_downgrade
                .or(fallback.skipped_questions_to_downgrade),
        }
    }

    pub fn effective_correct_answers_to_upgrade(&self) -> Result<u32, SelectionError> {
        positive(
            "correct_answers_to_upgrade",
            self.correct_answers_to_upgrade
                .unwrap_or(defaults::DEFAULT_CORRECT_ANSWERS_TO_UPGRADE),
        )
    }

    pub fn effective_incorrect_answers_to_downgrade(&self) -> Result<u32, SelectionError> {
        positive(
            "incorrect_answers_to_downgrade",
            self.incorrect_answers_to_downgrade
                .unwrap_or(defaults::DEFAULT_INCORRECT_ANSWERS_TO_DOWNGRADE),
        )
    }

    pub fn effective_skipped_questions_to_downgrade(&self) -> Result<u32, SelectionError> {
        positive(
            "skipped_questions_to_downgrade",
            self.skipped_questions_to_downgrade
                .unwrap_or(defaults::DEFAULT_SKIPPED_QUESTIONS_TO_DOWNGRADE),
        )
    }
}

fn positive(field: &'static str, value: u32) -> Result<u32, SelectionError> {
    if value == 0 {
        return Err(SelectionError::InvalidThreshold { field, value });
    }
    Ok(value)
}
