use serde::{Deserialize, Serialize};

use super::{AnswerOutcome, DifficultyClass};

/// One past question attempt. Histories are ordered most-recent-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Class the attempted question belonged to.
    pub difficulty_class: DifficultyClass,
    pub was_skipped: bool,
    pub was_correct: bool,
}

impl AttemptRecord {
    pub fn correct(difficulty_class: DifficultyClass) -> Self {
        Self {
            difficulty_class,
            was_skipped: false,
            was_correct: true,
        }
    }

    pub fn incorrect(difficulty_class: DifficultyClass) -> Self {
        Self {
            difficulty_class,
            was_skipped: false,
            was_correct: false,
        }
    }

    pub fn skipped(difficulty_class: DifficultyClass) -> Self {
        Self {
            difficulty_class,
            was_skipped: true,
            was_correct: false,
        }
    }

    pub fn outcome(&self) -> AnswerOutcome {
        AnswerOutcome::from_flags(self.was_skipped, self.was_correct)
    }
}
