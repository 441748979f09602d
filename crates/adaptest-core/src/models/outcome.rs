use serde::{Deserialize, Serialize};

/// Outcome of a single answered (or skipped) question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    Skipped,
}

impl AnswerOutcome {
    /// Skip takes precedence over correctness.
    pub fn from_flags(was_skipped: bool, was_correct: bool) -> Self {
        if was_skipped {
            Self::Skipped
        } else if was_correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}
