//! Outcome streak of an attempt history, most-recent-first.

use adaptest_core::models::{AnswerOutcome, AttemptRecord, DifficultyClass};
use serde::{Deserialize, Serialize};

/// Current streak derived from an attempt history.
///
/// The default value (no streak type, zero lengths) means the history was
/// empty and the next question is the first of the exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Outcome of the most recent attempt.
    pub streak_type: Option<AnswerOutcome>,
    /// Consecutive attempts sharing `streak_type`, counted from the most recent.
    pub streak_length: u32,
    /// Leading attempts of the streak that stayed on `reference_class`.
    pub class_streak_length: u32,
    /// Class of the most recent attempt.
    pub reference_class: Option<DifficultyClass>,
}

impl StreakSummary {
    pub fn is_initial(&self) -> bool {
        self.streak_type.is_none()
    }
}

/// Walk `history` from the most recent attempt backwards.
///
/// The class streak breaks on the first attempt whose class differs from
/// the reference class and never resumes, even if a later attempt in the
/// walk is back on the reference class.
pub fn analyze(history: &[AttemptRecord]) -> StreakSummary {
    let Some(latest) = history.first() else {
        return StreakSummary::default();
    };
    let streak_type = latest.outcome();
    let reference_class = latest.difficulty_class;

    let mut streak_length = 0;
    let mut class_streak_length = 0;
    let mut class_broken = false;

    for attempt in history {
        if attempt.outcome() != streak_type {
            break;
        }
        streak_length += 1;

        if attempt.difficulty_class != reference_class {
            class_broken = true;
        }
        if !class_broken {
            class_streak_length += 1;
        }
    }

    StreakSummary {
        streak_type: Some(streak_type),
        streak_length,
        class_streak_length,
        reference_class: Some(reference_class),
    }
}
