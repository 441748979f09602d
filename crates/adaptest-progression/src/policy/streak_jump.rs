//! Streak/classification-jump rule.
//!
//! ```text
//! correct   -> T = correct_answers_to_upgrade      (3), direction +1
//! skipped   -> T = skipped_questions_to_downgrade  (5), direction -1
//! incorrect -> T = incorrect_answers_to_downgrade  (2), direction -1
//!
//! test_streak = ((streak_length - 1) mod T) + 1
//! ```
//!
//! Below `T` the student stays on the reference class. At `T` they move one
//! class in the streak's direction, or stay when already on that end of the
//! scale. The counter is cyclic, so every further `T` answers move again.
//! The cycle counts the whole outcome streak, across class changes; the
//! same-class sub-streak is reported alongside but never gates a move.

use adaptest_core::errors::SelectionError;
use adaptest_core::models::{AnswerOutcome, DifficultyClass, ProgressionThresholds};
use adaptest_core::scale;

/// Result of applying the rule to one streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpRule {
    pub threshold: u32,
    pub test_streak: u32,
    /// The only classification jump a candidate may have.
    pub accepted_jump: i32,
}

/// 1-based position of `streak_length` within its current cycle of `threshold`.
pub fn test_streak(streak_length: u32, threshold: u32) -> u32 {
    (streak_length.saturating_sub(1) % threshold) + 1
}

pub fn decide(
    streak_type: AnswerOutcome,
    streak_length: u32,
    reference_class: DifficultyClass,
    thresholds: &ProgressionThresholds,
) -> Result<JumpRule, SelectionError> {
    let (threshold, direction) = match streak_type {
        AnswerOutcome::Correct => (thresholds.effective_correct_answers_to_upgrade()?, 1),
        AnswerOutcome::Skipped => (thresholds.effective_skipped_questions_to_downgrade()?, -1),
        AnswerOutcome::Incorrect => (thresholds.effective_incorrect_answers_to_downgrade()?, -1),
    };
    let test_streak = test_streak(streak_length, threshold);

    let at_boundary = if direction > 0 {
        scale::is_highest(reference_class)
    } else {
        scale::is_lowest(reference_class)
    };
    let accepted_jump = if test_streak < threshold || at_boundary {
        0
    } else {
        direction
    };

    Ok(JumpRule {
        threshold,
        test_streak,
        accepted_jump,
    })
}
