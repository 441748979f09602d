//! Probability-threshold rule, kept for comparison with the streak rule.
//!
//! After a correct answer: a class at or above the current difficulty that
//! the student answers correctly with P <= 0.5. After an incorrect or
//! skipped answer: a class at or below the current difficulty with
//! P >= 0.6. Never more than two classes from the current difficulty.

use adaptest_core::config::PolicyConfig;
use adaptest_core::models::{AnswerOutcome, CandidateQuestion, DifficultyClass};
use adaptest_core::scale;
use adaptest_irt::logistic;

pub fn accepts(
    candidate: &CandidateQuestion,
    last_outcome: AnswerOutcome,
    current_difficulty: DifficultyClass,
    theta: f64,
    config: &PolicyConfig,
) -> bool {
    let distance = scale::jump(candidate.classification, current_difficulty).unsigned_abs();
    if distance > config.legacy_max_jump {
        return false;
    }

    let p = logistic::probability(&candidate.item_parameters, theta);
    match last_outcome {
        AnswerOutcome::Correct => {
            candidate.classification >= current_difficulty && p <= config.legacy_upgrade_ceiling
        }
        AnswerOutcome::Incorrect | AnswerOutcome::Skipped => {
            candidate.classification <= current_difficulty && p >= config.legacy_downgrade_floor
        }
    }
}
