//! First question of an exercise, shared by both strategies.

use adaptest_core::models::{CandidateQuestion, ExerciseState};
use adaptest_irt::logistic;

use super::ProgressionDecision;

/// A fixed start class wins; otherwise require P(correct) >= `floor` at the
/// exercise's current theta.
pub fn decide(state: &ExerciseState, floor: f64) -> ProgressionDecision {
    match state.start_difficulty {
        Some(class) => ProgressionDecision::FixedStart { class },
        None => ProgressionDecision::ProbabilityFloor {
            theta: state.current_theta,
            floor,
        },
    }
}

pub fn above_floor(candidate: &CandidateQuestion, theta: f64, floor: f64) -> bool {
    logistic::probability(&candidate.item_parameters, theta) >= floor
}
