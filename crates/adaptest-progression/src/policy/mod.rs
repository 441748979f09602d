//! Pool filtering: decide which classification jumps or probabilities are
//! acceptable, then keep the matching candidates.
//!
//! Both strategies share the first-question rule in [`initial`]. An empty
//! result is a valid outcome; the caller decides what to do with it.
//! Non-finite item parameters or theta are rejected before any candidate
//! is evaluated, so they never masquerade as an empty result.

pub mod initial;
pub mod legacy;
pub mod streak_jump;

use adaptest_core::config::PolicyConfig;
use adaptest_core::errors::{AdaptestResult, ModelError};
use adaptest_core::models::{
    AnswerOutcome, AttemptRecord, CandidateQuestion, DifficultyClass, ExerciseState,
    ProgressionThresholds, Strategy,
};
use adaptest_core::scale;
use serde::{Deserialize, Serialize};

use crate::streak::{self, StreakSummary};

/// What the policy decided to accept for the next question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ProgressionDecision {
    /// First question, exercise pins its start class.
    FixedStart { class: DifficultyClass },
    /// First question, any candidate the student has a fair chance on.
    ProbabilityFloor { theta: f64, floor: f64 },
    /// Accept only candidates exactly `accepted_jump` classes from the reference class.
    StreakJump {
        streak: StreakSummary,
        reference_class: DifficultyClass,
        threshold: u32,
        test_streak: u32,
        accepted_jump: i32,
    },
    /// Probability window around the current difficulty.
    LegacyProbability {
        last_outcome: AnswerOutcome,
        current_difficulty: DifficultyClass,
        theta: f64,
    },
}

/// Accepted candidates together with the decision that admitted them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub accepted: Vec<&'a CandidateQuestion>,
    pub decision: ProgressionDecision,
}

impl FilterOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Pool filter parameterised by a `PolicyConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressionPolicy {
    config: PolicyConfig,
}

impl ProgressionPolicy {
    /// Policy with the default floor (0.2), legacy ceiling (0.5),
    /// legacy floor (0.6) and legacy max jump (2).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Decide what is acceptable given the exercise state and history.
    pub fn decide(
        &self,
        strategy: Strategy,
        state: &ExerciseState,
        streak: &StreakSummary,
        thresholds: &ProgressionThresholds,
    ) -> AdaptestResult<ProgressionDecision> {
        let (Some(streak_type), Some(reference_class)) =
            (streak.streak_type, streak.reference_class)
        else {
            return Ok(initial::decide(state, self.config.initial_probability_floor));
        };

        match strategy {
            Strategy::StreakJump => {
                let rule = streak_jump::decide(
                    streak_type,
                    streak.streak_length,
                    reference_class,
                    thresholds,
                )?;
                Ok(ProgressionDecision::StreakJump {
                    streak: *streak,
                    reference_class,
                    threshold: rule.threshold,
                    test_streak: rule.test_streak,
                    accepted_jump: rule.accepted_jump,
                })
            }
            Strategy::LegacyProbability => Ok(ProgressionDecision::LegacyProbability {
                last_outcome: streak_type,
                current_difficulty: state.current_difficulty,
                theta: state.current_theta,
            }),
        }
    }

    /// Whether `candidate` passes `decision`.
    pub fn accepts(&self, decision: &ProgressionDecision, candidate: &CandidateQuestion) -> bool {
        match *decision {
            ProgressionDecision::FixedStart { class } => candidate.classification == class,
            ProgressionDecision::ProbabilityFloor { theta, floor } => {
                initial::above_floor(candidate, theta, floor)
            }
            ProgressionDecision::StreakJump {
                reference_class,
                accepted_jump,
                ..
            } => scale::jump(reference_class, candidate.classification) == accepted_jump,
            ProgressionDecision::LegacyProbability {
                last_outcome,
                current_difficulty,
                theta,
            } => legacy::accepts(
                candidate,
                last_outcome,
                current_difficulty,
                theta,
                &self.config,
            ),
        }
    }

    /// Filter `pool` for the next question. Never fails because the result is empty.
    ///
    /// Fails with `ModelError` when `state.current_theta` or any candidate's
    /// item parameters are not finite.
    pub fn filter<'a>(
        &self,
        strategy: Strategy,
        state: &ExerciseState,
        pool: &'a [CandidateQuestion],
        history: &[AttemptRecord],
        thresholds: &ProgressionThresholds,
    ) -> AdaptestResult<FilterOutcome<'a>> {
        validate_inputs(state, pool)?;
        let streak = streak::analyze(history);
        let decision = self.decide(strategy, state, &streak, thresholds)?;
        let accepted: Vec<&CandidateQuestion> = pool
            .iter()
            .filter(|candidate| self.accepts(&decision, candidate))
            .collect();

        tracing::debug!(
            exercise_id = %state.exercise_id,
            ?strategy,
            ?decision,
            pool = pool.len(),
            accepted = accepted.len(),
            "filtered candidate pool"
        );

        Ok(FilterOutcome { accepted, decision })
    }
}

fn validate_inputs(state: &ExerciseState, pool: &[CandidateQuestion]) -> Result<(), ModelError> {
    if !state.current_theta.is_finite() {
        return Err(ModelError::NonFiniteTheta {
            value: state.current_theta,
        });
    }
    for candidate in pool {
        if let Err(err) = candidate.item_parameters.validate() {
            tracing::warn!(
                exercise_id = %state.exercise_id,
                question_id = %candidate.id,
                %err,
                "rejecting pool with malformed candidate"
            );
            return Err(err);
        }
    }
    Ok(())
}

/// Filter `pool` with the default policy configuration.
pub fn filter_pool<'a>(
    strategy: Strategy,
    state: &ExerciseState,
    pool: &'a [CandidateQuestion],
    history: &[AttemptRecord],
    thresholds: &ProgressionThresholds,
) -> AdaptestResult<FilterOutcome<'a>> {
    ProgressionPolicy::new().filter(strategy, state, pool, history, thresholds)
}
