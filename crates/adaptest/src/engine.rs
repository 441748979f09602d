//! AdaptiveEngine: config-driven wrapper around pool filtering, selection, and theta updates.

use std::path::Path;

use adaptest_core::errors::{AdaptestResult, SelectionError};
use adaptest_core::models::{
    AnswerOutcome, AttemptRecord, CandidateQuestion, CompletedExercise, ExerciseState,
    ProgressionThresholds, Strategy, ThetaDelta,
};
use adaptest_core::AdaptestConfig;
use adaptest_irt::{InitialThetaEstimator, ThetaDeltaCalculator};
use adaptest_progression::{selector, FilterOutcome, ProgressionPolicy};
use rand::Rng;

/// Adaptive testing engine built from an `AdaptestConfig`.
///
/// Stateless between calls: every decision is computed from the snapshot
/// passed in, so one engine can serve many exercises concurrently.
#[derive(Debug, Clone)]
pub struct AdaptiveEngine {
    config: AdaptestConfig,
    policy: ProgressionPolicy,
    initial: InitialThetaEstimator,
    deltas: ThetaDeltaCalculator,
}

impl AdaptiveEngine {
    /// Engine with compiled defaults.
    pub fn new() -> Self {
        Self::from_config(AdaptestConfig::default())
    }

    pub fn from_config(config: AdaptestConfig) -> Self {
        Self {
            policy: ProgressionPolicy::from_config(config.policy),
            initial: InitialThetaEstimator::from_config(&config.theta),
            deltas: ThetaDeltaCalculator::from_config(&config.theta),
            config,
        }
    }

    /// Load config from a TOML file (plus `ADAPTEST_*` overrides).
    pub fn load(path: &Path) -> AdaptestResult<Self> {
        Ok(Self::from_config(AdaptestConfig::load(path)?))
    }

    pub fn config(&self) -> &AdaptestConfig {
        &self.config
    }

    pub fn default_strategy(&self) -> Strategy {
        self.config.policy.default_strategy
    }

    pub fn estimate_initial_theta(&self, previous: &[CompletedExercise]) -> f64 {
        self.initial.estimate(previous)
    }

    pub fn compute_theta_delta(&self, outcome: AnswerOutcome) -> ThetaDelta {
        self.deltas.delta(outcome)
    }

    /// Theta after `outcome`.
    pub fn apply_answer(&self, theta: f64, outcome: AnswerOutcome) -> f64 {
        self.deltas.apply(theta, outcome)
    }

    /// Filter `pool` without sampling. Unset thresholds come from the config.
    pub fn filter_candidates<'a>(
        &self,
        state: &ExerciseState,
        pool: &'a [CandidateQuestion],
        history: &[AttemptRecord],
        thresholds: &ProgressionThresholds,
        strategy: Strategy,
    ) -> AdaptestResult<FilterOutcome<'a>> {
        let thresholds = self.config.thresholds.resolve(*thresholds);
        self.policy
            .filter(strategy, state, pool, history, &thresholds)
    }

    /// Filter `pool`, then draw one accepted candidate uniformly with `rng`.
    ///
    /// Returns `EmptyPool` when no candidate passes.
    pub fn select_next_question<R>(
        &self,
        state: &ExerciseState,
        pool: &[CandidateQuestion],
        history: &[AttemptRecord],
        thresholds: &ProgressionThresholds,
        strategy: Strategy,
        rng: &mut R,
    ) -> AdaptestResult<CandidateQuestion>
    where
        R: Rng + ?Sized,
    {
        let outcome = self.filter_candidates(state, pool, history, thresholds, strategy)?;
        if outcome.is_empty() {
            tracing::warn!(
                exercise_id = %state.exercise_id,
                ?strategy,
                decision = ?outcome.decision,
                pool = pool.len(),
                "no eligible candidate question"
            );
            return Err(SelectionError::EmptyPool {
                pool_size: pool.len(),
            }
            .into());
        }

        let picked = *selector::select(&outcome.accepted, rng)?;
        tracing::debug!(
            exercise_id = %state.exercise_id,
            question_id = %picked.id,
            classification = %picked.classification,
            eligible = outcome.accepted.len(),
            "selected next question"
        );
        Ok(picked.clone())
    }
}

impl Default for AdaptiveEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter with the default policy and pick the next question.
pub fn select_next_question<R>(
    state: &ExerciseState,
    pool: &[CandidateQuestion],
    history: &[AttemptRecord],
    thresholds: &ProgressionThresholds,
    strategy: Strategy,
    rng: &mut R,
) -> AdaptestResult<CandidateQuestion>
where
    R: Rng + ?Sized,
{
    AdaptiveEngine::new().select_next_question(state, pool, history, thresholds, strategy, rng)
}
