use adaptest_core::config::{defaults, ThetaConfig};
use adaptest_core::models::{AnswerOutcome, ThetaDelta};

/// Fixed percentage adjustment of theta per answer outcome.
///
/// | Outcome | Delta |
/// |---------|-------|
/// | skipped | −4 %  |
/// | correct | +8 %  |
/// | incorrect | −8 % |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaDeltaCalculator {
    skip: f64,
    correct: f64,
    incorrect: f64,
}

impl ThetaDeltaCalculator {
    pub fn new() -> Self {
        Self {
            skip: defaults::DEFAULT_SKIP_DELTA,
            correct: defaults::DEFAULT_CORRECT_DELTA,
            incorrect: defaults::DEFAULT_INCORRECT_DELTA,
        }
    }

    pub fn from_config(config: &ThetaConfig) -> Self {
        Self {
            skip: config.skip_delta,
            correct: config.correct_delta,
            incorrect: config.incorrect_delta,
        }
    }

    /// Always a percentage delta.
    pub fn delta(&self, outcome: AnswerOutcome) -> ThetaDelta {
        let value = match outcome {
            AnswerOutcome::Skipped => self.skip,
            AnswerOutcome::Correct => self.correct,
            AnswerOutcome::Incorrect => self.incorrect,
        };
        ThetaDelta::percentage(value)
    }

    /// New theta after `outcome`.
    pub fn apply(&self, theta: f64, outcome: AnswerOutcome) -> f64 {
        self.delta(outcome).apply(theta)
    }
}

impl Default for ThetaDeltaCalculator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn compute_theta_delta(outcome: AnswerOutcome) -> ThetaDelta {
    ThetaDeltaCalculator::new().delta(outcome)
}
