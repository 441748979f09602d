use adaptest_core::config::{defaults, ThetaConfig};
use adaptest_core::models::CompletedExercise;

/// Starting theta for a new exercise: the plain mean of the final theta of
/// every completed exercise the student took in the course. No recency
/// weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialThetaEstimator {
    /// Theta used when the student has no completed exercise.
    default_theta: f64,
}

impl InitialThetaEstimator {
    pub fn new() -> Self {
        Self {
            default_theta: defaults::DEFAULT_INITIAL_THETA,
        }
    }

    pub fn with_default(default_theta: f64) -> Self {
        Self { default_theta }
    }

    pub fn from_config(config: &ThetaConfig) -> Self {
        Self::with_default(config.default_initial_theta)
    }

    pub fn default_theta(&self) -> f64 {
        self.default_theta
    }

    pub fn estimate(&self, previous: &[CompletedExercise]) -> f64 {
        if previous.is_empty() {
            tracing::debug!(
                theta = self.default_theta,
                "no completed exercises, using default theta"
            );
            return self.default_theta;
        }
        let sum: f64 = previous.iter().map(|e| e.final_theta).sum();
        let theta = sum / previous.len() as f64;
        tracing::debug!(theta, exercises = previous.len(), "estimated initial theta");
        theta
    }
}

impl Default for InitialThetaEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean final theta of `previous`, or 1.0 when there is none.
pub fn estimate_initial_theta(previous: &[CompletedExercise]) -> f64 {
    InitialThetaEstimator::new().estimate(previous)
}
