use serde::{Deserialize, Serialize};

/// Pool filtering strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Streak length and classification jump. Production default.
    #[default]
    StreakJump,
    /// Probability thresholds around the current difficulty. Kept for comparison.
    LegacyProbability,
}
