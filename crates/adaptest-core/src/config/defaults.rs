// Single source of truth for all default values.

// --- Progression thresholds ---
pub const DEFAULT_CORRECT_ANSWERS_TO_UPGRADE: u32 = 3;
pub const DEFAULT_INCORRECT_ANSWERS_TO_DOWNGRADE: u32 = 2;
pub const DEFAULT_SKIPPED_QUESTIONS_TO_DOWNGRADE: u32 = 5;

// --- Policy ---
/// Minimum P(correct) for the first question when no start class is fixed.
pub const DEFAULT_INITIAL_PROBABILITY_FLOOR: f64 = 0.2;
/// Legacy strategy: max P(correct) after a correct answer.
pub const DEFAULT_LEGACY_UPGRADE_CEILING: f64 = 0.5;
/// Legacy strategy: min P(correct) after an incorrect or skipped answer.
pub const DEFAULT_LEGACY_DOWNGRADE_FLOOR: f64 = 0.6;
/// Legacy strategy: max classes between candidate and current difficulty.
pub const DEFAULT_LEGACY_MAX_JUMP: u32 = 2;

// --- Theta ---
pub const DEFAULT_INITIAL_THETA: f64 = 1.0;
pub const DEFAULT_SKIP_DELTA: f64 = -0.04;
pub const DEFAULT_CORRECT_DELTA: f64 = 0.08;
pub const DEFAULT_INCORRECT_DELTA: f64 = -0.08;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "adaptest=info";
pub const DEFAULT_JSON_LOGS: bool = false;
