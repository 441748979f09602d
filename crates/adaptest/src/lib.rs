//! # adaptest
//!
//! Entry points for adaptive question selection. The caller owns all state
//! (exercise, history, pool) and persists whatever it gets back.
//!
//! | Operation | Free function | Configured |
//! |-----------|---------------|------------|
//! | Starting theta | [`estimate_initial_theta`] | [`AdaptiveEngine::estimate_initial_theta`] |
//! | Next question | [`select_next_question`] | [`AdaptiveEngine::select_next_question`] |
//! | Theta adjustment | [`compute_theta_delta`] | [`AdaptiveEngine::compute_theta_delta`] |

pub mod engine;

pub use adaptest_core::models::*;
pub use adaptest_core::{scale, AdaptestConfig, AdaptestError, AdaptestResult};
pub use adaptest_irt::{compute_theta_delta, estimate_initial_theta, LogisticModel};
pub use adaptest_progression::{FilterOutcome, ProgressionDecision, StreakSummary};
pub use engine::{select_next_question, AdaptiveEngine};
