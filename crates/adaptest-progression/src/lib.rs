//! # adaptest-progression
//!
//! Decides which questions of a pool are acceptable next, then draws one.
//!
//! ## Pipeline
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | Streak analysis | `streak` | outcome streak + same-class sub-streak |
//! | Pool filtering | `policy` | accepted candidates + decision |
//! | Sampling | `selector` | one candidate, uniformly at random |
//!
//! ## Strategies
//!
//! - `StreakJump`: stay at the reference class until `T` consecutive
//!   same-outcome answers, then move one class (clamped at the scale ends).
//! - `LegacyProbability`: P(correct) ceilings/floors around the current difficulty.

pub mod policy;
pub mod selector;
pub mod streak;

pub use policy::{filter_pool, FilterOutcome, ProgressionDecision, ProgressionPolicy};
pub use selector::select;
pub use streak::{analyze, StreakSummary};
