//! # adaptest-core
//!
//! Foundation crate for adaptive question selection.
//! Defines the data model, the difficulty classification scale, errors,
//! config, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod scale;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::AdaptestConfig;
pub use errors::{AdaptestError, AdaptestResult};
pub use models::{
    AnswerOutcome, AttemptRecord, CandidateQuestion, CompletedExercise, DeltaKind,
    DifficultyClass, ExerciseState, ItemParameters, ProgressionThresholds, Strategy, ThetaDelta,
};
