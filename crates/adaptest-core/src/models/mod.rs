pub mod attempt;
pub mod candidate;
pub mod difficulty_class;
pub mod exercise;
pub mod item_parameters;
pub mod outcome;
pub mod strategy;
pub mod theta_delta;
pub mod thresholds;

pub use attempt::AttemptRecord;
pub use candidate::CandidateQuestion;
pub use difficulty_class::DifficultyClass;
pub use exercise::{CompletedExercise, ExerciseState};
pub use item_parameters::ItemParameters;
pub use outcome::AnswerOutcome;
pub use strategy::Strategy;
pub use theta_delta::{DeltaKind, ThetaDelta};
pub use thresholds::ProgressionThresholds;
