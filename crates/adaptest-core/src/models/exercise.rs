use serde::{Deserialize, Serialize};

use super::DifficultyClass;

/// Snapshot of one active adaptive exercise, read but never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseState {
    pub exercise_id: String,
    pub course_id: String,
    pub student_id: String,
    pub definition_id: String,
    pub current_difficulty: DifficultyClass,
    /// Running ability estimate.
    pub current_theta: f64,
    /// Fixed class for the first question, when the definition sets one.
    #[serde(default)]
    pub start_difficulty: Option<DifficultyClass>,
}

impl ExerciseState {
    /// State with empty identifiers, mostly useful for callers that only
    /// need the numeric part.
    pub fn new(current_difficulty: DifficultyClass, current_theta: f64) -> Self {
        Self {
            exercise_id: String::new(),
            course_id: String::new(),
            student_id: String::new(),
            definition_id: String::new(),
            current_difficulty,
            current_theta,
            start_difficulty: None,
        }
    }

    pub fn with_start_difficulty(mut self, start: DifficultyClass) -> Self {
        self.start_difficulty = Some(start);
        self
    }
}

/// A finished prior exercise of the same student and course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedExercise {
    pub exercise_id: String,
    pub final_theta: f64,
}

impl CompletedExercise {
    pub fn new(exercise_id: impl Into<String>, final_theta: f64) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            final_theta,
        }
    }
}
