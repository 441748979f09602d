//! Test fixtures for adaptest: golden progression scenarios and small
//! builders for pools and attempt histories.

use std::path::PathBuf;

use adaptest_core::models::{
    AttemptRecord, CandidateQuestion, DifficultyClass, ExerciseState, ItemParameters,
    ProgressionThresholds, Strategy,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Directory holding `golden/`: this crate's own manifest dir, or the
/// `test-fixtures` member found from any ancestor of the calling crate.
fn fixtures_root() -> PathBuf {
    let manifest_dir = PathBuf::from(
        std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_else(|| ".".into()),
    );
    manifest_dir
        .ancestors()
        .flat_map(|dir| [dir.to_path_buf(), dir.join("test-fixtures")])
        .find(|dir| dir.join("golden").is_dir())
        .unwrap_or_else(|| panic!("no golden/ directory reachable from {}", manifest_dir.display()))
}

/// Deserialize the JSON golden file at `relative_path` under the fixtures root.
///
/// # Panics
/// On a missing or malformed file, naming the offending path.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read golden file {}: {e}", path.display()));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("golden file {} does not match its type: {e}", path.display()))
}

/// JSON files directly under `subdir`, sorted so scenarios replay in a stable order.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot list golden dir {}: {e}", dir.display()))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// A recorded pool-filtering case with its expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressionScenario {
    pub name: String,
    #[serde(default)]
    pub strategy: Strategy,
    pub state: ExerciseState,
    /// Most recent attempt first.
    #[serde(default)]
    pub history: Vec<AttemptRecord>,
    #[serde(default)]
    pub thresholds: ProgressionThresholds,
    pub pool: Vec<CandidateQuestion>,
    /// Ids of the candidates that must pass, in pool order.
    pub expected_accepted: Vec<String>,
}

/// Load every scenario under `golden/progression/`.
pub fn progression_scenarios() -> Vec<ProgressionScenario> {
    list_fixtures("golden/progression")
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            load_fixture(&format!("golden/progression/{name}"))
        })
        .collect()
}

// --- Builders ---

/// Candidate with a plain two-parameter curve (no guess, no slip).
pub fn candidate(id: &str, class: DifficultyClass, difficulty: f64) -> CandidateQuestion {
    CandidateQuestion::new(id, ItemParameters::new(difficulty, 1.0, 0.0, 0.0), class)
}

/// One candidate per class, ids equal to the class labels, difficulty rising
/// from -2.0 (very_easy) to 2.0 (very_hard).
pub fn pool_one_per_class() -> Vec<CandidateQuestion> {
    adaptest_core::scale::ORDER
        .iter()
        .map(|&class| candidate(class.as_str(), class, class.index() as f64 - 2.0))
        .collect()
}

/// `n` correct attempts on `class`, most recent first.
pub fn correct_streak(class: DifficultyClass, n: usize) -> Vec<AttemptRecord> {
    vec![AttemptRecord::correct(class); n]
}

pub fn incorrect_streak(class: DifficultyClass, n: usize) -> Vec<AttemptRecord> {
    vec![AttemptRecord::incorrect(class); n]
}

pub fn skipped_streak(class: DifficultyClass, n: usize) -> Vec<AttemptRecord> {
    vec![AttemptRecord::skipped(class); n]
}

/// Exercise at `class` with theta 0.0, identifiers filled in.
pub fn exercise_at(class: DifficultyClass) -> ExerciseState {
    ExerciseState {
        exercise_id: "exercise-1".to_string(),
        course_id: "course-1".to_string(),
        student_id: "student-1".to_string(),
        definition_id: "definition-1".to_string(),
        ..ExerciseState::new(class, 0.0)
    }
}
