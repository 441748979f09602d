use adaptest_core::errors::{AdaptestError, ModelError, SelectionError};
use adaptest_core::models::{DifficultyClass::*, *};
use adaptest_progression::{filter_pool, ProgressionDecision, ProgressionPolicy};
use test_fixtures::*;

fn accepted_ids(
    strategy: Strategy,
    state: &ExerciseState,
    pool: &[CandidateQuestion],
    history: &[AttemptRecord],
    thresholds: &ProgressionThresholds,
) -> Vec<String> {
    filter_pool(strategy, state, pool, history, thresholds)
        .unwrap()
        .accepted
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

// ── Streak jump: thresholds ──────────────────────────────────────────────

#[test]
fn one_correct_answer_accepts_only_same_class() {
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &correct_streak(Normal, 1),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["normal"]);
}

#[test]
fn three_correct_answers_accept_only_one_class_up() {
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &correct_streak(Normal, 3),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["hard"]);
}

#[test]
fn normal_student_with_hard_and_very_easy_pool_gets_hard() {
    let pool = vec![
        candidate("hard-1", Hard, 1.0),
        candidate("very-easy-1", VeryEasy, -2.0),
    ];
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool,
        &correct_streak(Normal, 3),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["hard-1"]);
}

#[test]
fn very_hard_student_stays_on_very_hard() {
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(VeryHard),
        &pool_one_per_class(),
        &correct_streak(VeryHard, 3),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["very_hard"]);
}

#[test]
fn two_incorrect_answers_move_one_class_down() {
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &incorrect_streak(Normal, 2),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["easy"]);
}

#[test]
fn very_easy_student_is_clamped_on_downgrade() {
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(VeryEasy),
        &pool_one_per_class(),
        &skipped_streak(VeryEasy, 5),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["very_easy"]);
}

#[test]
fn fourth_correct_answer_starts_a_new_cycle() {
    // After moving up on the third answer, the fourth stays put.
    let mut history = vec![AttemptRecord::correct(Hard)];
    history.extend(correct_streak(Normal, 3));
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Hard),
        &pool_one_per_class(),
        &history,
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["hard"]);
}

#[test]
fn reference_class_is_the_last_attempt_not_the_exercise_difficulty() {
    // Stored current difficulty lags behind; the jump is measured from the last attempt.
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &correct_streak(Easy, 3),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["normal"]);
}

#[test]
fn custom_thresholds_apply() {
    let thresholds = ProgressionThresholds {
        correct_answers_to_upgrade: Some(2),
        ..Default::default()
    };
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Easy),
        &pool_one_per_class(),
        &correct_streak(Easy, 2),
        &thresholds,
    );
    assert_eq!(ids, vec!["normal"]);
}

#[test]
fn zero_threshold_is_invalid_input() {
    let thresholds = ProgressionThresholds {
        correct_answers_to_upgrade: Some(0),
        ..Default::default()
    };
    let err = filter_pool(
        Strategy::StreakJump,
        &exercise_at(Easy),
        &pool_one_per_class(),
        &correct_streak(Easy, 1),
        &thresholds,
    )
    .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(
        err,
        AdaptestError::Selection(SelectionError::InvalidThreshold { .. })
    ));
}

#[test]
fn outcome_streak_not_class_streak_drives_the_cycle() {
    // Outcome streak 4 -> test_streak 2 == T, move down.
    // Class streak 1 would give test_streak 1 < T and stay.
    let history = vec![
        AttemptRecord::incorrect(Hard),
        AttemptRecord::incorrect(Normal),
        AttemptRecord::incorrect(Normal),
        AttemptRecord::incorrect(Normal),
    ];
    let pool = pool_one_per_class();
    let outcome = filter_pool(
        Strategy::StreakJump,
        &exercise_at(Hard),
        &pool,
        &history,
        &ProgressionThresholds::new(3, 2, 5),
    )
    .unwrap();
    match outcome.decision {
        ProgressionDecision::StreakJump {
            streak,
            test_streak,
            accepted_jump,
            ..
        } => {
            assert_eq!(streak.streak_length, 4);
            assert_eq!(streak.class_streak_length, 1);
            assert_eq!(test_streak, 2);
            assert_eq!(accepted_jump, -1);
        }
        other => panic!("expected StreakJump, got {other:?}"),
    }
    let ids: Vec<&str> = outcome.accepted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["normal"]);
}

#[test]
fn malformed_candidate_fails_the_whole_filter() {
    let mut pool = pool_one_per_class();
    pool[1].item_parameters.discrimination = f64::NAN;
    for strategy in [Strategy::StreakJump, Strategy::LegacyProbability] {
        let err = filter_pool(
            strategy,
            &exercise_at(Normal),
            &pool,
            &correct_streak(Normal, 1),
            &ProgressionThresholds::default(),
        )
        .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(
            err,
            AdaptestError::Model(ModelError::MalformedParameters {
                field: "discrimination",
                ..
            })
        ));
    }
}

#[test]
fn nan_theta_fails_the_first_question() {
    let state = ExerciseState {
        current_theta: f64::NAN,
        ..exercise_at(Normal)
    };
    let err = filter_pool(
        Strategy::StreakJump,
        &state,
        &pool_one_per_class(),
        &[],
        &ProgressionThresholds::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AdaptestError::Model(ModelError::NonFiniteTheta { .. })
    ));
}

// ── First question ───────────────────────────────────────────────────────

#[test]
fn first_question_with_start_class_ignores_probability() {
    let state = exercise_at(Normal).with_start_difficulty(VeryHard);
    for strategy in [Strategy::StreakJump, Strategy::LegacyProbability] {
        let ids = accepted_ids(
            strategy,
            &state,
            &pool_one_per_class(),
            &[],
            &ProgressionThresholds::default(),
        );
        assert_eq!(ids, vec!["very_hard"]);
    }
}

#[test]
fn first_question_without_start_class_uses_probability_floor() {
    // theta 0: p = 0.88, 0.73, 0.5, 0.27, 0.12 from very_easy to very_hard.
    let ids = accepted_ids(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &[],
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["very_easy", "easy", "normal", "hard"]);
}

#[test]
fn configured_floor_is_respected() {
    let policy = ProgressionPolicy::from_config(adaptest_core::config::PolicyConfig {
        initial_probability_floor: 0.6,
        ..Default::default()
    });
    let pool = pool_one_per_class();
    let outcome = policy
        .filter(
            Strategy::StreakJump,
            &exercise_at(Normal),
            &pool,
            &[],
            &ProgressionThresholds::default(),
        )
        .unwrap();
    let ids: Vec<&str> = outcome.accepted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["very_easy", "easy"]);
    assert_eq!(
        outcome.decision,
        ProgressionDecision::ProbabilityFloor {
            theta: 0.0,
            floor: 0.6
        }
    );
}

// ── Legacy strategy ──────────────────────────────────────────────────────

#[test]
fn legacy_after_correct_prefers_harder_low_probability() {
    // theta 0: hard (p 0.27) and very_hard (p 0.12) are at or above normal and p <= 0.5.
    let ids = accepted_ids(
        Strategy::LegacyProbability,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &correct_streak(Normal, 1),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["normal", "hard", "very_hard"]);
}

#[test]
fn legacy_after_skip_prefers_easier_high_probability() {
    let ids = accepted_ids(
        Strategy::LegacyProbability,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &skipped_streak(Normal, 1),
        &ProgressionThresholds::default(),
    );
    assert_eq!(ids, vec!["very_easy", "easy"]);
}

#[test]
fn legacy_ignores_streak_length() {
    let one = accepted_ids(
        Strategy::LegacyProbability,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &correct_streak(Normal, 1),
        &ProgressionThresholds::default(),
    );
    let five = accepted_ids(
        Strategy::LegacyProbability,
        &exercise_at(Normal),
        &pool_one_per_class(),
        &correct_streak(Normal, 5),
        &ProgressionThresholds::default(),
    );
    assert_eq!(one, five);
}

// ── Decisions ────────────────────────────────────────────────────────────

#[test]
fn streak_decision_reports_cycle_position() {
    let pool = pool_one_per_class();
    let outcome = filter_pool(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool,
        &correct_streak(Normal, 5),
        &ProgressionThresholds::default(),
    )
    .unwrap();
    match outcome.decision {
        ProgressionDecision::StreakJump {
            streak,
            threshold,
            test_streak,
            accepted_jump,
            ..
        } => {
            assert_eq!(streak.streak_length, 5);
            assert_eq!(threshold, 3);
            assert_eq!(test_streak, 2);
            assert_eq!(accepted_jump, 0);
        }
        other => panic!("expected StreakJump, got {other:?}"),
    }
}

#[test]
fn empty_result_is_not_an_error() {
    let pool = vec![candidate("e1", Easy, -1.0)];
    let outcome = filter_pool(
        Strategy::StreakJump,
        &exercise_at(Normal),
        &pool,
        &correct_streak(Normal, 3),
        &ProgressionThresholds::default(),
    )
    .unwrap();
    assert!(outcome.is_empty());
}

#[test]
fn decision_serializes_with_rule_tag() {
    let pool = pool_one_per_class();
    let outcome = filter_pool(
        Strategy::StreakJump,
        &exercise_at(Normal).with_start_difficulty(Easy),
        &pool,
        &[],
        &ProgressionThresholds::default(),
    )
    .unwrap();
    let json = serde_json::to_value(outcome.decision).unwrap();
    assert_eq!(json["rule"], "fixed_start");
    assert_eq!(json["class"], "easy");
}
