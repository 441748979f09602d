use adaptest_core::models::{AttemptRecord, DifficultyClass};
use adaptest_progression::streak::analyze;
use proptest::prelude::*;

fn arb_attempt() -> impl Strategy<Value = AttemptRecord> {
    let class = prop_oneof![
        Just(DifficultyClass::VeryEasy),
        Just(DifficultyClass::Easy),
        Just(DifficultyClass::Normal),
        Just(DifficultyClass::Hard),
        Just(DifficultyClass::VeryHard),
    ];
    (class, any::<bool>(), any::<bool>()).prop_map(|(difficulty_class, was_skipped, was_correct)| {
        AttemptRecord {
            difficulty_class,
            was_skipped,
            was_correct,
        }
    })
}

proptest! {
    #[test]
    fn streak_prefix_shares_the_outcome(history in prop::collection::vec(arb_attempt(), 1..30)) {
        let summary = analyze(&history);
        let len = summary.streak_length as usize;
        prop_assert!(len >= 1 && len <= history.len());
        for attempt in &history[..len] {
            prop_assert_eq!(Some(attempt.outcome()), summary.streak_type);
        }
        if let Some(next) = history.get(len) {
            prop_assert_ne!(Some(next.outcome()), summary.streak_type);
        }
    }

    #[test]
    fn class_streak_is_a_leading_run(history in prop::collection::vec(arb_attempt(), 1..30)) {
        let summary = analyze(&history);
        let class_len = summary.class_streak_length as usize;
        prop_assert!(class_len >= 1);
        prop_assert!(class_len <= summary.streak_length as usize);
        for attempt in &history[..class_len] {
            prop_assert_eq!(Some(attempt.difficulty_class), summary.reference_class);
        }
        if class_len < summary.streak_length as usize {
            prop_assert_ne!(Some(history[class_len].difficulty_class), summary.reference_class);
        }
    }

    #[test]
    fn older_attempts_beyond_the_streak_do_not_matter(
        history in prop::collection::vec(arb_attempt(), 1..15),
        tail in prop::collection::vec(arb_attempt(), 0..15),
    ) {
        let summary = analyze(&history);
        let len = summary.streak_length as usize;
        if len < history.len() {
            let mut extended = history.clone();
            extended.extend(tail);
            prop_assert_eq!(analyze(&extended), summary);
        }
    }
}
