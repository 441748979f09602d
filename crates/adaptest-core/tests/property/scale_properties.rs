use adaptest_core::models::DifficultyClass;
use adaptest_core::scale;
use proptest::prelude::*;

fn arb_class() -> impl Strategy<Value = DifficultyClass> {
    prop_oneof![
        Just(DifficultyClass::VeryEasy),
        Just(DifficultyClass::Easy),
        Just(DifficultyClass::Normal),
        Just(DifficultyClass::Hard),
        Just(DifficultyClass::VeryHard),
    ]
}

proptest! {
    #[test]
    fn jump_is_antisymmetric(a in arb_class(), b in arb_class()) {
        prop_assert_eq!(scale::jump(a, b), -scale::jump(b, a));
    }

    #[test]
    fn compare_is_antisymmetric(a in arb_class(), b in arb_class()) {
        prop_assert_eq!(scale::compare(a, b), -scale::compare(b, a));
    }

    #[test]
    fn compare_agrees_with_ord(a in arb_class(), b in arb_class()) {
        prop_assert_eq!(scale::compare(a, b).signum(), a.cmp(&b) as i32);
    }

    #[test]
    fn average_of_single_class_is_that_class(c in arb_class()) {
        prop_assert_eq!(scale::average(&[c]), Ok(c));
    }

    #[test]
    fn average_stays_between_min_and_max(classes in prop::collection::vec(arb_class(), 1..20)) {
        let avg = scale::average(&classes).unwrap();
        let min = *classes.iter().min().unwrap();
        let max = *classes.iter().max().unwrap();
        prop_assert!(min <= avg && avg <= max);
    }

    #[test]
    fn step_matches_jump(c in arb_class(), delta in -4i32..=4) {
        if let Some(target) = scale::step(c, delta) {
            prop_assert_eq!(scale::jump(c, target), delta);
        }
    }
}
