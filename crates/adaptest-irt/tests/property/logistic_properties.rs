use adaptest_core::models::ItemParameters;
use adaptest_irt::LogisticModel;
use proptest::prelude::*;

proptest! {
    #[test]
    fn approaches_zero_and_one_without_guess_or_slip(
        difficulty in -3.0f64..3.0,
        discrimination in 0.2f64..3.0,
    ) {
        let m = LogisticModel::new(ItemParameters::new(difficulty, discrimination, 0.0, 0.0));
        prop_assert!(m.probability(-1_000.0) < 1e-6);
        prop_assert!(m.probability(1_000.0) > 1.0 - 1e-6);
    }

    #[test]
    fn inflection_at_difficulty(
        difficulty in -3.0f64..3.0,
        discrimination in 0.2f64..3.0,
        offset in 0.5f64..2.0,
        guess in 0.0f64..0.4,
        mistake in 0.0f64..0.4,
    ) {
        let params = ItemParameters::new(difficulty, discrimination, guess, mistake)
            .with_offset_constant(offset);
        let m = LogisticModel::new(params);
        let expected = guess + (1.0 - mistake - guess) / 2.0;
        prop_assert!((m.core(difficulty) - 0.5).abs() < 1e-12);
        prop_assert!((m.probability(difficulty) - expected).abs() < 1e-12);
    }

    #[test]
    fn stays_between_asymptotes(
        theta in -10.0f64..10.0,
        difficulty in -3.0f64..3.0,
        discrimination in 0.2f64..3.0,
        guess in 0.0f64..0.4,
        mistake in 0.0f64..0.4,
    ) {
        let m = LogisticModel::new(ItemParameters::new(difficulty, discrimination, guess, mistake));
        let p = m.probability(theta);
        prop_assert!(p >= guess - 1e-12);
        prop_assert!(p <= 1.0 - mistake + 1e-12);
    }

    #[test]
    fn increasing_in_theta_for_positive_slope(
        theta in -5.0f64..5.0,
        step in 0.01f64..2.0,
        discrimination in 0.2f64..3.0,
    ) {
        let m = LogisticModel::new(ItemParameters::new(0.0, discrimination, 0.1, 0.1));
        prop_assert!(m.probability(theta + step) >= m.probability(theta));
    }
}
