//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = EvalSpec> {
    (
        2usize..50,                                 // folds
        1usize..20,                                 // repeats
        any::<u64>(),                               // seed
        proptest::collection::vec(0.01f64..0.999, 1..5), // confidence levels
    )
        .prop_map(|(folds, repeats, seed, confidence_levels)| EvalSpec {
            resampling: ResamplingSpec {
                folds,
                repeats,
                seed,
                stratify: false,
            },
            confidence_levels,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_fold_count_below_two_fails(mut spec in arb_valid_spec(), folds in 0usize..2) {
        spec.resampling.folds = folds;
        prop_assert_eq!(validate_config(&spec), Err(ValidationError::InvalidFolds(folds)));
    }

    #[test]
    fn prop_level_outside_unit_interval_fails(mut spec in arb_valid_spec(), level in 1.0f64..1000.0) {
        spec.confidence_levels.push(level);
        prop_assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidConfidenceLevel(_))
        ));
    }
}
