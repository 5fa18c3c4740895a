//! Tests for TFN operations.

use proptest::prelude::*;

use super::*;
use crate::error::FuzzyError;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn ordered_tfn() -> impl Strategy<Value = Tfn> {
    (-100.0f64..100.0, 0.01f64..50.0, 0.01f64..50.0)
        .prop_map(|(mode, left_spread, right_spread)| {
            Tfn::new(mode - left_spread, mode, mode + right_spread)
        })
}

// ============================================================================
// Algebra
// ============================================================================

mod algebra {
    use super::*;

    #[test]
    fn test_weighted_sum_accumulates() {
        let plus = Tfn::crisp(1.0);
        let s = weighted_sum(&Tfn::ZERO, &plus, 1.0, 1.0);
        let s = weighted_sum(&s, &plus, 1.0, 2.0);
        assert_eq!(s, Tfn::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_weighted_sum_keeps_unordered_shape() {
        let s = Tfn::new(0.0, 1.0, 2.0).weighted_sum(&Tfn::new(0.0, 1.0, 2.0), 1.0, -2.0);
        assert_eq!(s, Tfn::new(0.0, -1.0, -2.0));
        assert!(!s.is_ordered());
    }

    #[test]
    fn test_operators() {
        let a = Tfn::new(-1.0, 0.0, 1.0);
        let b = Tfn::new(0.5, 1.0, 2.0);
        assert_eq!(a + b, Tfn::new(-0.5, 1.0, 3.0));
        assert_eq!(b * 2.0, Tfn::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_alpha_cut() {
        let a = Tfn::new(0.0, 1.0, 3.0);
        assert_eq!(a.alpha_cut(0.0), (0.0, 3.0));
        assert_eq!(a.alpha_cut(0.5), (0.5, 2.0));
        assert_eq!(a.alpha_cut(1.0), (1.0, 1.0));
    }

    #[test]
    fn test_serde_sequence_form() {
        let a = Tfn::new(-0.5, 0.0, 0.25);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[-0.5,0.0,0.25]");
        assert_eq!(serde_json::from_str::<Tfn>(&json).unwrap(), a);
        assert!(serde_json::from_str::<Tfn>("[1.0, 2.0]").is_err());
    }

    proptest! {
        #[test]
        fn prop_weighted_sum_is_componentwise(
            a in prop::array::uniform3(-1e3f64..1e3),
            b in prop::array::uniform3(-1e3f64..1e3),
            ca in -10.0f64..10.0,
            cb in -10.0f64..10.0,
        ) {
            let sum = weighted_sum(&Tfn::from(a), &Tfn::from(b), ca, cb).components();
            for i in 0..3 {
                prop_assert_eq!(sum[i], ca * a[i] + cb * b[i]);
            }
        }
    }
}

// ============================================================================
// Defuzzification
// ============================================================================

mod defuzzification {
    use super::*;

    #[test]
    fn test_mode_and_mean() {
        let a = Tfn::new(0.0, 1.0, 5.0);
        assert_eq!(defuzzify(&a, DefuzzMode::Mode).unwrap(), 1.0);
        assert_eq!(defuzzify(&a, DefuzzMode::Mean).unwrap(), 2.0);
    }

    #[test]
    fn test_median_skewed() {
        assert_close(
            defuzzify(&Tfn::new(0.0, 0.0, 3.0), DefuzzMode::Median).unwrap(),
            3.0 - 4.5f64.sqrt(),
        );
        assert_close(
            defuzzify(&Tfn::new(0.0, 3.0, 3.0), DefuzzMode::Median).unwrap(),
            4.5f64.sqrt(),
        );
        assert_close(
            defuzzify(&Tfn::new(0.0, 1.0, 4.0), DefuzzMode::Median).unwrap(),
            4.0 - 6.0f64.sqrt(),
        );
    }

    #[test]
    fn test_median_of_crisp() {
        assert_eq!(
            defuzzify(&Tfn::crisp(-2.0), DefuzzMode::Median).unwrap(),
            -2.0
        );
    }

    #[test]
    fn test_median_rejects_unordered() {
        let err = defuzzify(&Tfn::new(2.0, 1.0, 0.0), DefuzzMode::Median).unwrap_err();
        assert!(matches!(err, FuzzyError::DomainError(_)));

        let err = defuzzify(&Tfn::new(0.0, 3.0, 1.0), DefuzzMode::Median).unwrap_err();
        assert!(matches!(err, FuzzyError::DomainError(_)));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("mode".parse::<DefuzzMode>().unwrap(), DefuzzMode::Mode);
        assert_eq!(" Mean ".parse::<DefuzzMode>().unwrap(), DefuzzMode::Mean);
        assert_eq!("MEDIAN".parse::<DefuzzMode>().unwrap(), DefuzzMode::Median);

        let err = "centroid".parse::<DefuzzMode>().unwrap_err();
        assert_eq!(
            err,
            FuzzyError::InvalidArgument("unrecognized method: centroid".to_string())
        );
    }

    proptest! {
        #[test]
        fn prop_mode_of_crisp_is_identity(m in -1e6f64..1e6) {
            prop_assert_eq!(defuzzify(&Tfn::crisp(m), DefuzzMode::Mode).unwrap(), m);
        }

        #[test]
        fn prop_mean(l in -1e3f64..1e3, m in -1e3f64..1e3, r in -1e3f64..1e3) {
            let mean = defuzzify(&Tfn::new(l, m, r), DefuzzMode::Mean).unwrap();
            prop_assert_eq!(mean, (l + m + r) / 3.0);
        }

        #[test]
        fn prop_median_of_symmetric_is_mode(m in -1e3f64..1e3, spread in 0.0f64..1e2) {
            let median = defuzzify(&Tfn::new(m - spread, m, m + spread), DefuzzMode::Median).unwrap();
            prop_assert!((median - m).abs() < 1e-6);
        }

        #[test]
        fn prop_median_within_support(a in ordered_tfn()) {
            let median = defuzzify(&a, DefuzzMode::Median).unwrap();
            prop_assert!(median >= a.left - 1e-9 && median <= a.right + 1e-9);
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

mod comparison {
    use super::*;

    #[test]
    fn test_disjoint_supports() {
        let low = Tfn::new(0.0, 1.0, 2.0);
        let high = Tfn::new(5.0, 6.0, 7.0);
        assert_eq!(fuzzy_greater(&high, &low).unwrap(), 1.0);
        assert_eq!(fuzzy_greater(&low, &high).unwrap(), 0.0);
    }

    #[test]
    fn test_equal_numbers_are_half() {
        let a = Tfn::new(0.0, 1.0, 2.0);
        assert_eq!(fuzzy_greater(&a, &a).unwrap(), 0.5);
    }

    #[test]
    fn test_overlapping() {
        let a = Tfn::new(0.0, 1.0, 2.0);
        let b = Tfn::new(1.0, 2.0, 3.0);
        assert_close(fuzzy_greater(&a, &b).unwrap(), 2.0 / 11.0);
        assert_close(fuzzy_greater(&b, &a).unwrap(), 9.0 / 11.0);
    }

    #[test]
    fn test_nested_symmetric() {
        let wide = Tfn::new(0.0, 1.0, 2.0);
        let narrow = Tfn::new(0.5, 1.0, 1.5);
        assert_close(fuzzy_greater(&wide, &narrow).unwrap(), 0.5);
        assert_close(fuzzy_greater(&narrow, &wide).unwrap(), 0.5);
    }

    #[test]
    fn test_crisp_inputs_are_degenerate() {
        let err = fuzzy_greater(&Tfn::crisp(1.0), &Tfn::crisp(2.0)).unwrap_err();
        assert_eq!(err, FuzzyError::DegenerateInput);

        let err = fuzzy_greater(&Tfn::crisp(0.0), &Tfn::crisp(0.0)).unwrap_err();
        assert_eq!(err, FuzzyError::DegenerateInput);
    }

    #[test]
    fn test_single_crisp_input_is_degenerate() {
        let err = fuzzy_greater(&Tfn::crisp(0.0), &Tfn::new(0.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(err, FuzzyError::DegenerateInput);
    }

    proptest! {
        #[test]
        fn prop_bounded(a in ordered_tfn(), b in ordered_tfn()) {
            let degree = fuzzy_greater(&a, &b).unwrap();
            prop_assert!((0.0..=1.0).contains(&degree));
        }
    }
}

// ============================================================================
// Argmax
// ============================================================================

mod argmax {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(fuzzy_argmax(&[], 0.5).unwrap(), None);
    }

    #[test]
    fn test_single_candidate_skips_comparison() {
        // A crisp candidate would fail any comparison.
        assert_eq!(fuzzy_argmax(&[Tfn::crisp(3.0)], 0.5).unwrap(), Some(0));
    }

    #[test]
    fn test_clear_winner() {
        let scores = [
            Tfn::new(-3.0, -2.0, -1.0),
            Tfn::new(4.0, 5.0, 6.0),
            Tfn::new(0.0, 1.0, 2.0),
        ];
        assert_eq!(
            fuzzy_argmax(&scores, DEFAULT_MEMBERSHIP_THRESHOLD).unwrap(),
            Some(1)
        );
    }

    #[test]
    fn test_ties_keep_earliest() {
        let a = Tfn::new(0.0, 1.0, 2.0);
        // fuzzy_greater(a, a) == 0.5 is not below the threshold
        assert_eq!(fuzzy_argmax(&[a, a, a], 0.5).unwrap(), Some(0));
    }

    #[test]
    fn test_sweep_order_is_not_transitive_max() {
        let a = Tfn::new(0.5, 1.0, 1.0);
        let b = Tfn::new(-2.5, 1.5, 3.0);
        let c = Tfn::new(-0.5, 0.5, 0.5);
        let threshold = 0.8;

        assert!(fuzzy_greater(&a, &b).unwrap() < threshold);
        assert!(fuzzy_greater(&b, &c).unwrap() < threshold);
        assert!(fuzzy_greater(&a, &c).unwrap() >= threshold);

        // a is displaced by b, b by c; a is never compared against c again
        assert_eq!(fuzzy_argmax(&[a, b, c], threshold).unwrap(), Some(2));
    }

    #[test]
    fn test_propagates_degenerate_comparison() {
        let scores = [Tfn::crisp(1.0), Tfn::crisp(2.0)];
        assert_eq!(
            fuzzy_argmax(&scores, 0.5).unwrap_err(),
            FuzzyError::DegenerateInput
        );
    }
}
