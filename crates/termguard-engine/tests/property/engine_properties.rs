//! Property tests for the engine's structural invariants.

use proptest::prelude::*;

use termguard_core::config::{AnalyticsConfig, SuggestionConfig};
use termguard_core::types::{MatchType, NegativeKeywordRule, SearchTermRecord};
use termguard_engine::{aggregate, match_terms, suggest};

fn arb_record() -> impl Strategy<Value = SearchTermRecord> {
    (
        "[a-z]{0,8}( [a-z]{1,8}){0,4}",
        proptest::option::of(0u64..10_000),
        proptest::option::of(0u64..500),
        proptest::option::of(0.0f64..1_000.0),
        proptest::option::of(0.0f64..50.0),
    )
        .prop_map(|(term, impressions, clicks, cost, conversions)| {
            let mut record = SearchTermRecord::new(term);
            record.impressions = impressions;
            record.clicks = clicks;
            record.cost = cost;
            record.conversions = conversions;
            record
        })
}

fn arb_rules() -> impl Strategy<Value = Vec<NegativeKeywordRule>> {
    proptest::collection::vec(
        (
            "[a-z]{1,8}( [a-z]{1,8}){0,2}",
            prop_oneof![
                Just(MatchType::Exact),
                Just(MatchType::Phrase),
                Just(MatchType::Broad),
            ],
        ),
        0..8,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(keyword, match_type)| NegativeKeywordRule::new(&keyword, match_type).unwrap())
            .collect()
    })
}

proptest! {
    #[test]
    fn confidence_scores_stay_in_bounds(
        records in proptest::collection::vec(arb_record(), 0..40)
    ) {
        for candidate in suggest(&records, &SuggestionConfig::default()) {
            prop_assert!(
                (0.0..=100.0).contains(&candidate.confidence_score),
                "{} scored {}",
                candidate.text,
                candidate.confidence_score
            );
            prop_assert!(candidate.supporting_term_count >= 1);
            prop_assert!(candidate.supporting_term_count <= candidate.occurrence_count);
        }
    }

    #[test]
    fn counts_reconcile_and_scores_are_finite(
        records in proptest::collection::vec(arb_record(), 0..40),
        rules in arb_rules()
    ) {
        let classified = match_terms(records, &rules);
        let candidates = suggest(&classified, &SuggestionConfig::default());
        let summary = aggregate(&classified, &candidates, &AnalyticsConfig::default());

        prop_assert_eq!(
            summary.excluded_count + summary.remaining_count,
            summary.total_terms
        );
        prop_assert!((0.0..=100.0).contains(&summary.quality_score));
        prop_assert!((0.0..=100.0).contains(&summary.action_score));
        prop_assert!(summary.cost_waste_prevented.is_finite());
    }

    #[test]
    fn exclusion_reason_tracks_excluded_flag(
        records in proptest::collection::vec(arb_record(), 0..40),
        rules in arb_rules()
    ) {
        for record in match_terms(records, &rules) {
            prop_assert_eq!(record.excluded, record.exclusion_reason.is_some());
            prop_assert_eq!(record.excluded, record.matched_keyword.is_some());
        }
    }

    #[test]
    fn classification_is_idempotent(
        records in proptest::collection::vec(arb_record(), 0..25),
        rules in arb_rules()
    ) {
        let first = match_terms(records.clone(), &rules);
        let second = match_terms(records, &rules);
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.excluded, b.excluded);
            prop_assert_eq!(&a.matched_keyword, &b.matched_keyword);
            prop_assert_eq!(&a.exclusion_reason, &b.exclusion_reason);
        }
    }
}
