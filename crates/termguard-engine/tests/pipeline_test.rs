//! End-to-end pipeline tests: match → suggest → aggregate → review view.

use termguard_core::config::{AnalyticsConfig, SuggestionConfig};
use termguard_core::types::{MatchType, NegativeKeywordRule, SearchTermRecord};
use termguard_engine::{aggregate, match_terms, report, suggest};

fn rules() -> Vec<NegativeKeywordRule> {
    vec![
        NegativeKeywordRule::new("free", MatchType::Exact).unwrap(),
        NegativeKeywordRule::new("free shipping", MatchType::Phrase).unwrap(),
        NegativeKeywordRule::new("shipping free", MatchType::Broad).unwrap(),
    ]
}

fn terms() -> Vec<SearchTermRecord> {
    vec![
        SearchTermRecord::new("free").with_metrics(500, 0, 12.0, 0.0),
        SearchTermRecord::new("best free shipping deals").with_metrics(200, 3, 8.0, 0.0),
        SearchTermRecord::new("running shoes").with_metrics(1000, 40, 55.0, 4.0),
        SearchTermRecord::new("cheap knockoff shoes").with_metrics(300, 6, 14.0, 0.0),
        SearchTermRecord::new("cheap replica shoes").with_metrics(250, 4, 9.0, 0.0),
    ]
}

#[test]
fn full_pipeline_produces_consistent_outputs() {
    let rules = rules();
    let classified = match_terms(terms(), &rules);

    // Classification preserves input order and stamps every record.
    assert_eq!(classified.len(), 5);
    assert_eq!(classified[0].term, "free");
    assert!(classified.iter().all(|r| r.checked_at.is_some()));

    assert!(classified[0].excluded);
    assert!(classified[1].excluded);
    assert!(!classified[2].excluded);

    let candidates = suggest(&classified, &SuggestionConfig::default());
    assert!(candidates.iter().any(|c| c.text == "cheap"));
    for c in &candidates {
        assert!((0.0..=100.0).contains(&c.confidence_score));
    }

    let summary = aggregate(&classified, &candidates, &AnalyticsConfig::default());
    assert_eq!(summary.total_terms, 5);
    assert_eq!(summary.excluded_count + summary.remaining_count, 5);
    assert!((summary.cost_waste_prevented - 20.0).abs() < 1e-9);
    assert!(!summary.recommendations.is_empty());

    // The knockoff/replica terms remain and are still draining budget.
    assert!(summary
        .high_risk_terms
        .iter()
        .any(|t| t.term == "cheap knockoff shoes"));

    let review = report::review_records(&classified);
    assert_eq!(review.len(), summary.remaining_count as usize);
    assert!(review.iter().all(|r| !r.excluded));
}

#[test]
fn matching_is_deterministic_across_runs() {
    let rules = rules();
    let first = match_terms(terms(), &rules);
    let second = match_terms(terms(), &rules);

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.excluded, b.excluded);
        assert_eq!(a.exclusion_reason, b.exclusion_reason);
        assert_eq!(a.matched_keyword, b.matched_keyword);
        assert_eq!(a.matched_match_type, b.matched_match_type);
    }
}

#[test]
fn zero_click_terms_never_produce_undefined_values() {
    let rules = rules();
    let classified = match_terms(
        vec![SearchTermRecord::new("cheap widgets").with_metrics(100, 0, 5.0, 0.0)],
        &rules,
    );
    let candidates = suggest(&classified, &SuggestionConfig::default());
    let summary = aggregate(&classified, &candidates, &AnalyticsConfig::default());

    assert!(summary.quality_score.is_finite());
    assert!(summary.action_score.is_finite());
    for c in &candidates {
        assert!(c.confidence_score.is_finite());
    }
}
