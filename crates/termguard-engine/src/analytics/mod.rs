//! Analytics aggregator.
//!
//! Reduces one unit's classified records and ranked candidates into an
//! `AnalyticsSummary`. Pure and idempotent for fixed inputs.

mod recommendations;

use tracing::debug;

use termguard_core::config::AnalyticsConfig;
use termguard_core::errors::UnitError;
use termguard_core::traits::cancellation::CancellationToken;
use termguard_core::types::{AnalyticsSummary, CandidateSuggestion, HighRiskTerm, SearchTermRecord};

use crate::suggest::default_poor_performer;
use crate::suggest::scoring::SubScore;

use recommendations::RecommendationInputs;

/// Records between cooperative cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 256;

/// Reduce classified records and ranked candidates into a summary.
pub fn aggregate(
    records: &[SearchTermRecord],
    candidates: &[CandidateSuggestion],
    config: &AnalyticsConfig,
) -> AnalyticsSummary {
    // Without a deadline the reduction cannot fail.
    aggregate_cancellable(records, candidates, config, &CancellationToken::new())
        .expect("aggregation without a deadline is infallible")
}

/// Cancellable variant used by the batch orchestrator.
pub fn aggregate_cancellable(
    records: &[SearchTermRecord],
    candidates: &[CandidateSuggestion],
    config: &AnalyticsConfig,
    token: &CancellationToken,
) -> Result<AnalyticsSummary, UnitError> {
    let total_terms = records.len() as u64;
    let mut excluded_count = 0u64;
    let mut cost_waste_prevented = 0.0f64;
    let mut high_risk: Vec<HighRiskTerm> = Vec::new();

    for (i, record) in records.iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL == 0 {
            token.checkpoint()?;
        }
        if record.excluded {
            excluded_count += 1;
            // Conservative policy: only defined cost fields contribute. A
            // dataset with no cost column reports 0, never an estimate.
            if let Some(cost) = record.cost.filter(|c| c.is_finite()) {
                cost_waste_prevented += cost;
            }
        } else if default_poor_performer(record) {
            high_risk.push(HighRiskTerm {
                term: record.term.clone(),
                impressions: record.impressions.unwrap_or(0),
                clicks: record.clicks.unwrap_or(0),
                cost: record.cost_or_zero(),
            });
        }
    }

    let remaining_count = total_terms - excluded_count;

    high_risk.sort_by(|a, b| b.cost.total_cmp(&a.cost).then_with(|| a.term.cmp(&b.term)));
    high_risk.truncate(config.max_high_risk);

    let quality_score =
        100.0 * SubScore::from_ratio(remaining_count as f64, total_terms as f64).get();

    let excluded_fraction =
        SubScore::from_ratio(excluded_count as f64, total_terms as f64).get();
    let top_mean_confidence = mean_top_confidence(candidates, config.action_top_suggestions);
    let action_score = 100.0
        * SubScore::new(
            config.excluded_weight * excluded_fraction
                + config.confidence_weight * top_mean_confidence / 100.0,
        )
        .get();

    let inputs = RecommendationInputs {
        cost_waste_prevented,
        high_risk_count: high_risk.len(),
        excluded_fraction,
        top_confidence: candidates.first().map(|c| c.confidence_score).unwrap_or(0.0),
    };
    let recommendations = recommendations::recommendations(&inputs, config.max_recommendations);

    debug!(
        total_terms,
        excluded_count, remaining_count, quality_score, action_score, "aggregation complete"
    );

    Ok(AnalyticsSummary {
        total_terms,
        excluded_count,
        remaining_count,
        cost_waste_prevented,
        quality_score,
        action_score,
        high_risk_terms: high_risk,
        recommendations,
    })
}

/// Mean confidence of the top `n` ranked candidates, 0 when there are none.
fn mean_top_confidence(candidates: &[CandidateSuggestion], n: usize) -> f64 {
    let top = &candidates[..candidates.len().min(n)];
    if top.is_empty() {
        return 0.0;
    }
    top.iter().map(|c| c.confidence_score).sum::<f64>() / top.len() as f64
}
