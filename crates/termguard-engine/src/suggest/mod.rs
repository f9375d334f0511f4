//! Auto-negative suggestion engine.
//!
//! Mines poor-performing classified records for new negative-keyword
//! candidates and ranks them by a bounded confidence score.

pub mod extract;
pub mod scoring;

use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use termguard_core::config::SuggestionConfig;
use termguard_core::errors::UnitError;
use termguard_core::traits::cancellation::CancellationToken;
use termguard_core::types::rule::{normalize, tokenize};
use termguard_core::types::{CandidateSuggestion, SearchTermRecord};

use scoring::SubScore;

/// Records between cooperative cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 256;

/// The default poor-performer predicate: spent money, converted nothing.
/// Missing cost or conversions count as 0.
pub fn default_poor_performer(record: &SearchTermRecord) -> bool {
    record.cost_or_zero() > 0.0 && record.conversions_or_zero() == 0.0
}

/// Per-candidate running tally, exclusively owned by the unit building it.
#[derive(Default)]
struct Tally {
    occurrences: u64,
    cost: f64,
    zero_conversions: u64,
    supporting_terms: FxHashSet<String>,
}

/// Rank negative-keyword candidates using the default poor-performer predicate.
pub fn suggest(
    records: &[SearchTermRecord],
    config: &SuggestionConfig,
) -> Vec<CandidateSuggestion> {
    suggest_with(records, config, default_poor_performer)
}

/// Rank negative-keyword candidates using a caller-defined predicate.
pub fn suggest_with(
    records: &[SearchTermRecord],
    config: &SuggestionConfig,
    poor_performer: impl Fn(&SearchTermRecord) -> bool,
) -> Vec<CandidateSuggestion> {
    // Without a deadline the pipeline cannot fail.
    suggest_cancellable(records, config, poor_performer, &CancellationToken::new())
        .unwrap_or_default()
}

/// Cancellable variant used by the batch orchestrator; checks the token
/// between record chunks and between candidates.
pub fn suggest_cancellable(
    records: &[SearchTermRecord],
    config: &SuggestionConfig,
    poor_performer: impl Fn(&SearchTermRecord) -> bool,
    token: &CancellationToken,
) -> Result<Vec<CandidateSuggestion>, UnitError> {
    let poor: Vec<&SearchTermRecord> =
        records.iter().filter(|r| poor_performer(r)).collect();
    let total_poor = poor.len();
    if total_poor == 0 {
        return Ok(Vec::new());
    }

    let total_cost_overall: f64 = poor.iter().map(|r| r.cost_or_zero()).sum();

    let mut tallies: FxHashMap<String, Tally> = FxHashMap::default();
    for (i, record) in poor.iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL == 0 {
            token.checkpoint()?;
        }
        let normalized = normalize(&record.term);
        let tokens: Vec<&str> = tokenize(&normalized).collect();
        let cost = record.cost_or_zero();
        let zero_conversion = record.conversions_or_zero() == 0.0;

        for gram in extract::candidate_grams(&tokens, config) {
            let tally = tallies.entry(gram).or_default();
            tally.occurrences += 1;
            tally.cost += cost;
            if zero_conversion {
                tally.zero_conversions += 1;
            }
            tally.supporting_terms.insert(normalized.clone());
        }
    }

    let mut candidates = Vec::with_capacity(tallies.len());
    for (i, (text, tally)) in tallies.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL == 0 {
            token.checkpoint()?;
        }
        let occurrence = SubScore::from_ratio(tally.occurrences as f64, total_poor as f64);
        let cost_impact = SubScore::from_ratio(tally.cost, total_cost_overall);
        let zero_conversion =
            SubScore::from_ratio(tally.zero_conversions as f64, tally.occurrences as f64);

        candidates.push(CandidateSuggestion {
            text,
            occurrence_count: tally.occurrences,
            total_cost_waste: tally.cost,
            confidence_score: scoring::confidence(occurrence, cost_impact, zero_conversion),
            supporting_term_count: tally.supporting_terms.len() as u64,
        });
    }

    candidates.sort_by(rank_order);
    candidates.truncate(config.max_suggestions);

    debug!(
        poor_performers = total_poor,
        candidates = candidates.len(),
        "suggestion mining complete"
    );
    Ok(candidates)
}

/// Confidence descending, then occurrence count descending, then text ascending.
fn rank_order(a: &CandidateSuggestion, b: &CandidateSuggestion) -> Ordering {
    b.confidence_score
        .total_cmp(&a.confidence_score)
        .then_with(|| b.occurrence_count.cmp(&a.occurrence_count))
        .then_with(|| a.text.cmp(&b.text))
}
