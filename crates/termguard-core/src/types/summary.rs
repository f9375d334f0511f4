//! Analytics summary produced by the aggregator.

use serde::{Deserialize, Serialize};

/// Reduction of one unit's classified records and suggestions.
///
/// Invariant: `excluded_count + remaining_count == total_terms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_terms: u64,
    pub excluded_count: u64,
    pub remaining_count: u64,
    /// Summed cost of excluded records with a defined cost field; 0 when no
    /// record carries cost data.
    pub cost_waste_prevented: f64,
    /// Percentage of terms remaining after filtering, 0 when there are no terms.
    pub quality_score: f64,
    /// Bounded [0, 100] blend of excluded fraction and top-suggestion confidence.
    pub action_score: f64,
    /// Remaining poor-performing records, sorted by cost descending.
    pub high_risk_terms: Vec<HighRiskTerm>,
    /// Priority-ordered natural-language recommendations.
    pub recommendations: Vec<String>,
}

/// Projection of a remaining record that is still draining budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighRiskTerm {
    pub term: String,
    pub impressions: u64,
    pub clicks: u64,
    pub cost: f64,
}
