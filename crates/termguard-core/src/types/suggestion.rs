//! Negative-keyword candidate suggestions.

use serde::{Deserialize, Serialize};

/// A mined negative-keyword candidate with its bounded confidence score.
///
/// Produced by the suggestion engine, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSuggestion {
    /// Candidate keyword text (single token or short multi-token window).
    pub text: String,
    /// Number of poor-performer records containing the candidate.
    pub occurrence_count: u64,
    /// Summed cost of the poor performers containing the candidate.
    pub total_cost_waste: f64,
    /// Confidence that the candidate should be added as a negative, in [0, 100].
    pub confidence_score: f64,
    /// Distinct poor-performer term texts containing the candidate.
    pub supporting_term_count: u64,
}
