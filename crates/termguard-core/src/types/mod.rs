//! Data model for the filtering pipeline.

pub mod record;
pub mod rule;
pub mod suggestion;
pub mod summary;

pub use record::SearchTermRecord;
pub use rule::{MatchType, NegativeKeywordRule, RuleRow};
pub use suggestion::CandidateSuggestion;
pub use summary::{AnalyticsSummary, HighRiskTerm};
