//! Core types for the termguard filtering engine.
//!
//! This crate carries the data model, error enums, configuration, and
//! cancellation primitives shared by the algorithmic crates. It contains no
//! algorithmic code of its own.

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

pub use config::{AnalyticsConfig, BatchConfig, EngineConfig, SuggestionConfig};
pub use errors::{BatchError, RecordError, RuleError, UnitError};
pub use traits::cancellation::{Cancellable, CancellationToken};
pub use types::{
    AnalyticsSummary, CandidateSuggestion, HighRiskTerm, MatchType, NegativeKeywordRule, RuleRow,
    SearchTermRecord,
};
