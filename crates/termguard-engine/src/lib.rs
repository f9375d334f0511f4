//! Termguard filtering engine.
//!
//! The pipeline is strictly linear: loader → matcher → suggestion engine →
//! aggregator → exporter, composed as pure transformations over explicit
//! inputs, plus one bounded worker pool for batching. Loading and rendering
//! are external collaborators; this crate consumes validated in-memory
//! records and produces in-memory results.

pub mod analytics;
pub mod batch;
pub mod matcher;
pub mod report;
pub mod suggest;

pub use analytics::aggregate;
pub use batch::{run_batch, BatchResult, BatchStatus, BatchUnit, UnitOutcome, UnitReport};
pub use matcher::NegativeMatcher;
pub use suggest::{suggest, suggest_with};

use termguard_core::types::{NegativeKeywordRule, SearchTermRecord};

/// Classify every term against the ordered rule set.
///
/// Returns the same records with their classification fields populated;
/// output order equals input order.
pub fn match_terms(
    mut terms: Vec<SearchTermRecord>,
    rules: &[NegativeKeywordRule],
) -> Vec<SearchTermRecord> {
    NegativeMatcher::new(rules).classify_all(&mut terms);
    terms
}
