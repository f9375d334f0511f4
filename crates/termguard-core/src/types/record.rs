//! Search term records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rule::MatchType;

/// One row of a search-term report, created by the loader, classified exactly
/// once by the matcher, and read-only thereafter.
///
/// Numeric performance fields are nullable: a missing value is repaired
/// locally with a defined default (0) wherever it is consumed, never treated
/// as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTermRecord {
    /// Raw search term text. Missing/non-string loader values become "".
    pub term: String,
    pub impressions: Option<u64>,
    pub clicks: Option<u64>,
    pub cost: Option<f64>,
    pub conversions: Option<f64>,
    /// Passthrough columns (campaign, ad group, ...) the loader carries.
    #[serde(default)]
    pub passthrough: BTreeMap<String, String>,

    // Classification fields, populated by the matcher.
    pub excluded: bool,
    pub exclusion_reason: Option<String>,
    pub matched_keyword: Option<String>,
    pub matched_match_type: Option<MatchType>,
    pub checked_at: Option<DateTime<Utc>>,
}

impl SearchTermRecord {
    /// Create an unclassified record with no performance data.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            impressions: None,
            clicks: None,
            cost: None,
            conversions: None,
            passthrough: BTreeMap::new(),
            excluded: false,
            exclusion_reason: None,
            matched_keyword: None,
            matched_match_type: None,
            checked_at: None,
        }
    }

    pub fn with_metrics(
        mut self,
        impressions: u64,
        clicks: u64,
        cost: f64,
        conversions: f64,
    ) -> Self {
        self.impressions = Some(impressions);
        self.clicks = Some(clicks);
        self.cost = Some(cost);
        self.conversions = Some(conversions);
        self
    }

    /// Cost with the missing-field default applied.
    pub fn cost_or_zero(&self) -> f64 {
        self.cost.filter(|c| c.is_finite()).unwrap_or(0.0)
    }

    /// Conversions with the missing-field default applied.
    pub fn conversions_or_zero(&self) -> f64 {
        self.conversions.filter(|c| c.is_finite()).unwrap_or(0.0)
    }

    /// Audit-facing rendering of the exclusion reason.
    ///
    /// `exclusion_reason` is `Some` iff the record is excluded; the audit
    /// record set still shows a definite string for every row.
    pub fn exclusion_reason_text(&self) -> &str {
        self.exclusion_reason
            .as_deref()
            .unwrap_or("Not matched by any negative")
    }
}
