//! Negative keyword matcher.
//!
//! Classifies each search-term record against an ordered rule set. Rules are
//! evaluated strictly in input order and the first satisfied rule wins, so
//! classification is deterministic for a given (terms, rules) input. Each
//! term is normalized and tokenized exactly once; rule keywords were already
//! normalized at construction.

use chrono::Utc;
use rustc_hash::FxHashSet;
use tracing::debug;

use termguard_core::errors::UnitError;
use termguard_core::traits::cancellation::CancellationToken;
use termguard_core::types::rule::{normalize, tokenize, MatchType, NegativeKeywordRule};
use termguard_core::types::SearchTermRecord;

/// Records between cooperative cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 256;

/// Matcher over an ordered, read-only rule set.
///
/// The rule slice is shared freely across workers; every classified record is
/// exclusively owned by the unit that created it.
pub struct NegativeMatcher<'a> {
    rules: &'a [NegativeKeywordRule],
}

impl<'a> NegativeMatcher<'a> {
    pub fn new(rules: &'a [NegativeKeywordRule]) -> Self {
        Self { rules }
    }

    /// Classify every record in place, stamping `checked_at`.
    pub fn classify_all(&self, records: &mut [SearchTermRecord]) {
        for record in records.iter_mut() {
            self.classify_record(record);
        }
        debug!(
            records = records.len(),
            rules = self.rules.len(),
            "classification complete"
        );
    }

    /// Classify with cooperative cancellation checks between record chunks.
    pub fn classify_all_cancellable(
        &self,
        records: &mut [SearchTermRecord],
        token: &CancellationToken,
    ) -> Result<(), UnitError> {
        for (i, record) in records.iter_mut().enumerate() {
            if i % CANCEL_CHECK_INTERVAL == 0 {
                token.checkpoint()?;
            }
            self.classify_record(record);
        }
        Ok(())
    }

    fn classify_record(&self, record: &mut SearchTermRecord) {
        let normalized = normalize(&record.term);
        let tokens: Vec<&str> = tokenize(&normalized).collect();

        if let Some(rule) = self.find_match(&normalized, &tokens) {
            record.excluded = true;
            record.exclusion_reason = Some(format!(
                "Excluded by {} negative: {}",
                rule.match_type, rule.original
            ));
            record.matched_keyword = Some(rule.keyword.clone());
            record.matched_match_type = Some(rule.match_type);
        } else {
            record.excluded = false;
            record.exclusion_reason = None;
            record.matched_keyword = None;
            record.matched_match_type = None;
        }
        record.checked_at = Some(Utc::now());
    }

    /// First rule in input order satisfied by the term, if any.
    fn find_match(
        &self,
        normalized: &str,
        tokens: &[&str],
    ) -> Option<&'a NegativeKeywordRule> {
        if tokens.is_empty() {
            return None;
        }

        // Built lazily: only terms checked against at least one broad rule
        // pay for the set.
        let mut token_set: Option<FxHashSet<&str>> = None;

        self.rules.iter().find(|rule| match rule.match_type {
            MatchType::Exact => normalized == rule.keyword,
            MatchType::Phrase => is_phrase_match(tokens, &rule.tokens),
            MatchType::Broad => {
                let set =
                    token_set.get_or_insert_with(|| tokens.iter().copied().collect());
                is_broad_match(set, &rule.tokens)
            }
        })
    }
}

/// Contiguous subsequence check over token sequences.
fn is_phrase_match(term_tokens: &[&str], keyword_tokens: &[String]) -> bool {
    let k = keyword_tokens.len();
    if k == 0 || k > term_tokens.len() {
        return false;
    }
    term_tokens
        .windows(k)
        .any(|window| window.iter().zip(keyword_tokens).all(|(t, n)| *t == n.as_str()))
}

/// Order-insensitive containment: every keyword token appears among the term
/// tokens. Duplicate keyword tokens are allowed and collapse to one lookup.
fn is_broad_match(term_tokens: &FxHashSet<&str>, keyword_tokens: &[String]) -> bool {
    keyword_tokens.iter().all(|n| term_tokens.contains(n.as_str()))
}
