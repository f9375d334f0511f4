//! Negative keyword rules and match-type semantics.
//!
//! Rules are validated and normalized once, at load time. Rule order is
//! significant downstream: the matcher honors first-match-wins in input order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RuleError;

/// Matching semantics governing keyword-to-term comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Normalized term equals the normalized keyword.
    Exact,
    /// Keyword tokens occur as a contiguous subsequence of the term tokens.
    Phrase,
    /// Every keyword token appears somewhere among the term tokens.
    Broad,
}

impl MatchType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::Phrase => "PHRASE",
            Self::Broad => "BROAD",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchType {
    type Err = RuleError;

    /// Case-insensitive parse. Unrecognized values are rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EXACT" => Ok(Self::Exact),
            "PHRASE" => Ok(Self::Phrase),
            "BROAD" => Ok(Self::Broad),
            other => Err(RuleError::InvalidMatchType(other.to_string())),
        }
    }
}

/// A raw negative-keyword row as the loader hands it over, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRow {
    /// Keyword text, not yet normalized.
    pub keyword: String,
    /// Match-type column value, restricted to EXACT/PHRASE/BROAD (any case).
    pub match_type: String,
}

impl RuleRow {
    pub fn new(keyword: impl Into<String>, match_type: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            match_type: match_type.into(),
        }
    }
}

/// A validated negative keyword: normalized text, pre-split tokens, semantics.
///
/// Immutable once constructed. The original (pre-normalization) keyword text
/// is retained for exclusion-reason rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegativeKeywordRule {
    /// Normalized keyword text.
    pub keyword: String,
    /// Keyword tokens, split once at construction.
    pub tokens: Vec<String>,
    pub match_type: MatchType,
    /// Keyword text as supplied by the loader.
    pub original: String,
}

impl NegativeKeywordRule {
    /// Build a rule from already-typed parts. Errors on empty keyword text.
    pub fn new(keyword: &str, match_type: MatchType) -> Result<Self, RuleError> {
        let normalized = normalize(keyword);
        let tokens: Vec<String> = tokenize(&normalized).map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(RuleError::EmptyKeyword);
        }
        Ok(Self {
            keyword: normalized,
            tokens,
            match_type,
            original: keyword.trim().to_string(),
        })
    }

    /// Validate a raw loader row into a rule.
    pub fn parse(row: &RuleRow) -> Result<Self, RuleError> {
        let match_type = row.match_type.parse::<MatchType>()?;
        Self::new(&row.keyword, match_type)
    }
}

/// Normalize a search term or negative keyword: lowercase, trim, strip one
/// level of surrounding quotes or brackets, collapse internal whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let inner = strip_wrapping(&lowered, '"', '"')
        .or_else(|| strip_wrapping(&lowered, '\'', '\''))
        .or_else(|| strip_wrapping(&lowered, '[', ']'))
        .unwrap_or(&lowered);
    inner.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

fn strip_wrapping(s: &str, open: char, close: char) -> Option<&str> {
    if s.len() > 1 && s.starts_with(open) && s.ends_with(close) {
        Some(&s[open.len_utf8()..s.len() - close.len_utf8()])
    } else {
        None
    }
}
