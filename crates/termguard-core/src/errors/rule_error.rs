//! Negative-keyword rule validation errors.

/// Errors raised while validating a negative-keyword rule at load time.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    /// Match-type column value outside {EXACT, PHRASE, BROAD}.
    #[error("Invalid match type: {0}")]
    InvalidMatchType(String),

    /// Keyword text is empty after normalization.
    #[error("Negative keyword text is empty")]
    EmptyKeyword,
}
