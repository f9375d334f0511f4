//! Candidate keyword extraction from poor-performing terms.
//!
//! Candidates are single tokens plus short multi-token windows (n-grams) of
//! the normalized term. Each distinct candidate counts once per term.

use rustc_hash::FxHashSet;

use termguard_core::config::SuggestionConfig;

/// Distinct candidate grams for one term's token list.
///
/// Single tokens must pass the stop/length filter on their own; a multi-token
/// window is kept when at least one of its tokens passes it.
pub fn candidate_grams(tokens: &[&str], config: &SuggestionConfig) -> FxHashSet<String> {
    let mut grams = FxHashSet::default();

    for token in tokens {
        if token_is_significant(token, config) {
            grams.insert((*token).to_string());
        }
    }

    for n in 2..=config.max_ngram {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            if window.iter().any(|t| token_is_significant(t, config)) {
                grams.insert(window.join(" "));
            }
        }
    }

    grams
}

fn token_is_significant(token: &str, config: &SuggestionConfig) -> bool {
    token.chars().count() >= config.min_token_len
        && !config.stop_tokens.iter().any(|s| s == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(tokens: &[&str]) -> FxHashSet<String> {
        candidate_grams(tokens, &SuggestionConfig::default())
    }

    #[test]
    fn extracts_unigrams_and_windows() {
        let grams = grams(&["cheap", "running", "shoes"]);
        assert!(grams.contains("cheap"));
        assert!(grams.contains("running"));
        assert!(grams.contains("cheap running"));
        assert!(grams.contains("running shoes"));
        assert!(grams.contains("cheap running shoes"));
    }

    #[test]
    fn short_and_stop_tokens_are_not_unigram_candidates() {
        let grams = grams(&["tv", "for", "free"]);
        assert!(!grams.contains("tv"));
        assert!(!grams.contains("for"));
        assert!(grams.contains("free"));
    }

    #[test]
    fn window_survives_when_one_token_is_significant() {
        let grams = grams(&["for", "free"]);
        assert!(grams.contains("for free"));
    }

    #[test]
    fn all_stop_window_is_discarded() {
        let grams = grams(&["for", "the"]);
        assert!(grams.is_empty());
    }

    #[test]
    fn duplicate_grams_count_once_per_term() {
        let grams = grams(&["free", "stuff", "free"]);
        assert_eq!(
            grams.iter().filter(|g| g.as_str() == "free").count(),
            1
        );
    }
}
