//! Tests for the termguard configuration system.

use std::time::Duration;

use termguard_core::config::EngineConfig;

#[test]
fn empty_document_yields_defaults() {
    let config: EngineConfig = toml::from_str("").unwrap();
    assert_eq!(config.suggestion.max_suggestions, 50);
    assert_eq!(config.suggestion.max_ngram, 3);
    assert_eq!(config.analytics.max_high_risk, 10);
    assert_eq!(config.batch.parallelism, 4);
    assert_eq!(config.batch.unit_timeout(), Duration::from_secs(300));
}

#[test]
fn partial_document_overrides_only_named_fields() {
    let config: EngineConfig = toml::from_str(
        r#"
[suggestion]
max_suggestions = 10

[batch]
parallelism = 2
unit_timeout_ms = 1500
"#,
    )
    .unwrap();

    assert_eq!(config.suggestion.max_suggestions, 10);
    // Unnamed fields keep their defaults.
    assert_eq!(config.suggestion.min_token_len, 3);
    assert!(config.suggestion.stop_tokens.contains(&"the".to_string()));
    assert_eq!(config.batch.parallelism, 2);
    assert_eq!(config.batch.unit_timeout(), Duration::from_millis(1500));
    assert_eq!(config.analytics.max_recommendations, 3);
}

#[test]
fn action_score_weights_default_to_fixed_blend() {
    let config = EngineConfig::default();
    assert!((config.analytics.excluded_weight - 0.6).abs() < 1e-9);
    assert!((config.analytics.confidence_weight - 0.4).abs() < 1e-9);
}
