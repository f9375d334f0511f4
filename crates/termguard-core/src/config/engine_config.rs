//! Engine configuration, TOML-loadable with per-field defaults.
//!
//! Ambient concerns of the surrounding wrapper (rate limits, file retention,
//! auth) deliberately have no surface here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration document covering all pipeline stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub suggestion: SuggestionConfig,
    pub analytics: AnalyticsConfig,
    pub batch: BatchConfig,
}

/// Configuration for the auto-negative suggestion engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum suggestions returned after ranking. Default: 50.
    pub max_suggestions: usize,
    /// Largest multi-token candidate window. Default: 3.
    pub max_ngram: usize,
    /// Minimum length for a single-token candidate. Default: 3.
    pub min_token_len: usize,
    /// Tokens that never form a single-token candidate on their own.
    pub stop_tokens: Vec<String>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 50,
            max_ngram: 3,
            min_token_len: 3,
            stop_tokens: default_stop_tokens(),
        }
    }
}

fn default_stop_tokens() -> Vec<String> {
    ["the", "a", "an", "and", "or", "for", "of", "to", "in", "on", "at", "is", "with"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Configuration for the analytics aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Cap on the high-risk term list. Default: 10.
    pub max_high_risk: usize,
    /// Cap on returned recommendations. Default: 3.
    pub max_recommendations: usize,
    /// Number of top suggestions whose mean confidence feeds the action score.
    /// Default: 5.
    pub action_top_suggestions: usize,
    /// Action-score weight of the excluded fraction. Default: 0.6.
    pub excluded_weight: f64,
    /// Action-score weight of the mean top-suggestion confidence. Default: 0.4.
    pub confidence_weight: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_high_risk: 10,
            max_recommendations: 3,
            action_top_suggestions: 5,
            excluded_weight: 0.6,
            confidence_weight: 0.4,
        }
    }
}

/// Configuration for the batch orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker pool size. Default: 4.
    pub parallelism: usize,
    /// Per-unit wall-clock budget in milliseconds. Default: 300 000.
    pub unit_timeout_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallelism: 4,
            unit_timeout_ms: 300_000,
        }
    }
}

impl BatchConfig {
    /// Per-unit wall-clock budget.
    pub fn unit_timeout(&self) -> Duration {
        Duration::from_millis(self.unit_timeout_ms)
    }
}
