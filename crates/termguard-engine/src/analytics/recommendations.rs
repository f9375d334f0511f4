//! Static threshold-to-message recommendation table.
//!
//! Rules are evaluated in priority order; the first N that fire are returned.
//! When none fire, the well-optimized fallback is the sole recommendation.

/// Inputs the rule table is evaluated against.
pub(crate) struct RecommendationInputs {
    pub cost_waste_prevented: f64,
    pub high_risk_count: usize,
    pub excluded_fraction: f64,
    /// Confidence of the top-ranked suggestion, 0 when there are none.
    pub top_confidence: f64,
}

struct RecommendationRule {
    applies: fn(&RecommendationInputs) -> bool,
    render: fn(&RecommendationInputs) -> String,
}

static RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: |i| i.cost_waste_prevented > 1000.0,
        render: |i| {
            format!(
                "URGENT: ${:.0} in preventable spend identified",
                i.cost_waste_prevented
            )
        },
    },
    RecommendationRule {
        applies: |i| i.high_risk_count > 5,
        render: |i| {
            format!(
                "{} terms actively draining budget - implement negatives immediately",
                i.high_risk_count
            )
        },
    },
    RecommendationRule {
        applies: |i| i.excluded_fraction > 0.30,
        render: |_| {
            "Aggressive negative keyword implementation will significantly improve ROI"
                .to_string()
        },
    },
    RecommendationRule {
        applies: |i| i.top_confidence >= 80.0,
        render: |_| {
            "High-confidence negative candidates found - review the suggestions list"
                .to_string()
        },
    },
];

/// Evaluate the table, returning at most `max` messages in priority order.
pub(crate) fn recommendations(inputs: &RecommendationInputs, max: usize) -> Vec<String> {
    let mut messages: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(inputs))
        .take(max)
        .map(|rule| (rule.render)(inputs))
        .collect();

    if messages.is_empty() && max > 0 {
        messages.push("Continue current strategy - campaigns are well-optimized".to_string());
    }
    messages
}
