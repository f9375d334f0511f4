//! Weighted confidence scoring with range-constrained sub-scores.
//!
//! Each sub-score is clamped to [0, 1] at construction, before weighting, so
//! the weighted sum is bounded to [0, 100] structurally rather than by
//! convention.

/// Weight of the occurrence-frequency sub-score.
pub const OCCURRENCE_WEIGHT: f64 = 0.30;
/// Weight of the cost-impact sub-score.
pub const COST_IMPACT_WEIGHT: f64 = 0.40;
/// Weight of the zero-conversion-rate sub-score.
pub const ZERO_CONVERSION_WEIGHT: f64 = 0.30;

/// A sub-score constrained to [0, 1].
///
/// The inner value is only reachable through clamping constructors; NaN
/// collapses to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScore(f64);

impl SubScore {
    /// Clamp an arbitrary value into [0, 1]. NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Guarded ratio: a non-positive or non-finite denominator yields 0
    /// instead of NaN or infinity.
    pub fn from_ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 && denominator.is_finite() {
            Self::new(numerator / denominator)
        } else {
            Self(0.0)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Combine the three sub-scores into a confidence score in [0, 100].
pub fn confidence(occurrence: SubScore, cost_impact: SubScore, zero_conversion: SubScore) -> f64 {
    100.0
        * (OCCURRENCE_WEIGHT * occurrence.get()
            + COST_IMPACT_WEIGHT * cost_impact.get()
            + ZERO_CONVERSION_WEIGHT * zero_conversion.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_score_clamps_both_ends() {
        assert_eq!(SubScore::new(-0.5).get(), 0.0);
        assert_eq!(SubScore::new(1.5).get(), 1.0);
        assert_eq!(SubScore::new(0.25).get(), 0.25);
    }

    #[test]
    fn nan_collapses_to_zero() {
        assert_eq!(SubScore::new(f64::NAN).get(), 0.0);
    }

    #[test]
    fn zero_denominator_yields_zero_not_infinity() {
        assert_eq!(SubScore::from_ratio(5.0, 0.0).get(), 0.0);
        assert_eq!(SubScore::from_ratio(0.0, 0.0).get(), 0.0);
    }

    #[test]
    fn ratio_above_one_is_clamped_before_weighting() {
        // Unclamped, a ratio of 3.0 would contribute 3x its weight.
        let inflated = SubScore::from_ratio(30.0, 10.0);
        assert_eq!(inflated.get(), 1.0);
    }

    #[test]
    fn confidence_is_bounded() {
        let max = confidence(SubScore::new(2.0), SubScore::new(2.0), SubScore::new(2.0));
        assert!((max - 100.0).abs() < 1e-9);
        let min = confidence(SubScore::new(-1.0), SubScore::new(-1.0), SubScore::new(-1.0));
        assert_eq!(min, 0.0);
    }

    #[test]
    fn weights_sum_to_one() {
        let total = OCCURRENCE_WEIGHT + COST_IMPACT_WEIGHT + ZERO_CONVERSION_WEIGHT;
        assert!((total - 1.0).abs() < 1e-9);
    }
}
