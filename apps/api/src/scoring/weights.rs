use serde::{Deserialize, Serialize};

/// Component weights for the final confidence score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub interests: f64,
    pub personality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            interests: 0.3,
            personality: 0.3,
        }
    }
}

/// Combined confidence: 0.4*skills + 0.3*interests + 0.3*personality, clamped to [0, 1].
pub fn compute_combined_score(
    skills: f64,
    interests: f64,
    personality: f64,
    weights: &ScoringWeights,
) -> f64 {
    let combined =
        weights.skills * skills + weights.interests * interests + weights.personality * personality;
    if combined.is_nan() {
        return 0.0;
    }
    combined.clamp(0.0, 1.0)
}
