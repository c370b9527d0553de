//! Career scoring: a pluggable, trait-based scorer that measures a user's
//! assessment responses against a career path.
//!
//! Default: `HeuristicScorer` (keyword/category heuristic, deterministic).
//! `AppState` holds an `Arc<dyn CareerScorer>` constructed once at startup.

pub mod categories;
pub mod engine;
pub mod reasoning;
pub mod weights;

use crate::assessment::AssessmentResponse;
use crate::career::CareerPath;
use engine::{score_breakdown, ResponseProfile};
use weights::ScoringWeights;

/// The scorer trait. Implement this to swap scoring backends without
/// touching the aggregator or handlers.
pub trait CareerScorer: Send + Sync {
    /// Confidence in [0, 1] that `career_path` fits the user behind `responses`.
    fn score(&self, responses: &[AssessmentResponse], career_path: &CareerPath) -> f64;

    /// Human-readable justification for `score`. Never fails.
    fn explain(&self, responses: &[AssessmentResponse], career_path: &CareerPath, score: f64)
        -> String;

    /// Label for logs and API responses.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    weights: ScoringWeights,
}

impl HeuristicScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl CareerScorer for HeuristicScorer {
    fn score(&self, responses: &[AssessmentResponse], career_path: &CareerPath) -> f64 {
        let profile = ResponseProfile::new(responses);
        score_breakdown(&profile, career_path, &self.weights).total
    }

    fn explain(
        &self,
        responses: &[AssessmentResponse],
        career_path: &CareerPath,
        score: f64,
    ) -> String {
        reasoning::explain(&ResponseProfile::new(responses), career_path, score)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::QuestionType;
    use crate::career::requirements::{EducationRequirements, RequiredSkills};

    #[test]
    fn test_custom_weights_change_the_score() {
        let responses = [AssessmentResponse {
            question_id: 3,
            question_text: "Which of these activities interests you the most?".to_string(),
            question_type: QuestionType::Interests,
            weight: 1.0,
            response_text: "Creative Arts".to_string(),
        }];
        let path = CareerPath {
            id: 4,
            title: "UX/UI Designer".to_string(),
            description: String::new(),
            required_skills: RequiredSkills::Flat(vec!["Prototyping".to_string()]),
            education_requirements: EducationRequirements::Unspecified,
            average_salary: String::new(),
            job_outlook: String::new(),
        };

        let default_score = HeuristicScorer::default().score(&responses, &path);
        assert!((default_score - 0.3).abs() < 1e-9);

        let interest_heavy = HeuristicScorer::new(ScoringWeights {
            skills: 0.0,
            interests: 1.0,
            personality: 0.0,
        });
        assert_eq!(interest_heavy.score(&responses, &path), 1.0);
        assert_eq!(interest_heavy.backend(), "heuristic");
    }
}
