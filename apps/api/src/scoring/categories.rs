//! Fixed keyword tables for interest categories and personality traits, and
//! the 0–100 category scores derived from a user's responses.

use std::collections::BTreeMap;

use crate::assessment::{AssessmentResponse, QuestionType};

/// Category name → score on a 0–100 scale. Only categories with evidence appear.
pub type CategoryScores = BTreeMap<&'static str, f64>;

pub type KeywordTable = &'static [(&'static str, &'static [&'static str])];

/// Interest categories, checked in order. Also used to classify career titles,
/// so `healthcare` must precede `business` ("Healthcare Administrator").
pub const INTEREST_CATEGORIES: KeywordTable = &[
    (
        "technology",
        &[
            "technology",
            "software",
            "computer",
            "programming",
            "developer",
            "engineer",
            "data",
            "laboratory",
        ],
    ),
    (
        "healthcare",
        &["health", "medical", "patient", "clinical", "nurs", "helping people"],
    ),
    (
        "business",
        &[
            "business",
            "finance",
            "financial",
            "management",
            "manager",
            "administrat",
            "analyst",
            "marketing",
            "office",
        ],
    ),
    ("creative", &["creative", "design", "arts", "studio", "artist", "writer"]),
];

pub const PERSONALITY_TRAITS: KeywordTable = &[
    ("composure", &["calm", "focused", "composed"]),
    ("adaptability", &["reorganize", "flexible", "adapt", "mixed"]),
    ("collaboration", &["team", "collaborat", "support", "cooperat"]),
    ("persistence", &["work through", "persist", "determined"]),
    ("independence", &["independent", "self"]),
    ("leadership", &["lead", "delegat"]),
];

/// Trim + lowercase; the only normalisation applied before substring tests.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Scores each table entry by the share of question weight (over responses of
/// `question_type`) whose answer mentions one of its keywords.
pub fn category_scores(
    responses: &[AssessmentResponse],
    question_type: QuestionType,
    table: KeywordTable,
) -> CategoryScores {
    let answers: Vec<(String, f64)> = responses
        .iter()
        .filter(|r| r.question_type == question_type)
        .map(|r| (normalize(&r.response_text), r.weight))
        .filter(|(text, _)| !text.is_empty())
        .collect();

    let total_weight: f64 = answers.iter().map(|(_, w)| w).sum();
    let mut scores = CategoryScores::new();
    if total_weight <= 0.0 {
        return scores;
    }

    for (category, keywords) in table {
        let matched: f64 = answers
            .iter()
            .filter(|(text, _)| keywords.iter().any(|kw| text.contains(kw)))
            .map(|(_, w)| w)
            .sum();
        if matched > 0.0 {
            scores.insert(*category, (matched / total_weight * 100.0).clamp(0.0, 100.0));
        }
    }
    scores
}

pub fn interest_scores(responses: &[AssessmentResponse]) -> CategoryScores {
    category_scores(responses, QuestionType::Interests, INTEREST_CATEGORIES)
}

pub fn personality_scores(responses: &[AssessmentResponse]) -> CategoryScores {
    category_scores(responses, QuestionType::Personality, PERSONALITY_TRAITS)
}

/// The first interest category whose keyword appears in the career title.
pub fn career_category(title: &str) -> Option<&'static str> {
    let title = normalize(title);
    INTEREST_CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| title.contains(kw)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(question_type: QuestionType, text: &str, weight: f64) -> AssessmentResponse {
        AssessmentResponse {
            question_id: 0,
            question_text: String::new(),
            question_type,
            weight,
            response_text: text.to_string(),
        }
    }

    #[test]
    fn test_career_category_from_title() {
        assert_eq!(career_category("Software Developer"), Some("technology"));
        assert_eq!(career_category("Data Scientist"), Some("technology"));
        assert_eq!(career_category("Healthcare Administrator"), Some("healthcare"));
        assert_eq!(career_category("UX/UI Designer"), Some("creative"));
        assert_eq!(career_category("Business Analyst"), Some("business"));
        assert_eq!(career_category("Carpenter"), None);
    }

    #[test]
    fn test_single_interest_answer_scores_100() {
        let scores = interest_scores(&[response(
            QuestionType::Interests,
            "Working with Technology",
            1.0,
        )]);
        assert_eq!(scores.get("technology"), Some(&100.0));
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_interest_scores_share_weight() {
        let scores = interest_scores(&[
            response(QuestionType::Interests, "Working with Technology", 1.0),
            response(QuestionType::Interests, "Office Setting", 3.0),
            // other question types never count
            response(QuestionType::Skills, "Creative Arts", 1.0),
        ]);
        assert_eq!(scores.get("technology"), Some(&25.0));
        assert_eq!(scores.get("business"), Some(&75.0));
        assert!(scores.get("creative").is_none());
    }

    #[test]
    fn test_personality_scores_cover_seeded_options() {
        for option in [
            "Stay Calm and Focused",
            "Take a Break and Reorganize",
            "Seek Support",
            "Work Through It",
            "Independent",
            "Team Collaboration",
            "Mixed",
            "Leadership Role",
        ] {
            let scores = personality_scores(&[response(QuestionType::Personality, option, 1.0)]);
            assert!(!scores.is_empty(), "no trait for option {option}");
        }
    }

    #[test]
    fn test_zero_weight_answers_produce_no_scores() {
        let scores = personality_scores(&[response(QuestionType::Personality, "Independent", 0.0)]);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_blank_answers_are_ignored() {
        let scores = interest_scores(&[
            response(QuestionType::Interests, "  ", 1.0),
            response(QuestionType::Interests, "Creative Studio", 1.0),
        ]);
        assert_eq!(scores.get("creative"), Some(&100.0));
    }
}
