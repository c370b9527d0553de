// Assessment questions, user responses and submission handling.

pub mod handlers;
pub mod submission;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::assessment::{QuestionRow, ResponseRow};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    Skills,
    Interests,
    Personality,
    Situation,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Skills => "SKILLS",
            QuestionType::Interests => "INTERESTS",
            QuestionType::Personality => "PERSONALITY",
            QuestionType::Situation => "SITUATION",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SKILLS" => Ok(QuestionType::Skills),
            "INTERESTS" => Ok(QuestionType::Interests),
            "PERSONALITY" => Ok(QuestionType::Personality),
            "SITUATION" => Ok(QuestionType::Situation),
            other => Err(format!("unknown question type '{other}'")),
        }
    }
}

/// An assessment question. Immutable once seeded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub weight: f64,
}

impl Question {
    /// Returns `None` (and logs) for rows whose type is not recognised.
    pub fn from_row(row: QuestionRow) -> Option<Self> {
        let question_type = match row.question_type.parse::<QuestionType>() {
            Ok(t) => t,
            Err(e) => {
                warn!("Skipping question {}: {e}", row.id);
                return None;
            }
        };
        let options = row
            .options
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|o| o.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Some(Question {
            id: row.id,
            text: row.question_text,
            question_type,
            options,
            weight: sanitize_weight(row.weight),
        })
    }
}

/// One answered question, carrying the question fields scoring reads.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssessmentResponse {
    pub question_id: i32,
    pub question_text: String,
    pub question_type: QuestionType,
    pub weight: f64,
    pub response_text: String,
}

impl AssessmentResponse {
    pub fn new(question: &Question, response_text: impl Into<String>) -> Self {
        AssessmentResponse {
            question_id: question.id,
            question_text: question.text.clone(),
            question_type: question.question_type,
            weight: question.weight,
            response_text: response_text.into(),
        }
    }

    pub fn from_row(row: ResponseRow) -> Option<Self> {
        let question_type = match row.question_type.parse::<QuestionType>() {
            Ok(t) => t,
            Err(e) => {
                warn!("Skipping response {} for question {}: {e}", row.id, row.question_id);
                return None;
            }
        };
        Some(AssessmentResponse {
            question_id: row.question_id,
            question_text: row.question_text,
            question_type,
            weight: sanitize_weight(row.weight),
            response_text: row.response_text,
        })
    }
}

/// Lifecycle of a user's assessment. Every submission re-enters from the top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    NoResponses,
    ResponsesSaved,
    RecommendationsComputed,
}

impl AssessmentStage {
    pub fn from_counts(responses: usize, recommendations: usize) -> Self {
        match (responses, recommendations) {
            (0, _) => AssessmentStage::NoResponses,
            (_, 0) => AssessmentStage::ResponsesSaved,
            _ => AssessmentStage::RecommendationsComputed,
        }
    }
}

/// Question weights default to 1.0; negative or non-finite weights count as 0.
fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_question_type_round_trips_through_str() {
        for t in [
            QuestionType::Skills,
            QuestionType::Interests,
            QuestionType::Personality,
            QuestionType::Situation,
        ] {
            assert_eq!(t.as_str().parse::<QuestionType>().unwrap(), t);
        }
        assert_eq!("interests".parse::<QuestionType>().unwrap(), QuestionType::Interests);
        assert!("HOBBIES".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_question_from_row_skips_unknown_type() {
        let row = QuestionRow {
            id: 1,
            question_text: "Favourite colour?".to_string(),
            question_type: "HOBBIES".to_string(),
            options: json!([]),
            weight: 1.0,
            created_at: Utc::now(),
        };
        assert!(Question::from_row(row).is_none());
    }

    #[test]
    fn test_question_from_row_reads_options() {
        let row = QuestionRow {
            id: 2,
            question_text: "How do you typically handle stress?".to_string(),
            question_type: "PERSONALITY".to_string(),
            options: json!(["Stay Calm and Focused", "Seek Support"]),
            weight: f64::NAN,
            created_at: Utc::now(),
        };
        let q = Question::from_row(row).unwrap();
        assert_eq!(q.question_type, QuestionType::Personality);
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.weight, 0.0);
    }

    #[test]
    fn test_stage_from_counts() {
        assert_eq!(AssessmentStage::from_counts(0, 0), AssessmentStage::NoResponses);
        assert_eq!(AssessmentStage::from_counts(0, 4), AssessmentStage::NoResponses);
        assert_eq!(AssessmentStage::from_counts(3, 0), AssessmentStage::ResponsesSaved);
        assert_eq!(
            AssessmentStage::from_counts(3, 4),
            AssessmentStage::RecommendationsComputed
        );
    }
}
