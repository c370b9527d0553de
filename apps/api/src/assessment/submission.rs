//! Resolves a raw assessment submission against the seeded question list.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::assessment::{AssessmentResponse, Question};

/// A question may be referenced by id (form posts) or by its exact text
/// (the interactive client sends question text as the key).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum QuestionRef {
    Id(i32),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    pub question: QuestionRef,
    pub response_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub user_id: Uuid,
    pub responses: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone)]
pub struct ResolvedSubmission {
    /// One response per question, ordered by question id.
    pub responses: Vec<AssessmentResponse>,
    pub skipped: Vec<QuestionRef>,
}

/// Matches answers to questions. Unknown questions and blank answers are
/// skipped; a question answered twice keeps the last answer.
pub fn resolve_answers(questions: &[Question], answers: &[SubmittedAnswer]) -> ResolvedSubmission {
    let mut by_question: BTreeMap<i32, AssessmentResponse> = BTreeMap::new();
    let mut skipped = Vec::new();

    for answer in answers {
        let question = match &answer.question {
            QuestionRef::Id(id) => questions.iter().find(|q| q.id == *id),
            QuestionRef::Text(text) => {
                let text = text.trim();
                questions.iter().find(|q| q.text.trim() == text)
            }
        };

        let Some(question) = question else {
            warn!("Question not found: {:?}", answer.question);
            skipped.push(answer.question.clone());
            continue;
        };

        let response_text = answer.response_text.trim();
        if response_text.is_empty() {
            warn!("Blank answer for question {}", question.id);
            skipped.push(answer.question.clone());
            continue;
        }

        by_question.insert(question.id, AssessmentResponse::new(question, response_text));
    }

    ResolvedSubmission {
        responses: by_question.into_values().collect(),
        skipped,
    }
}
