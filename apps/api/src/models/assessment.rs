use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: i32,
    pub question_text: String,
    pub question_type: String,
    pub options: Value,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

/// A user response joined with the question fields scoring needs.
#[derive(Debug, Clone, FromRow)]
pub struct ResponseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question_id: i32,
    pub question_text: String,
    pub question_type: String,
    pub weight: f64,
    pub response_text: String,
    pub created_at: DateTime<Utc>,
}

/// A stored recommendation joined with its career path title.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub career_path_id: i32,
    pub career_title: String,
    pub confidence_score: f64,
    pub reasoning: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AssessmentReportRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_analysis: Value,
    pub interest_analysis: Value,
    pub personality_insights: Value,
    pub report_key: Option<String>,
    pub created_at: DateTime<Utc>,
}
