use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// Raw career path row. `required_skills` and `education_requirements` are
/// loosely-typed JSONB and are validated by `career::CareerPath::from_row`.
#[derive(Debug, Clone, FromRow)]
pub struct CareerPathRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub required_skills: Value,
    pub education_requirements: Value,
    pub average_salary: String,
    pub job_outlook: String,
    pub created_at: DateTime<Utc>,
}
