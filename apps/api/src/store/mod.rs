//! Persistence seam for questions, responses, career paths and results.
//!
//! Every write that replaces a user's state goes through a single method so
//! the implementation can run it in one transaction: a failure part-way
//! leaves the previous responses, recommendations and report untouched.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::assessment::{AssessmentResponse, Question};
use crate::career::CareerPath;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentReportRow, RecommendationRow};
use crate::recommendation::aggregator::AssessmentResults;

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, AppError>;

    /// All career paths, ordered by id, with requirements validated.
    async fn list_career_paths(&self) -> Result<Vec<CareerPath>, AppError>;

    async fn get_career_path(&self, career_path_id: i32) -> Result<Option<CareerPath>, AppError>;

    /// The user's current responses, ordered by question id.
    async fn get_responses(&self, user_id: Uuid) -> Result<Vec<AssessmentResponse>, AppError>;

    /// Replaces the user's responses, recommendations and report in one unit.
    async fn save_assessment(
        &self,
        user_id: Uuid,
        responses: &[AssessmentResponse],
        results: &AssessmentResults,
    ) -> Result<(), AppError>;

    /// Replaces the user's recommendations and report in one unit.
    async fn replace_results(&self, user_id: Uuid, results: &AssessmentResults)
        -> Result<(), AppError>;

    /// Ordered by confidence (desc), then career title.
    async fn get_recommendations(&self, user_id: Uuid) -> Result<Vec<RecommendationRow>, AppError>;

    async fn get_report(&self, user_id: Uuid) -> Result<Option<AssessmentReportRow>, AppError>;

    /// Records where an exported copy of the report was archived.
    async fn set_report_key(
        &self,
        user_id: Uuid,
        report_id: Uuid,
        report_key: &str,
    ) -> Result<(), AppError>;
}
