use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::assessment::submission::{resolve_answers, SubmitAssessmentRequest};
use crate::assessment::{AssessmentResponse, AssessmentStage, Question};
use crate::errors::AppError;
use crate::recommendation::aggregator::{submit_assessment, NewRecommendation};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmitAssessmentResponse {
    pub user_id: Uuid,
    pub saved: usize,
    pub skipped: usize,
    pub stage: AssessmentStage,
    pub recommendations: Vec<NewRecommendation>,
}

#[derive(Serialize)]
pub struct AssessmentStatus {
    pub user_id: Uuid,
    pub stage: AssessmentStage,
    pub response_count: usize,
    pub recommendation_count: usize,
}

/// GET /api/v1/questions
pub async fn handle_list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, AppError> {
    Ok(Json(state.store.list_questions().await?))
}

/// POST /api/v1/assessment
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    if req.responses.is_empty() {
        return Err(AppError::Validation(
            "No responses provided. Please answer all questions.".to_string(),
        ));
    }

    let questions = state.store.list_questions().await?;
    let resolved = resolve_answers(&questions, &req.responses);
    info!(
        "User {} submitted {} answers ({} resolved, {} skipped)",
        req.user_id,
        req.responses.len(),
        resolved.responses.len(),
        resolved.skipped.len()
    );

    let results = submit_assessment(
        state.store.as_ref(),
        state.scorer.as_ref(),
        req.user_id,
        &resolved.responses,
    )
    .await?;

    Ok(Json(SubmitAssessmentResponse {
        user_id: req.user_id,
        saved: resolved.responses.len(),
        skipped: resolved.skipped.len(),
        stage: AssessmentStage::from_counts(
            resolved.responses.len(),
            results.recommendations.len(),
        ),
        recommendations: results.recommendations,
    }))
}

/// GET /api/v1/assessment/status
pub async fn handle_assessment_status(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AssessmentStatus>, AppError> {
    let response_count = state.store.get_responses(params.user_id).await?.len();
    let recommendation_count = state.store.get_recommendations(params.user_id).await?.len();
    Ok(Json(AssessmentStatus {
        user_id: params.user_id,
        stage: AssessmentStage::from_counts(response_count, recommendation_count),
        response_count,
        recommendation_count,
    }))
}

/// GET /api/v1/responses
pub async fn handle_list_responses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AssessmentResponse>>, AppError> {
    Ok(Json(state.store.get_responses(params.user_id).await?))
}
