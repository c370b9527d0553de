use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::RecommendationRow;
use crate::recommendation::aggregator::{recompute, RecomputeOutcome};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecomputeRequest {
    pub user_id: Uuid,
}

/// POST /api/v1/recommendations/recompute
pub async fn handle_recompute(
    State(state): State<AppState>,
    Json(req): Json<RecomputeRequest>,
) -> Result<Json<RecomputeOutcome>, AppError> {
    let outcome = recompute(state.store.as_ref(), state.scorer.as_ref(), req.user_id).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<RecommendationRow>>, AppError> {
    let recommendations = state.store.get_recommendations(params.user_id).await?;
    Ok(Json(recommendations))
}
