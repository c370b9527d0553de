use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::career::CareerPath;
use crate::errors::AppError;
use crate::models::assessment::RecommendationRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CareerDetailQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct CareerDetailResponse {
    pub career: CareerPath,
    /// The requesting user's stored recommendation for this path, if any.
    pub recommendation: Option<RecommendationRow>,
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerPath>>, AppError> {
    Ok(Json(state.store.list_career_paths().await?))
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<CareerDetailQuery>,
) -> Result<Json<CareerDetailResponse>, AppError> {
    let career = state
        .store
        .get_career_path(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Career path {id} not found")))?;

    let recommendation = match params.user_id {
        Some(user_id) => state
            .store
            .get_recommendations(user_id)
            .await?
            .into_iter()
            .find(|r| r.career_path_id == id),
        None => None,
    };

    Ok(Json(CareerDetailResponse {
        career,
        recommendation,
    }))
}
