pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::assessment::handlers as assessment;
use crate::career::handlers as career;
use crate::recommendation::handlers as recommendation;
use crate::report::handlers as report;
use crate::state::AppState;

/// `?user_id=` on every per-user read endpoint.
#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route("/api/v1/questions", get(assessment::handle_list_questions))
        .route(
            "/api/v1/assessment",
            post(assessment::handle_submit_assessment),
        )
        .route(
            "/api/v1/assessment/status",
            get(assessment::handle_assessment_status),
        )
        .route("/api/v1/responses", get(assessment::handle_list_responses))
        // Career catalog
        .route("/api/v1/careers", get(career::handle_list_careers))
        .route("/api/v1/careers/:id", get(career::handle_get_career))
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(recommendation::handle_list_recommendations),
        )
        .route(
            "/api/v1/recommendations/recompute",
            post(recommendation::handle_recompute),
        )
        // Reports
        .route("/api/v1/report", get(report::handle_get_report))
        .route("/api/v1/report/export", post(report::handle_export_report))
        .with_state(state)
}
