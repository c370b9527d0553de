use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::view::ReportView;
use crate::report::{export_report, load_report_view, ExportedReport};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExportReportRequest {
    pub user_id: Uuid,
}

/// GET /api/v1/report
pub async fn handle_get_report(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ReportView>, AppError> {
    let view = load_report_view(state.store.as_ref(), params.user_id).await?;
    Ok(Json(view))
}

/// POST /api/v1/report/export
pub async fn handle_export_report(
    State(state): State<AppState>,
    Json(req): Json<ExportReportRequest>,
) -> Result<Json<ExportedReport>, AppError> {
    let exported = export_report(state.store.as_ref(), state.archive.as_ref(), req.user_id).await?;
    Ok(Json(exported))
}
