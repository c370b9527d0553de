// Assessment report: per-category analysis, renderer payload and export.

pub mod analysis;
pub mod archive;
pub mod handlers;
pub mod markdown;
pub mod view;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::AssessmentStore;
use archive::{report_key, ReportArchive};
use markdown::render_report_to_md;
use view::ReportView;

#[derive(Debug, Clone, Serialize)]
pub struct ExportedReport {
    pub report_id: Uuid,
    pub report_key: String,
}

/// The stored report plus the user's ranked recommendations.
pub async fn load_report_view(
    store: &dyn AssessmentStore,
    user_id: Uuid,
) -> Result<ReportView, AppError> {
    let report = store
        .get_report(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No assessment report for user {user_id}")))?;
    let recommendations = store.get_recommendations(user_id).await?;
    Ok(ReportView::new(&report, &recommendations))
}

/// Renders the report to markdown, archives it, and records the key.
pub async fn export_report(
    store: &dyn AssessmentStore,
    archive: &dyn ReportArchive,
    user_id: Uuid,
) -> Result<ExportedReport, AppError> {
    let view = load_report_view(store, user_id).await?;
    let md = render_report_to_md(&view, Utc::now());

    let key = report_key(user_id, view.report_id);
    archive.put_markdown(&key, md).await?;
    store.set_report_key(user_id, view.report_id, &key).await?;

    info!("Exported report {} for user {user_id}", view.report_id);
    Ok(ExportedReport {
        report_id: view.report_id,
        report_key: key,
    })
}
