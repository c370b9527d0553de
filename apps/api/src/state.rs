use std::sync::Arc;

use crate::report::archive::ReportArchive;
use crate::scoring::CareerScorer;
use crate::store::AssessmentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssessmentStore>,
    /// Built once at startup from `SCORING_WEIGHTS`. Default: HeuristicScorer.
    pub scorer: Arc<dyn CareerScorer>,
    /// Destination for exported reports (S3 / MinIO).
    pub archive: Arc<dyn ReportArchive>,
}
