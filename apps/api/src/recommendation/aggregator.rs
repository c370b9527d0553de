//! Recommendation aggregator. Runs the scorer over every career path for a
//! user and derives the assessment report.
//!
//! Results are always recomputed in full from the current response set and
//! replace whatever was stored before. Lifecycle per user:
//! NO_RESPONSES → RESPONSES_SAVED → RECOMMENDATIONS_COMPUTED, re-entered
//! from the top on every submission.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::AssessmentResponse;
use crate::career::CareerPath;
use crate::errors::AppError;
use crate::report::analysis::ReportAnalysis;
use crate::scoring::CareerScorer;
use crate::store::AssessmentStore;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A recommendation ready to persist.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewRecommendation {
    pub career_path_id: i32,
    pub career_title: String,
    pub confidence_score: f64,
    pub reasoning: String,
}

/// Everything one recompute produces for a user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssessmentResults {
    /// One entry per career path, ordered by confidence (desc), then title.
    pub recommendations: Vec<NewRecommendation>,
    pub report: ReportAnalysis,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecomputeOutcome {
    /// The user has no responses; nothing was created or altered.
    NoResponses,
    Recomputed { recommendation_count: usize },
}

// ────────────────────────────────────────────────────────────────────────────
// Pure computation
// ────────────────────────────────────────────────────────────────────────────

/// Scores every career path against `responses` and builds the report.
pub fn build_results(
    scorer: &dyn CareerScorer,
    responses: &[AssessmentResponse],
    career_paths: &[CareerPath],
) -> AssessmentResults {
    let mut recommendations: Vec<NewRecommendation> = career_paths
        .iter()
        .map(|path| {
            let confidence_score = scorer.score(responses, path);
            let reasoning = scorer.explain(responses, path, confidence_score);
            info!("Score for {}: {confidence_score:.4}", path.title);
            NewRecommendation {
                career_path_id: path.id,
                career_title: path.title.clone(),
                confidence_score,
                reasoning,
            }
        })
        .collect();

    recommendations.sort_by(compare_recommendations);

    AssessmentResults {
        recommendations,
        report: ReportAnalysis::from_responses(responses),
    }
}

fn compare_recommendations(a: &NewRecommendation, b: &NewRecommendation) -> Ordering {
    b.confidence_score
        .total_cmp(&a.confidence_score)
        .then_with(|| a.career_title.cmp(&b.career_title))
        .then_with(|| a.career_path_id.cmp(&b.career_path_id))
}

// ────────────────────────────────────────────────────────────────────────────
// Store-backed operations
// ────────────────────────────────────────────────────────────────────────────

/// Recomputes recommendations and the report from the user's stored responses.
///
/// No responses → logged no-op; prior recommendations and report are left
/// as they are. Otherwise the old results are replaced in a single store
/// transaction, so a failure persists nothing.
pub async fn recompute(
    store: &dyn AssessmentStore,
    scorer: &dyn CareerScorer,
    user_id: Uuid,
) -> Result<RecomputeOutcome, AppError> {
    let responses = store.get_responses(user_id).await?;
    if responses.is_empty() {
        warn!("No responses found for user {user_id}; skipping recompute");
        return Ok(RecomputeOutcome::NoResponses);
    }

    info!(
        "Recomputing recommendations for user {user_id} from {} responses",
        responses.len()
    );

    let career_paths = store.list_career_paths().await?;
    let results = build_results(scorer, &responses, &career_paths);
    store.replace_results(user_id, &results).await?;

    info!(
        "Stored {} recommendations for user {user_id} (scorer: {})",
        results.recommendations.len(),
        scorer.backend()
    );

    Ok(RecomputeOutcome::Recomputed {
        recommendation_count: results.recommendations.len(),
    })
}

/// Saves a new response set and the results derived from it as one unit:
/// delete old responses → insert new → replace recommendations → replace report.
pub async fn submit_assessment(
    store: &dyn AssessmentStore,
    scorer: &dyn CareerScorer,
    user_id: Uuid,
    responses: &[AssessmentResponse],
) -> Result<AssessmentResults, AppError> {
    if responses.is_empty() {
        return Err(AppError::Validation(
            "No valid responses could be saved.".to_string(),
        ));
    }

    let career_paths = store.list_career_paths().await?;
    info!(
        "Scoring {} responses for user {user_id} against {} career paths",
        responses.len(),
        career_paths.len()
    );

    let results = build_results(scorer, responses, &career_paths);
    store.save_assessment(user_id, responses, &results).await?;

    info!("Assessment saved for user {user_id}");
    Ok(results)
}
