use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::assessment::{AssessmentReportRow, RecommendationRow};
use crate::report::analysis::{CategoryAnalysis, ReportAnalysis};
use crate::scoring::reasoning::format_percent;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedRecommendation {
    pub rank: usize,
    pub career_path_id: i32,
    pub title: String,
    pub confidence_score: f64,
    /// `confidence_score` as a rounded percentage, e.g. "82%".
    pub match_percent: String,
    pub reasoning: String,
}

/// Everything a report renderer needs, in display order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportView {
    pub report_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub report_key: Option<String>,
    pub recommendations: Vec<RankedRecommendation>,
    pub skill_analysis: CategoryAnalysis,
    pub interest_analysis: CategoryAnalysis,
    pub personality_insights: CategoryAnalysis,
}

impl ReportView {
    /// `recommendations` are expected in store order (confidence desc, title asc).
    pub fn new(report: &AssessmentReportRow, recommendations: &[RecommendationRow]) -> Self {
        let ReportAnalysis {
            skill_analysis,
            interest_analysis,
            personality_insights,
        } = ReportAnalysis::from_row(report);

        ReportView {
            report_id: report.id,
            user_id: report.user_id,
            created_at: report.created_at,
            report_key: report.report_key.clone(),
            recommendations: recommendations
                .iter()
                .enumerate()
                .map(|(idx, rec)| RankedRecommendation {
                    rank: idx + 1,
                    career_path_id: rec.career_path_id,
                    title: rec.career_title.clone(),
                    confidence_score: rec.confidence_score,
                    match_percent: format_percent(rec.confidence_score),
                    reasoning: rec.reasoning.clone(),
                })
                .collect(),
            skill_analysis,
            interest_analysis,
            personality_insights,
        }
    }

    pub fn top_confidence(&self) -> f64 {
        self.recommendations
            .iter()
            .map(|r| r.confidence_score)
            .fold(0.0, f64::max)
    }
}
