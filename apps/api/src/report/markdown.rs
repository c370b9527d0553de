//! Markdown rendering of an assessment report for export.

use chrono::{DateTime, Utc};

use crate::report::analysis::CategoryAnalysis;
use crate::report::view::ReportView;

/// Recommendations shown in the summary table.
pub const TOP_RECOMMENDATIONS: usize = 6;
/// Entries shown per analysis section.
pub const SECTION_LIMIT: usize = 6;
/// Reasoning longer than this is cut and suffixed with "...".
pub const REASONING_PREVIEW_CHARS: usize = 120;

const NEXT_STEPS: [(&str, &str); 5] = [
    ("Research Top Careers", "Explore the recommended career paths in detail"),
    ("Skill Development", "Identify key skills to develop for your top matches"),
    ("Networking", "Connect with professionals in your target industries"),
    ("Education Planning", "Research required education and certifications"),
    ("Career Counseling", "Schedule a session with a career advisor"),
];

pub fn render_report_to_md(view: &ReportView, generated_at: DateTime<Utc>) -> String {
    let date = generated_at.format("%B %d, %Y");

    let mut md = String::from("# Career Assessment Report\n\n");
    md.push_str("_Personalized Career Recommendations_\n\n");
    md.push_str(&format!("- **User:** {}\n", view.user_id));
    md.push_str(&format!("- **Report Date:** {date}\n"));
    md.push_str(&format!("- **Report ID:** {}\n\n", view.report_id));

    md.push_str("## Key Findings\n\n");
    md.push_str(&format!(
        "- {} career paths evaluated\n",
        view.recommendations.len()
    ));
    md.push_str(&format!(
        "- Top recommendation confidence: {:.1}%\n",
        view.top_confidence() * 100.0
    ));
    md.push_str(&format!("- Analysis completed: {date}\n"));
    md.push_str("- Assessment methodology: Skills + Interests + Personality analysis\n\n");

    md.push_str("## Top Career Recommendations\n\n");
    if view.recommendations.is_empty() {
        md.push_str("No career recommendations available.\n\n");
    } else {
        md.push_str("| # | Career Path | Match Score | Key Strengths |\n");
        md.push_str("|---|---|---|---|\n");
        for rec in view.recommendations.iter().take(TOP_RECOMMENDATIONS) {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                rec.rank,
                escape_cell(&rec.title),
                rec.match_percent,
                escape_cell(&preview(&rec.reasoning))
            ));
        }
        md.push('\n');
    }

    md.push_str("## Detailed Analysis\n\n");
    push_section(&mut md, "Skills Assessment", &view.skill_analysis, "skills");
    push_section(&mut md, "Interests Profile", &view.interest_analysis, "interests");
    push_section(
        &mut md,
        "Personality Insights",
        &view.personality_insights,
        "personality",
    );

    md.push_str("## Recommended Next Steps\n\n");
    for (idx, (title, detail)) in NEXT_STEPS.iter().enumerate() {
        md.push_str(&format!("{}. **{title}:** {detail}\n", idx + 1));
    }
    md.push('\n');

    md.push_str(&format!(
        "_Report generated on: {}_\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));
    md
}

fn push_section(md: &mut String, heading: &str, entries: &CategoryAnalysis, data_type: &str) {
    md.push_str(&format!("### {heading}\n\n"));
    if entries.is_empty() {
        md.push_str(&format!("No {data_type} data available from the assessment.\n\n"));
        return;
    }
    for (label, text) in entries.iter().take(SECTION_LIMIT) {
        md.push_str(&format!("- **{label}:** {text}\n"));
    }
    md.push('\n');
}

/// Truncates on a char boundary.
fn preview(reasoning: &str) -> String {
    if reasoning.chars().count() > REASONING_PREVIEW_CHARS {
        let cut: String = reasoning.chars().take(REASONING_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        reasoning.to_string()
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AssessmentResponse, QuestionType};
    use crate::report::analysis::ReportAnalysis;
    use crate::report::view::RankedRecommendation;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn view(recommendations: Vec<RankedRecommendation>) -> ReportView {
        let mut skill_analysis = CategoryAnalysis::new();
        for idx in 1..=8 {
            skill_analysis.insert(format!("Response {idx}"), "Good".to_string());
        }
        ReportView {
            report_id: Uuid::nil(),
            user_id: Uuid::nil(),
            created_at: Utc::now(),
            report_key: None,
            recommendations,
            skill_analysis,
            interest_analysis: CategoryAnalysis::new(),
            personality_insights: CategoryAnalysis::new(),
        }
    }

    fn ranked(rank: usize, title: &str, reasoning: &str) -> RankedRecommendation {
        RankedRecommendation {
            rank,
            career_path_id: rank as i32,
            title: title.to_string(),
            confidence_score: 0.5,
            match_percent: "50%".to_string(),
            reasoning: reasoning.to_string(),
        }
    }

    #[test]
    fn test_long_reasoning_is_truncated() {
        let long = "x".repeat(200);
        let md = render_report_to_md(
            &view(vec![ranked(1, "Data Scientist", &long)]),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        );
        assert!(md.contains(&format!("{}...", "x".repeat(120))));
        assert!(!md.contains(&"x".repeat(121)));
        assert!(md.contains("Report Date:** March 01, 2024"));
    }

    #[test]
    fn test_sections_are_capped_and_fall_back() {
        let recs = (1..=8).map(|i| ranked(i, &format!("Career {i}"), "ok")).collect();
        let md = render_report_to_md(&view(recs), Utc::now());

        assert!(md.contains("| 6 | Career 6 |"));
        assert!(!md.contains("| 7 | Career 7 |"));
        assert_eq!(md.matches("- **Response").count(), SECTION_LIMIT);
        assert!(md.contains("No interests data available from the assessment."));
        assert!(md.contains("No personality data available from the assessment."));
        assert!(md.contains("5. **Career Counseling:**"));
    }

    #[test]
    fn test_section_shows_first_six_answers_by_index() {
        let mut v = view(vec![]);
        let responses: Vec<AssessmentResponse> = (1..=12)
            .map(|i| AssessmentResponse {
                question_id: i,
                question_text: String::new(),
                question_type: QuestionType::Skills,
                weight: 1.0,
                response_text: format!("answer {i}"),
            })
            .collect();
        v.skill_analysis = ReportAnalysis::from_responses(&responses).skill_analysis;

        let md = render_report_to_md(&v, Utc::now());
        for i in 1..=6 {
            assert!(md.contains(&format!("- **Response {i}:** answer {i}\n")), "missing {i}");
        }
        assert!(!md.contains("Response 10"));
        assert!(md.find("Response 2:").unwrap() < md.find("Response 6:").unwrap());
    }

    #[test]
    fn test_empty_recommendations_message() {
        let md = render_report_to_md(&view(vec![]), Utc::now());
        assert!(md.contains("No career recommendations available."));
        assert!(md.contains("Top recommendation confidence: 0.0%"));
    }

    #[test]
    fn test_pipes_in_cells_are_escaped() {
        assert_eq!(escape_cell("UX|UI"), "UX\\|UI");
    }
}
