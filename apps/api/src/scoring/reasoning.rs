//! Natural-language justification attached to each recommendation.
//!
//! Total by construction: every career field is optional here, so a
//! half-populated reference row produces a shorter explanation, never an error.

use crate::career::CareerPath;
use crate::scoring::categories::{career_category, PERSONALITY_TRAITS};
use crate::scoring::engine::{matching_skills, ResponseProfile};

/// Category scores strictly above this are called out in the reasoning.
pub const HIGHLIGHT_THRESHOLD: f64 = 75.0;

const MAX_LISTED_SKILLS: usize = 3;

pub fn explain(profile: &ResponseProfile, career_path: &CareerPath, score: f64) -> String {
    let mut signals = Vec::new();

    let skills = matching_skills(profile, &career_path.required_skills);
    if !skills.is_empty() {
        let listed: Vec<&str> = skills.into_iter().take(MAX_LISTED_SKILLS).collect();
        signals.push(format!(
            "You have strong skills in {}, which are essential for this role.",
            listed.join(", ")
        ));
    }

    if let Some(category) = career_category(&career_path.title) {
        if profile
            .interests
            .get(category)
            .is_some_and(|s| *s > HIGHLIGHT_THRESHOLD)
        {
            signals.push(format!(
                "Your strong interest in {category} aligns with this field."
            ));
        }
    }

    let traits: Vec<&str> = PERSONALITY_TRAITS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| {
            profile
                .personality
                .get(name)
                .is_some_and(|s| *s > HIGHLIGHT_THRESHOLD)
        })
        .collect();
    if !traits.is_empty() {
        signals.push(format!(
            "Your personality traits ({}) suit the demands of this role.",
            traits.join(", ")
        ));
    }

    let pct = format_percent(score);
    let mut sentences = if signals.is_empty() {
        vec![format!(
            "Based on your assessment responses, this career path is a {pct} match for your profile."
        )]
    } else {
        signals.push(format!(
            "Your assessment responses align {pct} with the requirements for this career path."
        ));
        signals
    };

    if let Some(education) = career_path.education_requirements.summary() {
        sentences.push(format!("This role typically requires: {education}."));
    }

    let outlook = career_path.job_outlook.trim();
    if !outlook.is_empty() {
        sentences.push(format!("Job outlook: {}", with_terminal_period(outlook)));
    }

    let salary = career_path.average_salary.trim();
    if !salary.is_empty() {
        sentences.push(format!("Average salary: {salary}."));
    }

    sentences.join(" ")
}

/// 0.82 → "82%". Rounds rather than truncates so 0.29 reads as 29%.
pub fn format_percent(score: f64) -> String {
    let score = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
    format!("{}%", (score * 100.0).round() as u32)
}

fn with_terminal_period(text: &str) -> String {
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}
