//! Keyword/category heuristic that maps a response set and a career path to a
//! confidence score in [0, 1].
//!
//! Components:
//! - skills: substring matches (either direction) between answers and the
//!   career's required skills, normalised by `len(skills) * SKILL_MATCH_SCALE`
//! - interests: the user's 0–100 interest score for the career title's category
//! - personality: mean of the user's personality trait scores
//!
//! Combined with `ScoringWeights` (0.4 / 0.3 / 0.3 by default) and clamped.

use serde::Serialize;

use crate::assessment::AssessmentResponse;
use crate::career::requirements::RequiredSkills;
use crate::career::CareerPath;
use crate::scoring::categories::{
    career_category, interest_scores, normalize, personality_scores, CategoryScores,
};
use crate::scoring::weights::{compute_combined_score, ScoringWeights};

/// Used when there is nothing to compare against (no required skills, or a
/// career title outside every interest category).
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Matching half of the required skills (with unit question weights) saturates
/// the skills component.
pub const SKILL_MATCH_SCALE: f64 = 0.5;

/// Normalised answers plus the category scores derived from them. Built once
/// per response set and reused across every career path.
#[derive(Debug, Clone)]
pub struct ResponseProfile {
    answers: Vec<(String, f64)>,
    pub interests: CategoryScores,
    pub personality: CategoryScores,
}

impl ResponseProfile {
    pub fn new(responses: &[AssessmentResponse]) -> Self {
        let answers = responses
            .iter()
            .map(|r| (normalize(&r.response_text), r.weight))
            .filter(|(text, _)| !text.is_empty())
            .collect();

        ResponseProfile {
            answers,
            interests: interest_scores(responses),
            personality: personality_scores(responses),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    fn mentions(&self, skill: &str) -> bool {
        let skill = normalize(skill);
        self.answers
            .iter()
            .any(|(answer, _)| texts_match(answer, &skill))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub interests: f64,
    pub personality: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    const ZERO: ScoreBreakdown = ScoreBreakdown {
        skills: 0.0,
        interests: 0.0,
        personality: 0.0,
        total: 0.0,
    };
}

/// Either string contains the other. Blank strings never match.
fn texts_match(answer: &str, skill: &str) -> bool {
    !answer.is_empty() && !skill.is_empty() && (answer.contains(skill) || skill.contains(answer))
}

pub fn skill_match(profile: &ResponseProfile, required_skills: &RequiredSkills) -> f64 {
    let skills: Vec<String> = required_skills
        .flatten()
        .into_iter()
        .map(normalize)
        .collect();
    if skills.is_empty() {
        return NEUTRAL_SCORE;
    }

    let tally: f64 = profile
        .answers
        .iter()
        .map(|(answer, weight)| {
            skills
                .iter()
                .filter(|skill| texts_match(answer, skill))
                .count() as f64
                * weight
        })
        .sum();

    (tally / (skills.len() as f64 * SKILL_MATCH_SCALE)).clamp(0.0, 1.0)
}

/// Required skills (original casing, reference-data order) mentioned by any answer.
pub fn matching_skills<'a>(
    profile: &ResponseProfile,
    required_skills: &'a RequiredSkills,
) -> Vec<&'a str> {
    required_skills
        .flatten()
        .into_iter()
        .filter(|skill| profile.mentions(skill))
        .collect()
}

pub fn interest_match(profile: &ResponseProfile, career_title: &str) -> f64 {
    match career_category(career_title) {
        Some(category) => profile.interests.get(category).copied().unwrap_or(0.0) / 100.0,
        None => NEUTRAL_SCORE,
    }
}

pub fn personality_match(profile: &ResponseProfile) -> f64 {
    if profile.personality.is_empty() {
        return 0.0;
    }
    let sum: f64 = profile.personality.values().sum();
    (sum / profile.personality.len() as f64 / 100.0).clamp(0.0, 1.0)
}

/// Scores one career path. An empty (or all-blank) response set scores 0.
pub fn score_breakdown(
    profile: &ResponseProfile,
    career_path: &CareerPath,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    if profile.is_empty() {
        return ScoreBreakdown::ZERO;
    }

    let skills = skill_match(profile, &career_path.required_skills);
    let interests = interest_match(profile, &career_path.title);
    let personality = personality_match(profile);

    ScoreBreakdown {
        skills,
        interests,
        personality,
        total: compute_combined_score(skills, interests, personality, weights),
    }
}
