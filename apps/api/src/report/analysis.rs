use std::cmp::Ordering;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use crate::assessment::{AssessmentResponse, QuestionType};
use crate::models::assessment::AssessmentReportRow;

/// Label → response text, kept in running-index order ("Response 2" before
/// "Response 10"). Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAnalysis {
    entries: Vec<(String, String)>,
}

impl CategoryAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text of an existing label, otherwise appends.
    pub fn insert(&mut self, label: String, text: String) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((label, text)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<&String> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, text)| text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, text)| (label.as_str(), text.as_str()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored JSONB objects do not keep insertion order; restore it from the
    /// trailing index of each label.
    fn sort_by_index(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| compare_labels(a, b));
    }
}

impl Serialize for CategoryAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, text) in &self.entries {
            map.serialize_entry(label, text)?;
        }
        map.end()
    }
}

fn label_index(label: &str) -> Option<u32> {
    label.rsplit(' ').next()?.parse().ok()
}

/// Indexed labels first, by index; anything else after, by text.
fn compare_labels(a: &str, b: &str) -> Ordering {
    match (label_index(a), label_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// The three per-category mappings stored on an assessment report.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ReportAnalysis {
    pub skill_analysis: CategoryAnalysis,
    pub interest_analysis: CategoryAnalysis,
    pub personality_insights: CategoryAnalysis,
}

impl ReportAnalysis {
    /// Groups responses by question type. The index runs over every response
    /// (situational ones included) in question order, starting at 1.
    pub fn from_responses(responses: &[AssessmentResponse]) -> Self {
        let mut analysis = ReportAnalysis::default();
        for (idx, response) in responses.iter().enumerate() {
            let idx = idx + 1;
            let text = response.response_text.clone();
            match response.question_type {
                QuestionType::Skills => {
                    analysis.skill_analysis.insert(format!("Response {idx}"), text);
                }
                QuestionType::Interests => {
                    analysis.interest_analysis.insert(format!("Response {idx}"), text);
                }
                QuestionType::Personality => {
                    analysis.personality_insights.insert(format!("Trait {idx}"), text);
                }
                QuestionType::Situation => {}
            }
        }
        analysis
    }

    /// Reads stored JSON mappings. Non-string values are rendered as JSON
    /// text; a column that is not a mapping reads as empty.
    pub fn from_row(row: &AssessmentReportRow) -> Self {
        ReportAnalysis {
            skill_analysis: read_mapping(&row.skill_analysis, "skill_analysis"),
            interest_analysis: read_mapping(&row.interest_analysis, "interest_analysis"),
            personality_insights: read_mapping(&row.personality_insights, "personality_insights"),
        }
    }
}

fn read_mapping(value: &Value, column: &str) -> CategoryAnalysis {
    match value {
        Value::Object(map) => {
            let mut analysis = CategoryAnalysis::new();
            for (label, v) in map {
                let text = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                analysis.insert(label.clone(), text);
            }
            analysis.sort_by_index();
            analysis
        }
        Value::Null => CategoryAnalysis::new(),
        _ => {
            warn!("Report column {column} is not a mapping; treating as empty");
            CategoryAnalysis::new()
        }
    }
}
