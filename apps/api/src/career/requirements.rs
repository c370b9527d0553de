//! Typed views over the loosely-shaped JSON stored for career requirements.
//!
//! Rows written by different generations of the seed data disagree on shape:
//! skills arrive either as `{"technical": [...], "soft": [...]}` or as a flat
//! list, and either as decoded JSONB or as a JSON string holding the same
//! structure. Everything is validated once at load time into the variants
//! below so scoring never branches on JSON types.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RequirementsError {
    #[error("embedded JSON text could not be decoded: {0}")]
    InvalidJsonText(String),

    #[error("expected a mapping or a list, found {0}")]
    UnexpectedShape(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "skills", rename_all = "snake_case")]
pub enum RequiredSkills {
    /// Category name → skill names, e.g. `technical` / `soft`.
    Categorized(BTreeMap<String, Vec<String>>),
    Flat(Vec<String>),
}

impl Default for RequiredSkills {
    fn default() -> Self {
        RequiredSkills::Flat(Vec::new())
    }
}

impl RequiredSkills {
    pub fn from_json(value: &Value) -> Result<Self, RequirementsError> {
        let value = decode_embedded(value)?;
        match value.as_ref() {
            Value::Object(map) => {
                let categories = map
                    .iter()
                    .filter_map(|(category, skills)| {
                        let skills = string_items(skills);
                        (!skills.is_empty()).then(|| (category.clone(), skills))
                    })
                    .collect();
                Ok(RequiredSkills::Categorized(categories))
            }
            Value::Array(_) => Ok(RequiredSkills::Flat(string_items(value.as_ref()))),
            Value::Null => Ok(RequiredSkills::default()),
            other => Err(RequirementsError::UnexpectedShape(json_kind(other))),
        }
    }

    /// All skill names in reference-data order, duplicates removed.
    /// Categorized skills list `technical` first, then `soft`, then any
    /// other category by name.
    pub fn flatten(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let iter: Box<dyn Iterator<Item = &String>> = match self {
            RequiredSkills::Categorized(map) => {
                let mut categories: Vec<(&String, &Vec<String>)> = map.iter().collect();
                categories.sort_by_key(|(name, _)| category_rank(name));
                Box::new(categories.into_iter().flat_map(|(_, skills)| skills.iter()))
            }
            RequiredSkills::Flat(list) => Box::new(list.iter()),
        };
        for skill in iter {
            let skill = skill.trim();
            if skill.is_empty() || seen.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
                continue;
            }
            seen.push(skill);
        }
        seen
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.flatten().is_empty()
    }
}

fn category_rank(name: &str) -> u8 {
    if name.eq_ignore_ascii_case("technical") {
        0
    } else if name.eq_ignore_ascii_case("soft") {
        1
    } else {
        2
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EducationRequirements {
    Mapping {
        minimum: Option<String>,
        preferred: Option<String>,
    },
    List {
        items: Vec<String>,
    },
    #[default]
    Unspecified,
}

impl EducationRequirements {
    pub fn from_json(value: &Value) -> Result<Self, RequirementsError> {
        let value = decode_embedded(value)?;
        match value.as_ref() {
            Value::Object(map) => Ok(EducationRequirements::Mapping {
                minimum: map.get("minimum").and_then(scalar_text),
                preferred: map.get("preferred").and_then(scalar_text),
            }),
            Value::Array(_) => Ok(EducationRequirements::List {
                items: string_items(value.as_ref()),
            }),
            Value::Null => Ok(EducationRequirements::Unspecified),
            other => Err(RequirementsError::UnexpectedShape(json_kind(other))),
        }
    }

    /// The headline requirement shown to users: the `minimum` entry of a
    /// mapping, or the first two entries of a list.
    pub fn summary(&self) -> Option<String> {
        match self {
            EducationRequirements::Mapping { minimum, .. } => minimum.clone(),
            EducationRequirements::List { items } if !items.is_empty() => {
                Some(items.iter().take(2).cloned().collect::<Vec<_>>().join(", "))
            }
            _ => None,
        }
    }
}

/// JSON text stored inside a JSON string is decoded; anything else passes through.
fn decode_embedded(value: &Value) -> Result<Cow<'_, Value>, RequirementsError> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(Cow::Owned(Value::Null));
            }
            serde_json::from_str::<Value>(trimmed)
                .map(Cow::Owned)
                .map_err(|e| RequirementsError::InvalidJsonText(e.to_string()))
        }
        other => Ok(Cow::Borrowed(other)),
    }
}

/// Collects non-blank strings from an array (or a lone string).
fn string_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
