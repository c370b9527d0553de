// Career path reference data: static, read-only, seeded by migration.

pub mod handlers;
pub mod requirements;

use serde::Serialize;
use tracing::warn;

use crate::models::career::CareerPathRow;
use requirements::{EducationRequirements, RequiredSkills};

/// A validated career path. Built from `CareerPathRow` at load time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CareerPath {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub required_skills: RequiredSkills,
    pub education_requirements: EducationRequirements,
    pub average_salary: String,
    pub job_outlook: String,
}

impl CareerPath {
    /// Validates the JSON requirement columns. Malformed columns degrade to
    /// their empty variant (neutral for scoring) and are logged, never raised.
    pub fn from_row(row: CareerPathRow) -> Self {
        let required_skills = RequiredSkills::from_json(&row.required_skills).unwrap_or_else(|e| {
            warn!(
                "Career path {} ({}) has malformed required_skills: {e}",
                row.id, row.title
            );
            RequiredSkills::default()
        });

        let education_requirements = EducationRequirements::from_json(&row.education_requirements)
            .unwrap_or_else(|e| {
                warn!(
                    "Career path {} ({}) has malformed education_requirements: {e}",
                    row.id, row.title
                );
                EducationRequirements::default()
            });

        CareerPath {
            id: row.id,
            title: row.title,
            description: row.description,
            required_skills,
            education_requirements,
            average_salary: row.average_salary,
            job_outlook: row.job_outlook,
        }
    }
}
