//! In-process store used by aggregator and router tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::assessment::{AssessmentResponse, Question, QuestionType};
use crate::career::CareerPath;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentReportRow, RecommendationRow};
use crate::models::career::CareerPathRow;
use crate::recommendation::aggregator::AssessmentResults;
use crate::store::AssessmentStore;

#[derive(Default)]
struct UserState {
    responses: Vec<AssessmentResponse>,
    recommendations: Vec<RecommendationRow>,
    report: Option<AssessmentReportRow>,
}

#[derive(Default)]
pub struct MemoryStore {
    questions: Vec<Question>,
    career_paths: Vec<CareerPath>,
    users: Mutex<HashMap<Uuid, UserState>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Mirrors the reference data seeded by migration.
    pub fn seeded() -> Self {
        let question = |id: i32, text: &str, question_type, options: &[&str]| Question {
            id,
            text: text.to_string(),
            question_type,
            options: options.iter().map(|o| o.to_string()).collect(),
            weight: 1.0,
        };
        let questions = vec![
            question(
                1,
                "How would you rate your problem-solving abilities?",
                QuestionType::Skills,
                &["Excellent", "Good", "Average", "Needs Improvement"],
            ),
            question(
                2,
                "How comfortable are you with public speaking?",
                QuestionType::Skills,
                &["Very Comfortable", "Somewhat Comfortable", "Neutral", "Uncomfortable"],
            ),
            question(
                3,
                "Which of these activities interests you the most?",
                QuestionType::Interests,
                &["Working with Technology", "Helping People", "Creative Arts", "Business and Finance"],
            ),
            question(
                4,
                "What type of work environment do you prefer?",
                QuestionType::Interests,
                &["Office Setting", "Outdoor/Field Work", "Creative Studio", "Laboratory"],
            ),
            question(
                5,
                "How do you typically handle stress?",
                QuestionType::Personality,
                &["Stay Calm and Focused", "Take a Break and Reorganize", "Seek Support", "Work Through It"],
            ),
            question(
                6,
                "What's your preferred work style?",
                QuestionType::Personality,
                &["Independent", "Team Collaboration", "Mixed", "Leadership Role"],
            ),
            question(
                7,
                "How would you handle a tight deadline?",
                QuestionType::Situation,
                &["Create a Detailed Plan", "Work Extra Hours", "Delegate Tasks", "Negotiate Extension"],
            ),
            question(
                8,
                "What's your approach to learning new skills?",
                QuestionType::Situation,
                &["Self-Study", "Formal Training", "Hands-on Practice", "Mentorship"],
            ),
        ];

        let career_paths = vec![
            career(
                1,
                "Software Developer",
                "Design and develop software applications and systems",
                json!({"technical": ["Programming", "Problem Solving", "System Design"], "soft": ["Communication", "Teamwork", "Time Management"]}),
                json!({"minimum": "Bachelor's Degree in Computer Science or related field", "preferred": "Master's Degree in Software Engineering"}),
                "$85,000 - $120,000",
                "Strong growth expected with increasing demand for software solutions",
            ),
            career(
                2,
                "Data Scientist",
                "Analyze complex data sets to help organizations make better decisions",
                json!({"technical": ["Statistics", "Machine Learning", "Data Analysis"], "soft": ["Critical Thinking", "Communication", "Business Acumen"]}),
                json!({"minimum": "Bachelor's Degree in Statistics, Mathematics, or Computer Science", "preferred": "Master's Degree in Data Science"}),
                "$90,000 - $130,000",
                "High demand with growing importance of data-driven decision making",
            ),
            career(
                3,
                "Healthcare Administrator",
                "Manage healthcare facilities and coordinate medical services",
                json!({"technical": ["Healthcare Systems", "Financial Management", "Regulatory Compliance"], "soft": ["Leadership", "Communication", "Problem Solving"]}),
                json!({"minimum": "Bachelor's Degree in Healthcare Administration", "preferred": "Master's Degree in Healthcare Management"}),
                "$70,000 - $100,000",
                "Steady growth with increasing healthcare needs",
            ),
            career(
                4,
                "UX/UI Designer",
                "Design user-friendly interfaces and experiences for digital products",
                json!({"technical": ["Design Tools", "User Research", "Prototyping"], "soft": ["Creativity", "Communication", "Empathy"]}),
                json!({"minimum": "Bachelor's Degree in Design or related field", "preferred": "Master's Degree in Human-Computer Interaction"}),
                "$75,000 - $110,000",
                "Growing demand with focus on user experience",
            ),
        ];

        MemoryStore {
            questions,
            career_paths,
            ..Default::default()
        }
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    pub fn career_paths(&self) -> Vec<CareerPath> {
        self.career_paths.clone()
    }

    /// While set, every write fails before touching state.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn begin_write(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn apply_results(&self, state: &mut UserState, user_id: Uuid, results: &AssessmentResults) {
        let now = Utc::now();
        state.recommendations = results
            .recommendations
            .iter()
            .map(|rec| RecommendationRow {
                id: Uuid::new_v4(),
                user_id,
                career_path_id: rec.career_path_id,
                career_title: rec.career_title.clone(),
                confidence_score: rec.confidence_score,
                reasoning: rec.reasoning.clone(),
                created_at: now,
            })
            .collect();
        state.report = Some(AssessmentReportRow {
            id: Uuid::new_v4(),
            user_id,
            skill_analysis: to_value(&results.report.skill_analysis),
            interest_analysis: to_value(&results.report.interest_analysis),
            personality_insights: to_value(&results.report.personality_insights),
            report_key: None,
            created_at: now,
        });
    }
}

fn career(
    id: i32,
    title: &str,
    description: &str,
    required_skills: Value,
    education_requirements: Value,
    average_salary: &str,
    job_outlook: &str,
) -> CareerPath {
    CareerPath::from_row(CareerPathRow {
        id,
        title: title.to_string(),
        description: description.to_string(),
        required_skills,
        education_requirements,
        average_salary: average_salary.to_string(),
        job_outlook: job_outlook.to_string(),
        created_at: Utc::now(),
    })
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[async_trait]
impl AssessmentStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.questions.clone())
    }

    async fn list_career_paths(&self) -> Result<Vec<CareerPath>, AppError> {
        Ok(self.career_paths.clone())
    }

    async fn get_career_path(&self, career_path_id: i32) -> Result<Option<CareerPath>, AppError> {
        Ok(self
            .career_paths
            .iter()
            .find(|p| p.id == career_path_id)
            .cloned())
    }

    async fn get_responses(&self, user_id: Uuid) -> Result<Vec<AssessmentResponse>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .get(&user_id)
            .map(|s| s.responses.clone())
            .unwrap_or_default())
    }

    async fn save_assessment(
        &self,
        user_id: Uuid,
        responses: &[AssessmentResponse],
        results: &AssessmentResults,
    ) -> Result<(), AppError> {
        self.begin_write()?;
        let mut users = self.users.lock().unwrap();
        let state = users.entry(user_id).or_default();
        let mut responses = responses.to_vec();
        responses.sort_by_key(|r| r.question_id);
        state.responses = responses;
        self.apply_results(state, user_id, results);
        Ok(())
    }

    async fn replace_results(
        &self,
        user_id: Uuid,
        results: &AssessmentResults,
    ) -> Result<(), AppError> {
        self.begin_write()?;
        let mut users = self.users.lock().unwrap();
        let state = users.entry(user_id).or_default();
        self.apply_results(state, user_id, results);
        Ok(())
    }

    async fn get_recommendations(&self, user_id: Uuid) -> Result<Vec<RecommendationRow>, AppError> {
        let users = self.users.lock().unwrap();
        let mut recs = users
            .get(&user_id)
            .map(|s| s.recommendations.clone())
            .unwrap_or_default();
        recs.sort_by(|a, b| {
            b.confidence_score
                .total_cmp(&a.confidence_score)
                .then_with(|| a.career_title.cmp(&b.career_title))
        });
        Ok(recs)
    }

    async fn get_report(&self, user_id: Uuid) -> Result<Option<AssessmentReportRow>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&user_id).and_then(|s| s.report.clone()))
    }

    async fn set_report_key(
        &self,
        user_id: Uuid,
        report_id: Uuid,
        report_key: &str,
    ) -> Result<(), AppError> {
        self.begin_write()?;
        let mut users = self.users.lock().unwrap();
        match users
            .get_mut(&user_id)
            .and_then(|s| s.report.as_mut())
            .filter(|r| r.id == report_id)
        {
            Some(report) => {
                report.report_key = Some(report_key.to_string());
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Assessment report {report_id} not found"
            ))),
        }
    }
}
