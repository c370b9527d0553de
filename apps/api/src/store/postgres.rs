use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::assessment::{AssessmentResponse, Question};
use crate::career::CareerPath;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentReportRow, QuestionRow, RecommendationRow, ResponseRow};
use crate::models::career::CareerPathRow;
use crate::recommendation::aggregator::AssessmentResults;
use crate::store::AssessmentStore;

#[derive(Clone)]
pub struct PgAssessmentStore {
    pool: PgPool,
}

impl PgAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgAssessmentStore {
    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query_as::<_, QuestionRow>("SELECT * FROM questions ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().filter_map(Question::from_row).collect())
    }

    async fn list_career_paths(&self) -> Result<Vec<CareerPath>, AppError> {
        let rows =
            sqlx::query_as::<_, CareerPathRow>("SELECT * FROM career_paths ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(CareerPath::from_row).collect())
    }

    async fn get_career_path(&self, career_path_id: i32) -> Result<Option<CareerPath>, AppError> {
        let row = sqlx::query_as::<_, CareerPathRow>("SELECT * FROM career_paths WHERE id = $1")
            .bind(career_path_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(CareerPath::from_row))
    }

    async fn get_responses(&self, user_id: Uuid) -> Result<Vec<AssessmentResponse>, AppError> {
        let rows = sqlx::query_as::<_, ResponseRow>(
            r#"
            SELECT ur.id, ur.user_id, ur.question_id, q.question_text, q.question_type,
                   q.weight, ur.response_text, ur.created_at
            FROM user_responses ur
            JOIN questions q ON q.id = ur.question_id
            WHERE ur.user_id = $1
            ORDER BY ur.question_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .filter_map(AssessmentResponse::from_row)
            .collect())
    }

    async fn save_assessment(
        &self,
        user_id: Uuid,
        responses: &[AssessmentResponse],
        results: &AssessmentResults,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_responses WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for response in responses {
            sqlx::query(
                r#"
                INSERT INTO user_responses (id, user_id, question_id, response_text)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(response.question_id)
            .bind(&response.response_text)
            .execute(&mut *tx)
            .await?;
        }

        write_results(&mut tx, user_id, results).await?;
        tx.commit().await?;

        info!(
            "Saved {} responses and {} recommendations for user {user_id}",
            responses.len(),
            results.recommendations.len()
        );
        Ok(())
    }

    async fn replace_results(
        &self,
        user_id: Uuid,
        results: &AssessmentResults,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        write_results(&mut tx, user_id, results).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn get_recommendations(&self, user_id: Uuid) -> Result<Vec<RecommendationRow>, AppError> {
        Ok(sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT cr.id, cr.user_id, cr.career_path_id, cp.title AS career_title,
                   cr.confidence_score, cr.reasoning, cr.created_at
            FROM career_recommendations cr
            JOIN career_paths cp ON cp.id = cr.career_path_id
            WHERE cr.user_id = $1
            ORDER BY cr.confidence_score DESC, cp.title ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_report(&self, user_id: Uuid) -> Result<Option<AssessmentReportRow>, AppError> {
        Ok(sqlx::query_as::<_, AssessmentReportRow>(
            "SELECT * FROM assessment_reports WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn set_report_key(
        &self,
        user_id: Uuid,
        report_id: Uuid,
        report_key: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE assessment_reports SET report_key = $1 WHERE id = $2 AND user_id = $3",
        )
        .bind(report_key)
        .bind(report_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Assessment report {report_id} not found"
            )));
        }
        Ok(())
    }
}

/// Deletes then re-inserts recommendations and the report on an open
/// connection. Callers own the transaction.
async fn write_results(
    conn: &mut PgConnection,
    user_id: Uuid,
    results: &AssessmentResults,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM career_recommendations WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    for rec in &results.recommendations {
        sqlx::query(
            r#"
            INSERT INTO career_recommendations
                (id, user_id, career_path_id, confidence_score, reasoning)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(rec.career_path_id)
        .bind(rec.confidence_score)
        .bind(&rec.reasoning)
        .execute(&mut *conn)
        .await?;
    }

    sqlx::query("DELETE FROM assessment_reports WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    let report = &results.report;
    sqlx::query(
        r#"
        INSERT INTO assessment_reports
            (id, user_id, skill_analysis, interest_analysis, personality_insights)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(&report.skill_analysis))
    .bind(Json(&report.interest_analysis))
    .bind(Json(&report.personality_insights))
    .execute(&mut *conn)
    .await?;

    Ok(())
}
