use sqlx::PgPool;

use crate::dto::resume_dto::ResumePayload;
use crate::error::{Error, Result};
use crate::models::resume::Resume;

#[derive(Clone)]
pub struct ResumeService {
    pool: PgPool,
}

impl ResumeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_applicant(&self, applicant_id: i64) -> Result<Option<Resume>> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            SELECT id, applicant_id, personal_info, work_experience, created_at
            FROM resumes
            WHERE applicant_id = $1
            "#,
        )
        .bind(applicant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resume)
    }

    pub async fn create(&self, applicant_id: i64, payload: ResumePayload) -> Result<Resume> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (applicant_id, personal_info, work_experience)
            VALUES ($1, $2, $3)
            RETURNING id, applicant_id, personal_info, work_experience, created_at
            "#,
        )
        .bind(applicant_id)
        .bind(&payload.personal_info)
        .bind(&payload.work_experience)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::Conflict("This applicant already has a resume".to_string())
            }
            other => other.into(),
        })?;

        Ok(resume)
    }

    pub async fn update(&self, applicant_id: i64, payload: ResumePayload) -> Result<Resume> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            UPDATE resumes
            SET personal_info = $2, work_experience = $3
            WHERE applicant_id = $1
            RETURNING id, applicant_id, personal_info, work_experience, created_at
            "#,
        )
        .bind(applicant_id)
        .bind(&payload.personal_info)
        .bind(&payload.work_experience)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Resume not found".to_string()))?;

        Ok(resume)
    }

    pub async fn delete(&self, applicant_id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM resumes WHERE applicant_id = $1")
            .bind(applicant_id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Resume not found".to_string()));
        }
        Ok(())
    }
}
