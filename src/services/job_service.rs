use crate::dto::job_dto::JobPayload;
use crate::error::Result;
use crate::models::job::Job;
use sqlx::PgPool;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_employer(&self, employer_id: i64) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, employer_id, title, description, created_at
            FROM jobs
            WHERE employer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    pub async fn create(&self, employer_id: i64, payload: JobPayload) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (employer_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, employer_id, title, description, created_at
            "#,
        )
        .bind(employer_id)
        .bind(&payload.title)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn update(&self, id: i64, payload: JobPayload) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, employer_id, title, description, created_at
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    /// Deletes the job; vacancies underneath it (and their applications,
    /// tests and tag links) go with it through the cascades.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(crate::error::Error::NotFound("Job not found".to_string()));
        }
        Ok(())
    }
}
