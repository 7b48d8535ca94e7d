use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::vacancy_dto::VacancyPayload;
use crate::error::{Error, Result};
use crate::models::vacancy::{Vacancy, VACANCY_OPEN};

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

/// Feed row: a vacancy joined with its job title and employer name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VacancyFeedRow {
    pub id: i64,
    pub job_id: i64,
    pub title: String,
    pub description: String,
    pub salary: Decimal,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub job_title: String,
    pub employer_name: String,
}

impl VacancyFeedRow {
    pub fn into_vacancy(self) -> (Vacancy, String, String) {
        let vacancy = Vacancy {
            id: self.id,
            job_id: self.job_id,
            title: self.title,
            description: self.description,
            salary: self.salary,
            status: self.status,
            created_at: self.created_at,
        };
        (vacancy, self.job_title, self.employer_name)
    }
}

const FEED_SELECT: &str = r#"
    SELECT v.id, v.job_id, v.title, v.description, v.salary, v.status, v.created_at,
           j.title AS job_title, e.name AS employer_name
    FROM vacancies v
    JOIN jobs j ON j.id = v.job_id
    JOIN employers e ON e.id = j.employer_id
"#;

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_job(&self, job_id: i64) -> Result<Vec<Vacancy>> {
        let vacancies = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, job_id, title, description, salary, status, created_at
            FROM vacancies
            WHERE job_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vacancies)
    }

    pub async fn create(&self, job_id: i64, payload: VacancyPayload) -> Result<Vacancy> {
        if payload.salary < Decimal::ZERO {
            return Err(Error::BadRequest("Salary must be non-negative".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            INSERT INTO vacancies (job_id, title, description, salary, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, job_id, title, description, salary, status, created_at
            "#,
        )
        .bind(job_id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.salary)
        .bind(VACANCY_OPEN)
        .fetch_one(&mut *tx)
        .await?;

        // Unknown tag ids are ignored rather than failing the insert.
        sqlx::query(
            r#"
            INSERT INTO vacancy_tags (vacancy_id, tag_id)
            SELECT $1, id FROM tags WHERE id = ANY($2)
            "#,
        )
        .bind(vacancy.id)
        .bind(&payload.tag_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(vacancy)
    }

    /// Updates the vacancy and replaces its whole tag set in one
    /// transaction.
    pub async fn update(&self, id: i64, payload: VacancyPayload) -> Result<Vacancy> {
        if payload.salary < Decimal::ZERO {
            return Err(Error::BadRequest("Salary must be non-negative".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            UPDATE vacancies
            SET title = $2, description = $3, salary = $4
            WHERE id = $1
            RETURNING id, job_id, title, description, salary, status, created_at
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.salary)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound("Vacancy not found".to_string()))?;

        sqlx::query("DELETE FROM vacancy_tags WHERE vacancy_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO vacancy_tags (vacancy_id, tag_id)
            SELECT $1, id FROM tags WHERE id = ANY($2)
            "#,
        )
        .bind(id)
        .bind(&payload.tag_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(vacancy)
    }

    /// Deletes the vacancy; applications, test and tag links cascade.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Vacancy not found".to_string()));
        }
        Ok(())
    }

    /// Open vacancies the applicant has not applied to, newest first.
    pub async fn feed_unapplied(&self, applicant_id: i64) -> Result<Vec<VacancyFeedRow>> {
        let query = format!(
            r#"{FEED_SELECT}
            WHERE v.status = $1
              AND NOT EXISTS (
                  SELECT 1 FROM vacancy_applications a
                  WHERE a.vacancy_id = v.id AND a.applicant_id = $2
              )
            ORDER BY v.created_at DESC
            "#
        );
        let rows = sqlx::query_as::<_, VacancyFeedRow>(&query)
            .bind(VACANCY_OPEN)
            .bind(applicant_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Vacancies the applicant has applied to, regardless of status.
    pub async fn feed_applied(&self, applicant_id: i64) -> Result<Vec<VacancyFeedRow>> {
        let query = format!(
            r#"{FEED_SELECT}
            WHERE EXISTS (
                SELECT 1 FROM vacancy_applications a
                WHERE a.vacancy_id = v.id AND a.applicant_id = $1
            )
            ORDER BY v.created_at DESC
            "#
        );
        let rows = sqlx::query_as::<_, VacancyFeedRow>(&query)
            .bind(applicant_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Employer review feed source: the employer's vacancies that have at
    /// least one application.
    pub async fn list_with_applications_for_employer(
        &self,
        employer_id: i64,
    ) -> Result<Vec<Vacancy>> {
        let vacancies = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT v.id, v.job_id, v.title, v.description, v.salary, v.status, v.created_at
            FROM vacancies v
            JOIN jobs j ON j.id = v.job_id
            WHERE j.employer_id = $1
              AND EXISTS (
                  SELECT 1 FROM vacancy_applications a WHERE a.vacancy_id = v.id
              )
            ORDER BY v.created_at DESC
            "#,
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vacancies)
    }
}
