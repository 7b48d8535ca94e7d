use sqlx::PgPool;

use crate::dto::application_dto::{ApplicationSubmitted, SubmittedAnswer};
use crate::error::{Error, Result};
use crate::models::application::{ApplicationStatus, VacancyApplication};
use crate::models::test_result::ApplicantTestResult;
use crate::services::scoring::ScoringService;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

/// Status a freshly created application gets for a given test score.
pub fn status_for_score(score: f64) -> ApplicationStatus {
    if ScoringService::passes(score) {
        ApplicationStatus::Pending
    } else {
        ApplicationStatus::Failed
    }
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates an application for the (vacancy, applicant) pair.
    ///
    /// The stored test decides the path: a vacancy with a test requires
    /// submitted answers, is scored, and stores the result together with
    /// the application in one transaction; a vacancy without one takes
    /// the direct path. A duplicate pair is a Conflict either way.
    pub async fn apply(
        &self,
        vacancy_id: i64,
        applicant_id: i64,
        answers: Option<Vec<SubmittedAnswer>>,
    ) -> Result<ApplicationSubmitted> {
        let applicant_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM applicants WHERE id = $1)")
                .bind(applicant_id)
                .fetch_one(&self.pool)
                .await?;
        if !applicant_exists {
            return Err(Error::NotFound("Applicant not found".to_string()));
        }

        let has_resume: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM resumes WHERE applicant_id = $1)")
                .bind(applicant_id)
                .fetch_one(&self.pool)
                .await?;
        if !has_resume {
            return Err(Error::BadRequest(
                "A resume is required before applying".to_string(),
            ));
        }

        let vacancy_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM vacancies WHERE id = $1)")
                .bind(vacancy_id)
                .fetch_one(&self.pool)
                .await?;
        if !vacancy_exists {
            return Err(Error::NotFound("Vacancy not found".to_string()));
        }

        let has_test: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tests WHERE vacancy_id = $1)")
                .bind(vacancy_id)
                .fetch_one(&self.pool)
                .await?;

        match (has_test, answers) {
            (false, None) => self.apply_direct(vacancy_id, applicant_id).await,
            (false, Some(_)) => Err(Error::BadRequest(
                "This vacancy has no screening test".to_string(),
            )),
            (true, None) => Err(Error::BadRequest(
                "This vacancy requires the screening test".to_string(),
            )),
            (true, Some(answers)) => self.apply_with_test(vacancy_id, applicant_id, answers).await,
        }
    }

    async fn apply_direct(
        &self,
        vacancy_id: i64,
        applicant_id: i64,
    ) -> Result<ApplicationSubmitted> {
        let application = sqlx::query_as::<_, VacancyApplication>(
            r#"
            INSERT INTO vacancy_applications (vacancy_id, applicant_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, vacancy_id, applicant_id, status, created_at
            "#,
        )
        .bind(vacancy_id)
        .bind(applicant_id)
        .bind(ApplicationStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(duplicate_application)?;

        tracing::info!(vacancy_id, applicant_id, "application submitted");
        Ok(ApplicationSubmitted {
            application,
            score: None,
        })
    }

    async fn apply_with_test(
        &self,
        vacancy_id: i64,
        applicant_id: i64,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<ApplicationSubmitted> {
        let questions = sqlx::query_as::<_, crate::models::test::Question>(
            r#"
            SELECT q.id, q.test_id, q.question_text, q.option1, q.option2, q.option3, q.option4, q.correct_answer
            FROM questions q
            JOIN tests t ON t.id = q.test_id
            WHERE t.vacancy_id = $1
            ORDER BY q.id
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;

        if questions.is_empty() {
            return Err(Error::NotFound(
                "Questions for the test were not found".to_string(),
            ));
        }

        let score = ScoringService::score(&questions, &answers);
        let status = status_for_score(score);

        // Result and application are one unit; neither may be left
        // orphaned if the other insert fails.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO applicant_test_results (applicant_id, vacancy_id, score)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(applicant_id)
        .bind(vacancy_id)
        .bind(score)
        .execute(&mut *tx)
        .await
        .map_err(duplicate_application)?;

        let application = sqlx::query_as::<_, VacancyApplication>(
            r#"
            INSERT INTO vacancy_applications (vacancy_id, applicant_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, vacancy_id, applicant_id, status, created_at
            "#,
        )
        .bind(vacancy_id)
        .bind(applicant_id)
        .bind(status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(duplicate_application)?;

        tx.commit().await?;

        tracing::info!(
            vacancy_id,
            applicant_id,
            score,
            status = status.as_str(),
            "screening test submitted"
        );
        Ok(ApplicationSubmitted {
            application,
            score: Some(score),
        })
    }

    /// Employer decision over a pending application. Transitions out of a
    /// terminal state are forbidden.
    pub async fn decide(
        &self,
        vacancy_id: i64,
        applicant_id: i64,
        accept: bool,
    ) -> Result<VacancyApplication> {
        let application = self
            .find_pair(vacancy_id, applicant_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;

        let current = ApplicationStatus::parse(&application.status).ok_or_else(|| {
            Error::Internal(format!("Unknown application status: {}", application.status))
        })?;
        if current.is_terminal() {
            return Err(Error::Conflict(format!(
                "Application is already {}",
                current.as_str()
            )));
        }

        let next = if accept {
            ApplicationStatus::Accepted
        } else {
            ApplicationStatus::Rejected
        };

        let updated = sqlx::query_as::<_, VacancyApplication>(
            r#"
            UPDATE vacancy_applications
            SET status = $3
            WHERE vacancy_id = $1 AND applicant_id = $2
            RETURNING id, vacancy_id, applicant_id, status, created_at
            "#,
        )
        .bind(vacancy_id)
        .bind(applicant_id)
        .bind(next.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(vacancy_id, applicant_id, status = next.as_str(), "application decided");
        Ok(updated)
    }

    /// Withdraws the application and deletes the matching test result in
    /// one transaction, so neither row survives the other.
    pub async fn withdraw(&self, vacancy_id: i64, applicant_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let res = sqlx::query(
            "DELETE FROM vacancy_applications WHERE vacancy_id = $1 AND applicant_id = $2",
        )
        .bind(vacancy_id)
        .bind(applicant_id)
        .execute(&mut *tx)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(
                "No application for this vacancy".to_string(),
            ));
        }

        sqlx::query(
            "DELETE FROM applicant_test_results WHERE vacancy_id = $1 AND applicant_id = $2",
        )
        .bind(vacancy_id)
        .bind(applicant_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(vacancy_id, applicant_id, "application withdrawn");
        Ok(())
    }

    pub async fn find_pair(
        &self,
        vacancy_id: i64,
        applicant_id: i64,
    ) -> Result<Option<VacancyApplication>> {
        let application = sqlx::query_as::<_, VacancyApplication>(
            r#"
            SELECT id, vacancy_id, applicant_id, status, created_at
            FROM vacancy_applications
            WHERE vacancy_id = $1 AND applicant_id = $2
            "#,
        )
        .bind(vacancy_id)
        .bind(applicant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }

    pub async fn list_for_vacancy(&self, vacancy_id: i64) -> Result<Vec<VacancyApplication>> {
        let applications = sqlx::query_as::<_, VacancyApplication>(
            r#"
            SELECT id, vacancy_id, applicant_id, status, created_at
            FROM vacancy_applications
            WHERE vacancy_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    pub async fn result_for_pair(
        &self,
        vacancy_id: i64,
        applicant_id: i64,
    ) -> Result<Option<ApplicantTestResult>> {
        let result = sqlx::query_as::<_, ApplicantTestResult>(
            r#"
            SELECT id, applicant_id, vacancy_id, score, created_at
            FROM applicant_test_results
            WHERE vacancy_id = $1 AND applicant_id = $2
            "#,
        )
        .bind(vacancy_id)
        .bind(applicant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}

fn duplicate_application(err: sqlx::Error) -> Error {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            Error::Conflict("An application for this vacancy already exists".to_string())
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_score_creates_a_pending_application() {
        assert_eq!(status_for_score(50.0), ApplicationStatus::Pending);
        assert_eq!(status_for_score(100.0), ApplicationStatus::Pending);
    }

    #[test]
    fn failing_score_creates_a_failed_application() {
        assert_eq!(status_for_score(25.0), ApplicationStatus::Failed);
        assert_eq!(status_for_score(49.999), ApplicationStatus::Failed);
        assert_eq!(status_for_score(0.0), ApplicationStatus::Failed);
    }
}
