use sqlx::PgPool;

use crate::dto::analytics_dto::{ApplicantAnalytics, EmployerAnalytics};
use crate::error::{Error, Result};
use crate::models::application::{ApplicationStatus, VacancyApplication};
use crate::models::test_result::ApplicantTestResult;
use crate::models::vacancy::VACANCY_OPEN;

#[derive(Clone)]
pub struct AnalyticsService {
    pool: PgPool,
}

/// Applicant summary over the rows as currently stored.
pub fn summarize_applicant(
    applications: &[VacancyApplication],
    results: &[ApplicantTestResult],
    tags: Vec<String>,
) -> ApplicantAnalytics {
    let accepted = applications
        .iter()
        .filter(|a| ApplicationStatus::parse(&a.status) == Some(ApplicationStatus::Accepted))
        .count() as i64;
    let rejected = applications
        .iter()
        .filter(|a| ApplicationStatus::parse(&a.status) == Some(ApplicationStatus::Rejected))
        .count() as i64;

    let average_test_score = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64
    };

    ApplicantAnalytics {
        total_applications: applications.len() as i64,
        accepted_applications: accepted,
        rejected_applications: rejected,
        average_test_score,
        completed_tests: results.len() as i64,
        tags,
    }
}

/// Employer summary from pre-aggregated counts.
pub fn summarize_employer(
    total_jobs: i64,
    total_vacancies: i64,
    active_vacancies: i64,
    total_applications: i64,
) -> EmployerAnalytics {
    let average_applications_per_vacancy = if total_vacancies > 0 {
        total_applications as f64 / total_vacancies as f64
    } else {
        0.0
    };

    EmployerAnalytics {
        total_jobs,
        total_vacancies,
        active_vacancies,
        total_applications,
        average_applications_per_vacancy,
    }
}

impl AnalyticsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn applicant_summary(&self, applicant_id: i64) -> Result<ApplicantAnalytics> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM applicants WHERE id = $1)")
                .bind(applicant_id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(Error::NotFound("Applicant not found".to_string()));
        }

        let applications = sqlx::query_as::<_, VacancyApplication>(
            r#"
            SELECT id, vacancy_id, applicant_id, status, created_at
            FROM vacancy_applications
            WHERE applicant_id = $1
            "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        let results = sqlx::query_as::<_, ApplicantTestResult>(
            r#"
            SELECT id, applicant_id, vacancy_id, score, created_at
            FROM applicant_test_results
            WHERE applicant_id = $1
            "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        let tags = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT t.name
            FROM tags t
            JOIN vacancy_tags vt ON vt.tag_id = t.id
            JOIN vacancy_applications va ON va.vacancy_id = vt.vacancy_id
            WHERE va.applicant_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(summarize_applicant(&applications, &results, tags))
    }

    pub async fn employer_summary(&self, employer_id: i64) -> Result<EmployerAnalytics> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employers WHERE id = $1)")
                .bind(employer_id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(Error::NotFound("Employer not found".to_string()));
        }

        let total_jobs: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE employer_id = $1")
                .bind(employer_id)
                .fetch_one(&self.pool)
                .await?;

        let total_vacancies: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM vacancies v
            JOIN jobs j ON j.id = v.job_id
            WHERE j.employer_id = $1
            "#,
        )
        .bind(employer_id)
        .fetch_one(&self.pool)
        .await?;

        let active_vacancies: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM vacancies v
            JOIN jobs j ON j.id = v.job_id
            WHERE j.employer_id = $1 AND v.status = $2
            "#,
        )
        .bind(employer_id)
        .bind(VACANCY_OPEN)
        .fetch_one(&self.pool)
        .await?;

        let total_applications: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM vacancy_applications a
            JOIN vacancies v ON v.id = a.vacancy_id
            JOIN jobs j ON j.id = v.job_id
            WHERE j.employer_id = $1
            "#,
        )
        .bind(employer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(summarize_employer(
            total_jobs,
            total_vacancies,
            active_vacancies,
            total_applications,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(id: i64, status: ApplicationStatus) -> VacancyApplication {
        VacancyApplication {
            id,
            vacancy_id: id,
            applicant_id: 1,
            status: status.as_str().to_string(),
            created_at: None,
        }
    }

    fn result(id: i64, score: f64) -> ApplicantTestResult {
        ApplicantTestResult {
            id,
            applicant_id: 1,
            vacancy_id: id,
            score,
            created_at: None,
        }
    }

    #[test]
    fn applicant_summary_counts_and_averages() {
        let applications = vec![
            application(1, ApplicationStatus::Accepted),
            application(2, ApplicationStatus::Accepted),
            application(3, ApplicationStatus::Rejected),
        ];
        let results = vec![result(1, 80.0), result(2, 60.0)];
        let tags = vec!["backend".to_string(), "rust".to_string()];

        let summary = summarize_applicant(&applications, &results, tags.clone());
        assert_eq!(summary.total_applications, 3);
        assert_eq!(summary.accepted_applications, 2);
        assert_eq!(summary.rejected_applications, 1);
        assert_eq!(summary.average_test_score, 70.0);
        assert_eq!(summary.completed_tests, 2);
        assert_eq!(summary.tags, tags);
    }

    #[test]
    fn applicant_summary_with_no_results_has_zero_average() {
        let applications = vec![application(1, ApplicationStatus::Pending)];
        let summary = summarize_applicant(&applications, &[], Vec::new());
        assert_eq!(summary.average_test_score, 0.0);
        assert_eq!(summary.completed_tests, 0);
        assert_eq!(summary.accepted_applications, 0);
    }

    #[test]
    fn employer_summary_averages_applications_per_vacancy() {
        let summary = summarize_employer(2, 4, 3, 10);
        assert_eq!(summary.total_jobs, 2);
        assert_eq!(summary.total_vacancies, 4);
        assert_eq!(summary.active_vacancies, 3);
        assert_eq!(summary.total_applications, 10);
        assert_eq!(summary.average_applications_per_vacancy, 2.5);
    }

    #[test]
    fn employer_summary_with_no_vacancies_has_zero_average() {
        let summary = summarize_employer(1, 0, 0, 0);
        assert_eq!(summary.average_applications_per_vacancy, 0.0);
    }
}
