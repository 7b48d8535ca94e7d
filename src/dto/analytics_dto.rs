use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantAnalytics {
    pub total_applications: i64,
    pub accepted_applications: i64,
    pub rejected_applications: i64,
    pub average_test_score: f64,
    pub completed_tests: i64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerAnalytics {
    pub total_jobs: i64,
    pub total_vacancies: i64,
    pub active_vacancies: i64,
    pub total_applications: i64,
    pub average_applications_per_vacancy: f64,
}
