use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::account_dto::ApplicantProfile;
use crate::models::application::VacancyApplication;
use crate::models::resume::Resume;
use crate::models::test_result::ApplicantTestResult;
use crate::models::vacancy::Vacancy;

/// One submitted answer: the chosen option number for a question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: i64,
    pub answer_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyPayload {
    pub vacancy_id: i64,
    /// Present iff the vacancy's screening test is being submitted.
    pub answers: Option<Vec<SubmittedAnswer>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawQuery {
    pub vacancy_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionPayload {
    pub accept: bool,
}

/// Outcome of an apply call; `score` is set on the screening-test path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSubmitted {
    pub application: VacancyApplication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// One application in the employer review feed, joined with the
/// applicant, their resume and their test result for this vacancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationReviewItem {
    pub application: VacancyApplication,
    pub applicant: ApplicantProfile,
    pub resume: Option<Resume>,
    pub test_result: Option<ApplicantTestResult>,
}

/// Employer review feed entry: a vacancy with its applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyApplicationsView {
    #[serde(flatten)]
    pub vacancy: Vacancy,
    pub applications: Vec<ApplicationReviewItem>,
}
