use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::test_dto::{TestPublic, TestWithQuestions};
use crate::models::application::VacancyApplication;
use crate::models::tag::Tag;
use crate::models::vacancy::Vacancy;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacancyPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub salary: Decimal,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Employer-side listing item: the vacancy with its tag set and, when
/// present, the full screening test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyDetail {
    #[serde(flatten)]
    pub vacancy: Vacancy,
    pub tags: Vec<Tag>,
    pub test: Option<TestWithQuestions>,
}

/// Applicant feed item: correct answers are stripped from the test, and
/// the applicant's own application is attached when the feed is filtered
/// to applied vacancies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyFeedItem {
    #[serde(flatten)]
    pub vacancy: Vacancy,
    pub job_title: String,
    pub employer_name: String,
    pub tags: Vec<Tag>,
    pub test: Option<TestPublic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<VacancyApplication>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyFeedQuery {
    pub applied: Option<bool>,
}
