pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    account_service::AccountService, analytics_service::AnalyticsService,
    application_service::ApplicationService, job_service::JobService,
    resume_service::ResumeService, tag_service::TagService, test_service::TestService,
    vacancy_service::VacancyService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub account_service: AccountService,
    pub job_service: JobService,
    pub vacancy_service: VacancyService,
    pub tag_service: TagService,
    pub test_service: TestService,
    pub resume_service: ResumeService,
    pub application_service: ApplicationService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let account_service = AccountService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let vacancy_service = VacancyService::new(pool.clone());
        let tag_service = TagService::new(pool.clone());
        let test_service = TestService::new(pool.clone());
        let resume_service = ResumeService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let analytics_service = AnalyticsService::new(pool.clone());

        Self {
            pool,
            account_service,
            job_service,
            vacancy_service,
            tag_service,
            test_service,
            resume_service,
            application_service,
            analytics_service,
        }
    }
}
