pub mod account_service;
pub mod analytics_service;
pub mod application_service;
pub mod job_service;
pub mod resume_service;
pub mod scoring;
pub mod tag_service;
pub mod test_service;
pub mod vacancy_service;
