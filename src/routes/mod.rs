pub mod account;
pub mod analytics;
pub mod application;
pub mod auth;
pub mod health;
pub mod job;
pub mod resume;
pub mod tag;
pub mod test;
pub mod vacancy;
