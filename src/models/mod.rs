pub mod account;
pub mod application;
pub mod job;
pub mod resume;
pub mod tag;
pub mod test;
pub mod test_result;
pub mod vacancy;
