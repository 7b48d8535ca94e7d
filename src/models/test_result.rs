use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored outcome of a completed screening test, keyed by the unique
/// (applicant_id, vacancy_id) pair. Deleted together with the matching
/// application on withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantTestResult {
    pub id: i64,
    pub applicant_id: i64,
    pub vacancy_id: i64,
    pub score: f64,
    pub created_at: Option<DateTime<Utc>>,
}
