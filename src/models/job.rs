use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}
