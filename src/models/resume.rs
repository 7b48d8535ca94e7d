use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub id: i64,
    pub applicant_id: i64,
    pub personal_info: String,
    pub work_experience: String,
    pub created_at: Option<DateTime<Utc>>,
}
