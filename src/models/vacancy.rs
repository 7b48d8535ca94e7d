use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const VACANCY_OPEN: &str = "open";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i64,
    pub job_id: i64,
    pub title: String,
    pub description: String,
    pub salary: Decimal,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}
