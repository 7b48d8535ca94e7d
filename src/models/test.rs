use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Screening test attached to exactly one vacancy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Test {
    pub id: i64,
    pub vacancy_id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Multiple-choice question. `correct_answer` is the 1-indexed option
/// number (1..=4).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub test_id: i64,
    pub question_text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub correct_answer: i32,
}
