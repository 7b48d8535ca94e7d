use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::test::{Question, Test};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionPayload {
    #[validate(length(min = 1))]
    pub question_text: String,
    #[validate(length(min = 1))]
    pub option1: String,
    #[validate(length(min = 1))]
    pub option2: String,
    #[validate(length(min = 1))]
    pub option3: String,
    #[validate(length(min = 1))]
    pub option4: String,
    /// 1-indexed option number.
    #[validate(range(min = 1, max = 4))]
    pub correct_answer: i32,
}

/// Employer-facing view: full questions including the correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestWithQuestions {
    pub id: i64,
    pub vacancy_id: i64,
    pub questions: Vec<Question>,
}

impl TestWithQuestions {
    pub fn new(test: Test, questions: Vec<Question>) -> Self {
        Self {
            id: test.id,
            vacancy_id: test.vacancy_id,
            questions,
        }
    }
}

/// Applicant-facing question: the correct answer is stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPublic {
    pub id: i64,
    pub test_id: i64,
    pub question_text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
}

impl From<Question> for QuestionPublic {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            test_id: value.test_id,
            question_text: value.question_text,
            option1: value.option1,
            option2: value.option2,
            option3: value.option3,
            option4: value.option4,
        }
    }
}

/// Applicant-facing view of a vacancy's screening test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestPublic {
    pub id: i64,
    pub vacancy_id: i64,
    pub questions: Vec<QuestionPublic>,
}

impl TestPublic {
    pub fn new(test: Test, questions: Vec<Question>) -> Self {
        Self {
            id: test.id,
            vacancy_id: test.vacancy_id,
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }
}
