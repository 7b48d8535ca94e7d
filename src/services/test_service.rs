use sqlx::PgPool;

use crate::dto::test_dto::QuestionPayload;
use crate::error::{Error, Result};
use crate::models::test::{Question, Test};

#[derive(Clone)]
pub struct TestService {
    pool: PgPool,
}

impl TestService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the vacancy's screening test. The one-test-per-vacancy
    /// invariant is the unique index on vacancy_id; a second create
    /// surfaces as Conflict.
    pub async fn create_for_vacancy(&self, vacancy_id: i64) -> Result<Test> {
        let vacancy_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM vacancies WHERE id = $1)")
                .bind(vacancy_id)
                .fetch_one(&self.pool)
                .await?;
        if !vacancy_exists {
            return Err(Error::NotFound("Vacancy not found".to_string()));
        }

        let test = sqlx::query_as::<_, Test>(
            r#"
            INSERT INTO tests (vacancy_id)
            VALUES ($1)
            RETURNING id, vacancy_id, created_at
            "#,
        )
        .bind(vacancy_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::Conflict("This vacancy already has a test".to_string())
            }
            other => other.into(),
        })?;

        Ok(test)
    }

    pub async fn get_by_vacancy(&self, vacancy_id: i64) -> Result<Option<Test>> {
        let test = sqlx::query_as::<_, Test>(
            "SELECT id, vacancy_id, created_at FROM tests WHERE vacancy_id = $1",
        )
        .bind(vacancy_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(test)
    }

    pub async fn delete_by_vacancy(&self, vacancy_id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM tests WHERE vacancy_id = $1")
            .bind(vacancy_id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Test not found".to_string()));
        }
        Ok(())
    }

    pub async fn questions_for_test(&self, test_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, test_id, question_text, option1, option2, option3, option4, correct_answer
            FROM questions
            WHERE test_id = $1
            ORDER BY id
            "#,
        )
        .bind(test_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn add_question(&self, test_id: i64, payload: QuestionPayload) -> Result<Question> {
        let test_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tests WHERE id = $1)")
                .bind(test_id)
                .fetch_one(&self.pool)
                .await?;
        if !test_exists {
            return Err(Error::NotFound("Test not found".to_string()));
        }

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (test_id, question_text, option1, option2, option3, option4, correct_answer)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, test_id, question_text, option1, option2, option3, option4, correct_answer
            "#,
        )
        .bind(test_id)
        .bind(&payload.question_text)
        .bind(&payload.option1)
        .bind(&payload.option2)
        .bind(&payload.option3)
        .bind(&payload.option4)
        .bind(payload.correct_answer)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn update_question(&self, id: i64, payload: QuestionPayload) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET question_text = $2, option1 = $3, option2 = $4, option3 = $5, option4 = $6, correct_answer = $7
            WHERE id = $1
            RETURNING id, test_id, question_text, option1, option2, option3, option4, correct_answer
            "#,
        )
        .bind(id)
        .bind(&payload.question_text)
        .bind(&payload.option1)
        .bind(&payload.option2)
        .bind(&payload.option3)
        .bind(&payload.option4)
        .bind(payload.correct_answer)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Question not found".to_string()))?;

        Ok(question)
    }

    pub async fn delete_question(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Question not found".to_string()));
        }
        Ok(())
    }
}
