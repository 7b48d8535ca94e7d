use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        test_dto::{QuestionPayload, TestWithQuestions},
        ApiResponse,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn get_test(
    State(state): State<AppState>,
    Path(vacancy_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let test = state
        .test_service
        .get_by_vacancy(vacancy_id)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("Test not found".into()))?;
    let questions = state.test_service.questions_for_test(test.id).await?;

    Ok(Json(ApiResponse::data(TestWithQuestions::new(
        test, questions,
    ))))
}

#[axum::debug_handler]
pub async fn create_test(
    State(state): State<AppState>,
    Path(vacancy_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let test = state.test_service.create_for_vacancy(vacancy_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with("Test created", test)),
    ))
}

#[axum::debug_handler]
pub async fn delete_test(
    State(state): State<AppState>,
    Path(vacancy_id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.test_service.delete_by_vacancy(vacancy_id).await?;
    Ok(Json(ApiResponse::message("Test deleted")))
}

#[axum::debug_handler]
pub async fn add_question(
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.test_service.add_question(test_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with("Question added", question)),
    ))
}

#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.test_service.update_question(id, payload).await?;
    Ok(Json(ApiResponse::with("Question updated", question)))
}

#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.test_service.delete_question(id).await?;
    Ok(Json(ApiResponse::message("Question deleted")))
}
