use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{resume_dto::ResumePayload, ApiResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn get_resume(
    State(state): State<AppState>,
    Path(applicant_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let resume = state
        .resume_service
        .get_by_applicant(applicant_id)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("Resume not found".into()))?;

    Ok(Json(ApiResponse::data(resume)))
}

#[axum::debug_handler]
pub async fn create_resume(
    State(state): State<AppState>,
    Path(applicant_id): Path<i64>,
    Json(payload): Json<ResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let resume = state.resume_service.create(applicant_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with("Resume created", resume)),
    ))
}

#[axum::debug_handler]
pub async fn update_resume(
    State(state): State<AppState>,
    Path(applicant_id): Path<i64>,
    Json(payload): Json<ResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let resume = state.resume_service.update(applicant_id, payload).await?;
    Ok(Json(ApiResponse::with("Resume updated", resume)))
}

#[axum::debug_handler]
pub async fn delete_resume(
    State(state): State<AppState>,
    Path(applicant_id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.resume_service.delete(applicant_id).await?;
    Ok(Json(ApiResponse::message("Resume deleted")))
}
