use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{job_dto::JobPayload, ApiResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Path(employer_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_for_employer(employer_id).await?;
    Ok(Json(ApiResponse::data(jobs)))
}

#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Path(employer_id): Path<i64>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(employer_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with("Job created", job)),
    ))
}

#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(ApiResponse::with("Job updated", job)))
}

#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Job deleted")))
}
