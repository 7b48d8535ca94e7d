use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        account_dto::{ApplicantProfile, EmployerProfile},
        ApiResponse,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn get_employer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let employer = state
        .account_service
        .get_employer(id)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("Employer not found".into()))?;

    Ok(Json(ApiResponse::data(EmployerProfile::from(employer))))
}

#[axum::debug_handler]
pub async fn get_applicant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let applicant = state
        .account_service
        .get_applicant(id)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("Applicant not found".into()))?;

    Ok(Json(ApiResponse::data(ApplicantProfile::from(applicant))))
}
