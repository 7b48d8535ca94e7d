use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{dto::ApiResponse, error::Result, AppState};

#[axum::debug_handler]
pub async fn applicant_analytics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let summary = state.analytics_service.applicant_summary(id).await?;
    Ok(Json(ApiResponse::data(summary)))
}

#[axum::debug_handler]
pub async fn employer_analytics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let summary = state.analytics_service.employer_summary(id).await?;
    Ok(Json(ApiResponse::data(summary)))
}
