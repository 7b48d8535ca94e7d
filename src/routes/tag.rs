use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{dto::ApiResponse, error::Result, AppState};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TagPayload {
    #[validate(length(min = 1))]
    pub name: String,
}

#[axum::debug_handler]
pub async fn list_tags(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let tags = state.tag_service.list().await?;
    Ok(Json(ApiResponse::data(tags)))
}

#[axum::debug_handler]
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<TagPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let tag = state.tag_service.create(&payload.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with("Tag created", tag)),
    ))
}
