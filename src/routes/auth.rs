use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        auth_dto::{AuthUser, LoginPayload, RegistrationPayload},
        ApiResponse,
    },
    error::Result,
    models::account::Role,
    utils::cookies::{clear_cookie, session_cookie},
    AppState,
};

fn session_headers(user: &AuthUser) -> AppendHeaders<[(header::HeaderName, String); 2]> {
    AppendHeaders([
        (header::SET_COOKIE, session_cookie("id", &user.id.to_string())),
        (header::SET_COOKIE, session_cookie("role", user.role.as_str())),
    ])
}

#[axum::debug_handler]
pub async fn registration(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let message = match payload.role {
        Role::Employer => "Welcome, employer",
        Role::Applicant => "Welcome, applicant",
    };

    let account = state.account_service.register(payload).await?;
    let user = AuthUser::from(&account);

    Ok((
        StatusCode::CREATED,
        session_headers(&user),
        Json(ApiResponse::with(message, user)),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let account = state.account_service.login(payload).await?;
    let user = AuthUser::from(&account);

    Ok((
        StatusCode::OK,
        session_headers(&user),
        Json(ApiResponse::with("Signed in", user)),
    ))
}

#[axum::debug_handler]
pub async fn logout() -> Result<impl IntoResponse> {
    let headers = AppendHeaders([
        (header::SET_COOKIE, clear_cookie("id")),
        (header::SET_COOKIE, clear_cookie("role")),
    ]);

    Ok((
        StatusCode::OK,
        headers,
        Json(ApiResponse::message("Signed out")),
    ))
}
