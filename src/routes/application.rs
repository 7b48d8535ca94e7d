use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        account_dto::ApplicantProfile,
        application_dto::{
            ApplicationReviewItem, ApplicationSubmitted, ApplyPayload, DecisionPayload,
            VacancyApplicationsView, WithdrawQuery,
        },
        ApiResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/applicants/{id}/applications",
    params(
        ("id" = i64, Path, description = "Applicant ID")
    ),
    request_body = ApplyPayload,
    responses(
        (status = 201, description = "Application submitted", body = Json<ApplicationSubmitted>),
        (status = 400, description = "Resume missing or answers do not match the vacancy"),
        (status = 404, description = "Applicant, vacancy or questions not found"),
        (status = 409, description = "Application for this vacancy already exists")
    )
)]
#[axum::debug_handler]
pub async fn apply(
    State(state): State<AppState>,
    Path(applicant_id): Path<i64>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    let submitted: ApplicationSubmitted = state
        .application_service
        .apply(payload.vacancy_id, applicant_id, payload.answers)
        .await?;

    let message = match submitted.score {
        Some(score) => format!("Test completed, your score: {}%", score),
        None => "Application submitted".to_string(),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with(message, submitted)),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/applicants/{id}/applications",
    params(
        ("id" = i64, Path, description = "Applicant ID"),
        ("vacancy_id" = i64, Query, description = "Vacancy the application belongs to")
    ),
    responses(
        (status = 200, description = "Application withdrawn"),
        (status = 404, description = "No application for this vacancy")
    )
)]
#[axum::debug_handler]
pub async fn withdraw(
    State(state): State<AppState>,
    Path(applicant_id): Path<i64>,
    Query(query): Query<WithdrawQuery>,
) -> Result<impl IntoResponse> {
    state
        .application_service
        .withdraw(query.vacancy_id, applicant_id)
        .await?;

    Ok(Json(ApiResponse::message("Application withdrawn")))
}

#[utoipa::path(
    post,
    path = "/api/vacancies/{id}/applications/{applicant_id}/decision",
    params(
        ("id" = i64, Path, description = "Vacancy ID"),
        ("applicant_id" = i64, Path, description = "Applicant ID")
    ),
    request_body = DecisionPayload,
    responses(
        (status = 200, description = "Decision stored"),
        (status = 404, description = "Application not found"),
        (status = 409, description = "Application already decided")
    )
)]
#[axum::debug_handler]
pub async fn decide(
    State(state): State<AppState>,
    Path((vacancy_id, applicant_id)): Path<(i64, i64)>,
    Json(payload): Json<DecisionPayload>,
) -> Result<impl IntoResponse> {
    let application = state
        .application_service
        .decide(vacancy_id, applicant_id, payload.accept)
        .await?;

    Ok(Json(ApiResponse::with("Decision stored", application)))
}

#[utoipa::path(
    get,
    path = "/api/employers/{id}/applications",
    params(
        ("id" = i64, Path, description = "Employer ID")
    ),
    responses(
        (status = 200, description = "Vacancies with their applications", body = Json<Vec<VacancyApplicationsView>>)
    )
)]
#[axum::debug_handler]
pub async fn employer_review_feed(
    State(state): State<AppState>,
    Path(employer_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let vacancies = state
        .vacancy_service
        .list_with_applications_for_employer(employer_id)
        .await?;

    let mut views = Vec::with_capacity(vacancies.len());
    for vacancy in vacancies {
        let applications = state.application_service.list_for_vacancy(vacancy.id).await?;

        let mut items = Vec::with_capacity(applications.len());
        for application in applications {
            let applicant = match state
                .account_service
                .get_applicant(application.applicant_id)
                .await?
            {
                Some(applicant) => ApplicantProfile::from(applicant),
                None => continue,
            };
            let resume = state
                .resume_service
                .get_by_applicant(application.applicant_id)
                .await?;
            let test_result = state
                .application_service
                .result_for_pair(vacancy.id, application.applicant_id)
                .await?;

            items.push(ApplicationReviewItem {
                application,
                applicant,
                resume,
                test_result,
            });
        }

        views.push(VacancyApplicationsView {
            vacancy,
            applications: items,
        });
    }

    Ok(Json(ApiResponse::data(views)))
}
