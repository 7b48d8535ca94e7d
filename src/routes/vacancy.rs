use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        test_dto::{TestPublic, TestWithQuestions},
        vacancy_dto::{VacancyDetail, VacancyFeedItem, VacancyFeedQuery, VacancyPayload},
        ApiResponse,
    },
    error::Result,
    models::vacancy::Vacancy,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs/{id}/vacancies",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Vacancies under the job", body = Json<Vec<VacancyDetail>>)
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let vacancies = state.vacancy_service.list_for_job(job_id).await?;

    let mut items = Vec::with_capacity(vacancies.len());
    for vacancy in vacancies {
        items.push(vacancy_detail(&state, vacancy).await?);
    }

    Ok(Json(ApiResponse::data(items)))
}

#[utoipa::path(
    post,
    path = "/api/jobs/{id}/vacancies",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    request_body = VacancyPayload,
    responses(
        (status = 201, description = "Vacancy created successfully", body = Json<Vacancy>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    Json(payload): Json<VacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let vacancy = state.vacancy_service.create(job_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with("Vacancy created", vacancy)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    request_body = VacancyPayload,
    responses(
        (status = 200, description = "Vacancy updated successfully", body = Json<Vacancy>),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<VacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let vacancy = state.vacancy_service.update(id, payload).await?;
    Ok(Json(ApiResponse::with("Vacancy updated", vacancy)))
}

#[utoipa::path(
    delete,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy deleted successfully"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.vacancy_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Vacancy deleted")))
}

#[utoipa::path(
    get,
    path = "/api/applicants/{id}/vacancies",
    params(
        ("id" = i64, Path, description = "Applicant ID"),
        ("applied" = Option<bool>, Query, description = "Return applied vacancies instead of the open feed")
    ),
    responses(
        (status = 200, description = "Vacancy feed", body = Json<Vec<VacancyFeedItem>>)
    )
)]
#[axum::debug_handler]
pub async fn applicant_feed(
    State(state): State<AppState>,
    Path(applicant_id): Path<i64>,
    Query(query): Query<VacancyFeedQuery>,
) -> Result<impl IntoResponse> {
    let applied = query.applied.unwrap_or(false);
    let rows = if applied {
        state.vacancy_service.feed_applied(applicant_id).await?
    } else {
        state.vacancy_service.feed_unapplied(applicant_id).await?
    };

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let (vacancy, job_title, employer_name) = row.into_vacancy();
        let tags = state.tag_service.tags_for_vacancy(vacancy.id).await?;

        let test = match state.test_service.get_by_vacancy(vacancy.id).await? {
            Some(test) => {
                let questions = state.test_service.questions_for_test(test.id).await?;
                Some(TestPublic::new(test, questions))
            }
            None => None,
        };

        let application = if applied {
            state
                .application_service
                .find_pair(vacancy.id, applicant_id)
                .await?
        } else {
            None
        };

        items.push(VacancyFeedItem {
            vacancy,
            job_title,
            employer_name,
            tags,
            test,
            application,
        });
    }

    Ok(Json(ApiResponse::data(items)))
}

async fn vacancy_detail(state: &AppState, vacancy: Vacancy) -> Result<VacancyDetail> {
    let tags = state.tag_service.tags_for_vacancy(vacancy.id).await?;
    let test = match state.test_service.get_by_vacancy(vacancy.id).await? {
        Some(test) => {
            let questions = state.test_service.questions_for_test(test.id).await?;
            Some(TestWithQuestions::new(test, questions))
        }
        None => None,
    };

    Ok(VacancyDetail {
        vacancy,
        tags,
        test,
    })
}
