use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower::ServiceExt;

use jobboard_backend::middleware::access_gate::gate_middleware;

async fn page() -> impl IntoResponse {
    "page"
}

fn shell() -> Router {
    Router::new()
        .route("/", get(page))
        .route("/login", get(page))
        .route("/registration", get(page))
        .route("/applicant/vacancies/:id", get(page))
        .route("/applicant/analytics/:id", get(page))
        .route("/employer/works/:id", get(page))
        .layer(axum::middleware::from_fn(gate_middleware))
}

fn request(path: &str, cookies: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn unauthenticated_requests_redirect_to_login() {
    let app = shell();

    for path in ["/", "/employer/works/9", "/applicant/vacancies/2"] {
        let resp = app.clone().oneshot(request(path, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "path {path}");
        assert_eq!(location(&resp), "/login", "path {path}");
    }
}

#[tokio::test]
async fn unauthenticated_requests_reach_login_and_registration() {
    let app = shell();

    for path in ["/login", "/registration"] {
        let resp = app.clone().oneshot(request(path, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn authenticated_request_to_login_redirects_home() {
    let app = shell();

    let resp = app
        .clone()
        .oneshot(request("/login", Some("id=3; role=applicant")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/applicant/vacancies/3");

    let resp = app
        .clone()
        .oneshot(request("/login", Some("id=4; role=employer")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/employer/works/4");
}

#[tokio::test]
async fn applicant_is_kept_out_of_the_employer_area() {
    let app = shell();

    let resp = app
        .oneshot(request("/employer/works/9", Some("id=3; role=applicant")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/applicant/vacancies/3");
}

#[tokio::test]
async fn employer_is_kept_out_of_the_applicant_area() {
    let app = shell();

    let resp = app
        .oneshot(request(
            "/applicant/vacancies/2",
            Some("id=4; role=employer"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/employer/works/4");
}

#[tokio::test]
async fn root_redirects_an_authenticated_session_home() {
    let app = shell();

    let resp = app
        .oneshot(request("/", Some("id=7; role=employer")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/employer/works/7");
}

#[tokio::test]
async fn own_area_is_served() {
    let app = shell();

    let resp = app
        .clone()
        .oneshot(request(
            "/applicant/analytics/3",
            Some("id=3; role=applicant"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(request("/employer/works/4", Some("id=4; role=employer")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_id_cookie_counts_as_unauthenticated() {
    let app = shell();

    let resp = app
        .oneshot(request(
            "/applicant/vacancies/2",
            Some("id=abc; role=applicant"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/login");
}
