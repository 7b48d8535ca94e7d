use axum::{
    routing::{get, post, put},
    Router,
};
use jobboard_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let api = Router::new()
        .route("/api/auth/registration", post(routes::auth::registration))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/logout", post(routes::auth::logout))
        .route("/api/employers/:id", get(routes::account::get_employer))
        .route("/api/applicants/:id", get(routes::account::get_applicant))
        .route(
            "/api/employers/:id/jobs",
            get(routes::job::list_jobs).post(routes::job::create_job),
        )
        .route(
            "/api/jobs/:id",
            put(routes::job::update_job).delete(routes::job::delete_job),
        )
        .route(
            "/api/jobs/:id/vacancies",
            get(routes::vacancy::list_vacancies).post(routes::vacancy::create_vacancy),
        )
        .route(
            "/api/vacancies/:id",
            put(routes::vacancy::update_vacancy).delete(routes::vacancy::delete_vacancy),
        )
        .route(
            "/api/tags",
            get(routes::tag::list_tags).post(routes::tag::create_tag),
        )
        .route(
            "/api/vacancies/:id/test",
            get(routes::test::get_test)
                .post(routes::test::create_test)
                .delete(routes::test::delete_test),
        )
        .route("/api/tests/:id/questions", post(routes::test::add_question))
        .route(
            "/api/questions/:id",
            put(routes::test::update_question).delete(routes::test::delete_question),
        )
        .route(
            "/api/applicants/:id/resume",
            get(routes::resume::get_resume)
                .post(routes::resume::create_resume)
                .put(routes::resume::update_resume)
                .delete(routes::resume::delete_resume),
        )
        .route(
            "/api/applicants/:id/vacancies",
            get(routes::vacancy::applicant_feed),
        )
        .route(
            "/api/applicants/:id/applications",
            post(routes::application::apply).delete(routes::application::withdraw),
        )
        .route(
            "/api/vacancies/:id/applications/:applicant_id/decision",
            post(routes::application::decide),
        )
        .route(
            "/api/employers/:id/applications",
            get(routes::application::employer_review_feed),
        )
        .route(
            "/api/applicants/:id/analytics",
            get(routes::analytics::applicant_analytics),
        )
        .route(
            "/api/employers/:id/analytics",
            get(routes::analytics::employer_analytics),
        )
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    // Navigational shell: every page request passes the access gate first.
    let frontend_dir = std::env::var("FRONTEND_DIR").unwrap_or_else(|_| "./public".to_string());
    info!("Serving frontend from: {}", frontend_dir);
    let pages = Router::new()
        .fallback_service(tower_http::services::ServeDir::new(frontend_dir))
        .layer(axum::middleware::from_fn(
            middleware::access_gate::gate_middleware,
        ));

    let app = base_routes
        .merge(api)
        .with_state(app_state)
        .merge(pages)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
