pub mod app_state;
pub mod dtos;
pub mod handlers;
pub mod health;

pub use app_state::AppState;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

/// Article text can be long, but not unbounded.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::process_article, handlers::list_languages, health::health_check),
    components(schemas(
        dtos::ProcessArticleRequest,
        dtos::ProcessArticleResponse,
        dtos::LanguagesResponse,
        dtos::ErrorResponse,
        health::HealthResponse,
        crate::language::SupportedLanguage,
        crate::summarizer::FailureKind,
        crate::summarizer::ParseWarning,
    )),
    tags(
        (name = "articles", description = "Summarize and translate news articles"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/articles/process", post(handlers::process_article))
        .route("/v1/languages", get(handlers::list_languages))
        .route("/healthz", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
