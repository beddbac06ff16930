use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::{
        app_state::AppState,
        dtos::{ErrorResponse, LanguagesResponse, ProcessArticleRequest, ProcessArticleResponse},
    },
    language::SupportedLanguage,
    pipeline,
    summarizer::{FailureKind, TranslationResult},
};

fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::InvalidInput => StatusCode::BAD_REQUEST,
        FailureKind::EmptyArticle => StatusCode::UNPROCESSABLE_ENTITY,
        FailureKind::Fetch | FailureKind::ApiRequest | FailureKind::ApiResponseShape => {
            StatusCode::BAD_GATEWAY
        }
    }
}

#[utoipa::path(
    post,
    path = "/v1/articles/process",
    tag = "articles",
    request_body = ProcessArticleRequest,
    responses(
        (status = 200, description = "Summary and translation", body = ProcessArticleResponse),
        (status = 400, description = "Neither text nor URL supplied", body = ErrorResponse),
        (status = 422, description = "Page held no readable text", body = ErrorResponse),
        (status = 502, description = "Fetch or LLM call failed", body = ErrorResponse)
    )
)]
pub async fn process_article(
    State(state): State<AppState>,
    Json(payload): Json<ProcessArticleRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error,
                kind: FailureKind::InvalidInput,
            }),
        )
            .into_response();
    }

    let result = pipeline::process_article(
        state.summarizer.as_ref(),
        payload.text.as_deref(),
        payload.url.as_deref(),
        payload.language,
    )
    .await;

    match result {
        TranslationResult::Success {
            summary,
            translation,
            warning,
        } => (
            StatusCode::OK,
            Json(ProcessArticleResponse {
                summary,
                translation,
                language: payload.language,
                warning,
            }),
        )
            .into_response(),
        TranslationResult::Failure { kind, message } => (
            status_for(kind),
            Json(ErrorResponse {
                error: message,
                kind,
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/v1/languages",
    tag = "articles",
    responses(
        (status = 200, description = "Supported target languages", body = LanguagesResponse)
    )
)]
pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: SupportedLanguage::all().collect(),
    })
}
