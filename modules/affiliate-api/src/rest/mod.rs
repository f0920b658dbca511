pub mod posts;
pub mod publish;
pub mod rewrite;

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::warn;

use affiliate_common::{AffiliateError, Platform};

use crate::AppState;

// --- Helpers ---

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

pub(crate) fn affiliate_error_response(err: &AffiliateError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, &err.to_string())
}

/// Unwrap a JSON body or answer 400 with the parse failure.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected request body");
            Err(error_response(
                StatusCode::BAD_REQUEST,
                &rejection.body_text(),
            ))
        }
    }
}

/// First `platform` value; repeats are ignored.
fn platform_param(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "platform")
        .map(|(_, value)| value)
}

// --- Social feed ---

/// Ranked popular posts. An unrecognized `platform` is ignored rather than rejected.
pub async fn api_social_posts(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let filter = match params {
        Ok(Query(pairs)) => platform_param(pairs),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Ignoring unreadable query string");
            None
        }
    }
    .and_then(|p| p.parse::<Platform>().ok());
    let posts = state.feed.popular_posts(filter).await;
    Json(serde_json::json!({ "posts": posts }))
}

pub async fn api_platforms() -> impl IntoResponse {
    let platforms: Vec<_> = Platform::ALL.iter().map(|p| p.style()).collect();
    Json(serde_json::json!({ "platforms": platforms }))
}
