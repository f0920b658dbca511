use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::warn;

use affiliate_common::PostDraft;

use super::{affiliate_error_response, error_response, json_body};
use crate::AppState;

pub async fn api_posts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let posts = state.store.all().await;
    Json(serde_json::json!({ "posts": posts }))
}

pub async fn api_post_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&id).await {
        Some(post) => Json(post).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Post not found"),
    }
}

pub async fn api_create_post(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PostDraft>, JsonRejection>,
) -> impl IntoResponse {
    let draft = match json_body(body) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    match state.store.add(draft).await {
        Ok(post) => (StatusCode::CREATED, Json(post)).into_response(),
        Err(e) => {
            warn!(error = %e, "Rejected post draft");
            affiliate_error_response(&e)
        }
    }
}
