use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use affiliate_common::{Platform, RewriteOptions};
use affiliate_core::{Rewriter, DEFAULT_VARIATION_COUNT};

use super::{error_response, json_body};
use crate::AppState;

const REWRITE_FAILED: &str = "Failed to rewrite content";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteBody {
    content: Option<String>,
    #[serde(default)]
    options: Option<RewriteOptions>,
    #[serde(default)]
    generate_multiple: bool,
}

#[derive(Deserialize)]
pub struct OptimizeBody {
    content: Option<String>,
    platform: Platform,
}

fn required_content(content: Option<String>) -> Result<String, Response> {
    content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "Content is required"))
}

fn rewriter(state: &AppState) -> Result<&Rewriter, Response> {
    state.rewriter.as_ref().ok_or_else(|| {
        warn!("Rewrite requested but no Anthropic key is configured");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, REWRITE_FAILED)
    })
}

pub async fn api_rewrite(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RewriteBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match json_body(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let content = match required_content(body.content) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let options = body.options.unwrap_or_default();

    // Variation attempts that fail are skipped, so no service means no variations.
    if body.generate_multiple {
        let variations = match state.rewriter.as_ref() {
            Some(rewriter) => {
                rewriter
                    .generate_variations(&content, DEFAULT_VARIATION_COUNT, &options)
                    .await
            }
            None => {
                warn!("Variations requested but no Anthropic key is configured");
                Vec::new()
            }
        };
        return Json(serde_json::json!({ "variations": variations })).into_response();
    }

    let rewriter = match rewriter(&state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match rewriter.rewrite(&content, &options).await {
        Ok(rewritten) => {
            info!(chars = rewritten.len(), "Rewrote content");
            Json(serde_json::json!({ "rewritten": rewritten })).into_response()
        }
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, REWRITE_FAILED),
    }
}

pub async fn api_optimize(
    State(state): State<Arc<AppState>>,
    body: Result<Json<OptimizeBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match json_body(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let content = match required_content(body.content) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let rewriter = match rewriter(&state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match rewriter.optimize_for_platform(&content, body.platform).await {
        Ok(rewritten) => Json(serde_json::json!({ "rewritten": rewritten })).into_response(),
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, REWRITE_FAILED),
    }
}
