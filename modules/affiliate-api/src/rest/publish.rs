use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{error, info};

use affiliate_common::Platform;
use affiliate_core::PublishRequest;

use super::{affiliate_error_response, error_response, json_body};
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishBody {
    platform: Option<String>,
    content: Option<String>,
    image_url: Option<String>,
    video_url: Option<String>,
}

pub async fn api_publish(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PublishBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match json_body(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let (platform, content) = match (body.platform, body.content) {
        (Some(p), Some(c)) if !p.is_empty() && !c.is_empty() => (p, c),
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Platform and content are required",
            )
        }
    };

    let Ok(platform) = platform.parse::<Platform>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid platform");
    };

    let request = PublishRequest {
        platform,
        content,
        image_url: body.image_url,
        video_url: body.video_url,
    };

    match state.publisher.publish(&request).await {
        Ok(receipt) => {
            info!(%platform, id = %receipt.id, "Published post");
            Json(serde_json::json!({
                "success": true,
                "message": receipt.message,
            }))
            .into_response()
        }
        Err(e) => {
            error!(%platform, error = %e, "Error posting to social media");
            affiliate_error_response(&e)
        }
    }
}
