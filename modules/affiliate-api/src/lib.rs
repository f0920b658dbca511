use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use typed_builder::TypedBuilder;

use affiliate_common::Config;
use affiliate_core::{PostStore, Publisher, Rewriter, SocialFeed};

pub mod rest;

/// Everything the handlers share. Built once at startup.
#[derive(TypedBuilder)]
pub struct AppState {
    pub feed: SocialFeed,
    #[builder(default)]
    pub rewriter: Option<Rewriter>,
    #[builder(default)]
    pub publisher: Publisher,
    #[builder(default = PostStore::with_samples())]
    pub store: PostStore,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self::builder()
            .feed(SocialFeed::from_config(config))
            .rewriter(Rewriter::from_config(config))
            .publisher(Publisher::from_config(config))
            .build()
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Social feed + publishing
        .route("/api/social/posts", get(rest::api_social_posts))
        .route("/api/social/platforms", get(rest::api_platforms))
        .route("/api/social/post", post(rest::publish::api_publish))
        // Rewriting
        .route("/api/rewrite", post(rest::rewrite::api_rewrite))
        .route("/api/rewrite/optimize", post(rest::rewrite::api_optimize))
        // Blog catalogue
        .route(
            "/api/posts",
            get(rest::posts::api_posts).post(rest::posts::api_create_post),
        )
        .route("/api/posts/{id}", get(rest::posts::api_post_detail))
        .with_state(state)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
