use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use affiliate_api::{build_router, AppState};
use affiliate_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("affiliate=info".parse()?)
                .add_directive("social_client=info".parse()?)
                .add_directive("ai_client=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    if config.anthropic_api_key.is_none() {
        info!("ANTHROPIC_API_KEY not set, rewrite endpoints will return errors");
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = build_router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Affiliate API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
