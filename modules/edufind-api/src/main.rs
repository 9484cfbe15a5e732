use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use edufind_api::{build_router, parse_origins, AppState};
use edufind_common::Config;
use edufind_scout::ResourcePipeline;
use serper_client::SerperClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("edufind=info,serper_client=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let allowed_origins = parse_origins(&config.allowed_origins)?;

    let mut searcher = SerperClient::new(config.serper_api_key.clone(), config.search_timeout)?;
    if let Some(base_url) = &config.serper_base_url {
        searcher = searcher.with_base_url(base_url);
    }
    if !searcher.has_api_key() {
        warn!("SERPER_API_KEY is not set; every search will fail until it is configured");
    }

    let pipeline =
        ResourcePipeline::new(Arc::new(searcher)).with_page_size(config.search_page_size);
    let state = Arc::new(AppState::new(pipeline));

    let app = build_router(state, &allowed_origins);

    let addr = config.bind_addr();
    info!("EduFind API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
