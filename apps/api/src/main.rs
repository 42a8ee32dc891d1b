mod analysis;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::pipeline::JobAnalyzer;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::memory::MemoryStore;
use crate::storage::redis_store::RedisStore;
use crate::storage::repository::AnalysisRepository;
use crate::storage::KvStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobprep v{}", env!("CARGO_PKG_VERSION"));

    // Storage backend: Redis when configured, otherwise in-process
    let store: Arc<dyn KvStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisStore::connect(url).await?),
        None => {
            warn!("REDIS_URL not set; analyses are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    // Keyword tables are compiled once here
    let analyzer = Arc::new(JobAnalyzer::new()?);

    let state = AppState {
        analyses: AnalysisRepository::new(store),
        analyzer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
