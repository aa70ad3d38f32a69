mod config;
mod errors;
mod layout;
mod models;
mod routes;
mod scoring;
mod state;
mod transfer;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, DistributionStrategy};
use crate::layout::{SectionDistributor, UniformDistributor, WeightedDistributor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every key has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the section distribution strategy (swap via SECTION_DISTRIBUTION)
    let distributor: Arc<dyn SectionDistributor> = match config.section_distribution {
        DistributionStrategy::Weighted => Arc::new(WeightedDistributor),
        DistributionStrategy::Uniform => Arc::new(UniformDistributor),
    };
    info!("Section distribution strategy: {}", distributor.name());

    // Build app state
    let state = AppState {
        config: config.clone(),
        distributor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
