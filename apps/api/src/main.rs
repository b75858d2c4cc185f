mod config;
mod errors;
mod generation;
mod publishing;
mod routes;
mod state;
mod wordpress_client;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::publishing::gateway::Publisher;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wordpress_client::WordPressClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quillpress API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Simulated latency: generate={}ms analyze={}ms",
        config.generate_delay_ms, config.analyze_delay_ms
    );

    // Initialize publish gateway
    let publisher: Arc<dyn Publisher> =
        Arc::new(WordPressClient::new(config.wordpress_timeout())?);
    info!(
        "WordPress client initialized (timeout: {}s)",
        config.wordpress_timeout_secs
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        publisher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the browser UI is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
