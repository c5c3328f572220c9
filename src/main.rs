use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use research_mcp::config::ServerConfig;
use research_mcp::mcp::{router, AppState, ResearchServer};
use research_mcp::sources::ArxivSource;
use research_mcp::utils::PdfCache;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    // RUST_LOG takes precedence over the --log-level flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cache = PdfCache::new(&config.cache_path);
    cache
        .initialize()
        .with_context(|| format!("Failed to create cache directory {}", config.cache_path.display()))?;

    let server = ResearchServer::new(ArxivSource::new(), cache);
    let app = router(AppState::new(server));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, cache_path = %config.cache_path.display(), "research-mcp listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutting down");
}
