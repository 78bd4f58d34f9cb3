//! Island portfolio host: serves the server-rendered site and its assets.

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::SiteError;

#[tokio::main]
async fn main() -> Result<(), SiteError> {
    // Loaded before the subscriber so `.env` can set `RUST_LOG`.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = SiteConfig::from_env()?;
    tracing::info!(assets = %config.assets_dir.display(), "site configured");

    let app = routes::app(&config)?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| SiteError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "island site listening");
    axum::serve(listener, app).await.map_err(SiteError::Serve)
}
