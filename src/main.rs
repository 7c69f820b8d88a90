mod config;
mod config_manager;
mod error;
mod form;
mod languages;
mod llm;
mod render;
mod routes;
mod state;
mod translate;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("indic_translator=debug,tower_http=debug")),
        )
        .init();

    let config = Config::discover()?;

    // Client is built once and shared; it holds no per-request state
    let app_state = AppState::new(config.clone())?;
    let app = routes::app(app_state);

    let ip = config
        .server
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("Invalid server host: {}", config.server.host))?;
    let addr = SocketAddr::new(ip, config.server.port);
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
