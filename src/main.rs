// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::load_config;
use crate::infrastructure::newsapi_client::NewsApiClient;
use crate::infrastructure::openweather_client::OpenWeatherClient;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = load_config()?;
    config.warn_on_missing_keys();

    // Create upstream clients (infrastructure layer)
    let weather_source = Arc::new(OpenWeatherClient::new(&config.weather)?);
    let news_source = Arc::new(NewsApiClient::new(&config.news)?);

    // Create services (application layer)
    let state = Arc::new(AppState::new(weather_source, news_source));

    // Build router (presentation layer)
    let router = build_router(state, &config.server.static_dir);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, static_dir = %config.server.static_dir, "city dashboard listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. A signal that cannot be installed never resolves.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        // Without a handler the server keeps running until killed
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
