//! StopScout HTTP Server
//!
//! Main entry point for the web front end.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use infrastructure::{AppConfig, TemplateEngine, build_enrichment_service, init_tracing};
use presentation_http::{routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.telemetry).context("Failed to initialize logging")?;

    info!("StopScout v{} starting...", env!("CARGO_PKG_VERSION"));

    config.validate().context("Invalid configuration")?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        weather = config.weather_enabled(),
        "Configuration loaded"
    );

    let enrichment = build_enrichment_service(&config)
        .context("Failed to initialize enrichment service")?;
    let templates = TemplateEngine::new().context("Failed to load templates")?;

    let state = AppState {
        enrichment: Arc::new(enrichment),
        templates,
        unit_symbol: config.weather.units.symbol(),
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    server::serve_until(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
