use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use clap::Parser;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::prelude::*;

mod serve;

#[derive(Parser)]
#[command(name = "porthole")]
#[command(about = "Serves the embedded Porthole web UI")]
struct Cli {
    /// Port for the web server (0 = auto-select)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(short = 'b', long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_directive = if cli.debug {
        "porthole=debug,tower_http=debug,info"
    } else {
        "porthole=info,tower_http=info,warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    info!("Starting Porthole UI server");

    // Touch the bundle before binding so a bad package fails loudly at
    // startup instead of on the first request.
    let bundle = porthole_ui::store();
    porthole_ui::must_lookup("/index.html");
    info!("Embedded UI bundle: {} assets", bundle.len());

    let app = Router::new()
        .route("/health", get(health_handler))
        .fallback_service(serve::ui_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", cli.host, cli.port).parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Porthole listening on http://{}", actual_addr);
    info!("Web UI: http://{}/", actual_addr);

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received shutdown signal");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Health check endpoint - returns server status and bundle size
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "assets": porthole_ui::store().len(),
    }))
}
