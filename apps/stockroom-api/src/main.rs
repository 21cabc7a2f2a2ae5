//! Stockroom API - Product Catalog Service
//!
//! HTTP service exposing CRUD operations over an in-memory product catalog.
//!
//! # Environment Variables
//!
//! * `STOCKROOM_HOST` - Server host (default: 0.0.0.0)
//! * `STOCKROOM_PORT` - Server port (default: 8080)
//! * `STOCKROOM_SEED_PATH` - JSON file used to seed the catalog (default: products.json)
//! * `API_TOKEN` - Token required in the `Authorization` header of write requests
//! * `STOCKROOM_ALLOW_ZERO_QUANTITY` / `STOCKROOM_ALLOW_ZERO_PRICE` - Accept zero values (default: false)
//! * `STOCKROOM_LOG_FORMAT` - `text` or `json` (default: text)
//! * `RUST_LOG` - Log filter (default: info)

use anyhow::{Context, Result};
use stockroom_api::{
    config::{ApiConfig, LogFormat},
    routes, AppState,
};
use stockroom_domain::product::{ProductService, ProductServiceConfig};
use stockroom_memory::{load_products, InMemoryProductRepository};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(config.log_format);

    info!(addr = %config.server_addr(), "Starting Stockroom API");

    // A missing or unreadable seed file is not fatal
    let seed = match load_products(&config.seed_path) {
        Ok(products) => products,
        Err(err) => {
            warn!(error = %err, "Could not load seed products, starting with an empty catalog");
            Vec::new()
        }
    };

    let repository = InMemoryProductRepository::with_products(seed);
    let service = ProductService::new(
        repository,
        ProductServiceConfig {
            validation: config.validation,
        },
    );

    if config.api_token.is_none() {
        warn!("API_TOKEN not set, write endpoints are unauthenticated");
    }

    let state = AppState::new(service, config.api_token.clone());
    let app = routes::create_router(state);

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

/// Waits for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
