mod models;
mod handlers;
mod routes;
mod docs;
mod config;

use utoipa::OpenApi;
use routes::create_app;
use docs::ApiDoc;
use config::Config;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use std::panic;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration before tracing so the filter can follow it
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()))
        .init();

    info!("Starting server...");

    match &loaded {
        Ok(_) => info!("✅ Configuration loaded successfully"),
        Err(e) => {
            error!("❌ Failed to load configuration: {}", e);
            warn!("Using default configuration");
        }
    }

    if config.debug && config.is_production() {
        warn!(environment = %config.environment, "Debug logging is enabled in production");
    }

    let app = create_app(&config);

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;

    info!("🚀 Server running on http://{}", config.server_address());
    for path in ApiDoc::openapi().paths.paths.keys() {
        info!("🩺 GET http://{}{}", config.server_address(), path);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
