//! Berlin Clock HTTP Server Binary
//!
//! This is the main entry point for the Berlin Clock REST API server.
//! It loads configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin berlin-clock-server
//!
//! # Explicit config file and port
//! BERLIN_CLOCK_CONFIG=./berlin-clock.toml PORT=9000 cargo run --bin berlin-clock-server
//! ```
//!
//! # Environment Variables
//!
//! - `BERLIN_CLOCK_CONFIG`: Path to a TOML config file (default: search for `berlin-clock.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CORS_ALLOWED_ORIGINS`: Comma-separated origins (default: `*`)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use berlin_clock::config::ServerConfig;
use berlin_clock::http::{create_router_with_cors, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Berlin Clock HTTP Server");

    let state = AppState::default();
    let app = create_router_with_cors(state, &config.cors);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
