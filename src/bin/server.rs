//! Metric-Imperial Converter HTTP Server Binary
//!
//! This is the main entry point for the converter REST API server.
//! It loads the configuration, builds the unit table, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the compatibility catalog (default)
//! cargo run --bin mic-server
//!
//! # Run with the full catalog
//! UNIT_PROFILE=full cargo run --bin mic-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `UNIT_PROFILE`: Unit catalog profile, `compat` or `full` (default: compat)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mic_rust::config::{AppConfig, ConfigError};
use mic_rust::http::{create_router, AppState};
use mic_rust::registry::UnitTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Metric-Imperial Converter HTTP Server");

    // Load configuration, falling back to defaults when no file is present
    let mut config = match AppConfig::from_default_location() {
        Ok(config) => config,
        Err(ConfigError::NotFound) => {
            info!("No converter.toml found, using default configuration");
            AppConfig::default()
        }
        Err(e) => return Err(e.into()),
    };
    config.apply_env_overrides();

    // Build the unit table once; handlers share it read-only
    let profile = config.unit_profile()?;
    let table = UnitTable::with_profile(profile)?;
    info!("Unit table ready: profile={}, units={}", profile, table.len());

    // Create application state
    let state = AppState::new(table);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = config.bind_addr().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Try http://{}/api/convert?input=4gal", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
