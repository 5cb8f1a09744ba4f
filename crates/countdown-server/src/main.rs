//! # New Year Countdown Server
//!
//! Entry point for the countdown web service: initializes logging, loads
//! configuration from the environment, and runs the gateway until Ctrl+C.
//!
//! ## Environment variables
//!
//! - `COUNTDOWN_HOST` - bind address (default `127.0.0.1`)
//! - `COUNTDOWN_PORT` - listening port (default `8000`)
//! - `COUNTDOWN_STATIC_DIR` - directory served under `/static` (default `static`)
//! - `COUNTDOWN_UTC_OFFSET` - initial whole-hour UTC offset (default `0`)
//! - `COUNTDOWN_TIME_FORMAT` - `pm` for 12-hour display, anything else for 24-hour
//! - `RUST_LOG` - tracing filter (default `info`)

use anyhow::{Context, Result};
use countdown_gateway::{GatewayConfig, GatewayService};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Load configuration from environment overrides on top of defaults.
fn load_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();

    if let Ok(host) = std::env::var("COUNTDOWN_HOST") {
        match host.parse() {
            Ok(h) => config.http.host = h,
            Err(_) => warn!(host = %host, "COUNTDOWN_HOST is not a valid IP address, keeping default"),
        }
    }

    if let Ok(port) = std::env::var("COUNTDOWN_PORT") {
        match port.parse() {
            Ok(p) => config.http.port = p,
            Err(_) => warn!(port = %port, "COUNTDOWN_PORT is not a valid port, keeping default"),
        }
    }

    if let Ok(dir) = std::env::var("COUNTDOWN_STATIC_DIR") {
        config.static_dir = dir.into();
    }

    if let Ok(offset) = std::env::var("COUNTDOWN_UTC_OFFSET") {
        match offset.parse() {
            Ok(hours) => config.clock.utc_offset_hours = hours,
            Err(_) => warn!(offset = %offset, "COUNTDOWN_UTC_OFFSET is not an integer, keeping default"),
        }
    }

    if let Ok(format) = std::env::var("COUNTDOWN_TIME_FORMAT") {
        config.clock.twelve_hour = format == "pm";
    }

    config
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = load_config();
    let service = GatewayService::new(config).context("invalid gateway configuration")?;

    info!("New Year Countdown server starting. Press Ctrl+C to stop.");

    tokio::select! {
        result = service.run() => {
            result.context("gateway server failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, stopping");
        }
    }

    Ok(())
}
