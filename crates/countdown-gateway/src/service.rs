//! Gateway service - owns config and state, binds the listener.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::router::{build_router, AppState};
use axum::Router;
use countdown_core::{Clock, DatetimeManager, SystemClock};
use std::sync::Arc;
use tracing::info;

/// Countdown gateway service
pub struct GatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl GatewayService {
    /// Create a service reading the system clock
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a service with an injected clock (used by tests)
    pub fn with_clock(
        config: GatewayConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        let mut manager = DatetimeManager::new(clock);
        manager.set_utc_offset(config.clock.utc_offset_hours);
        manager.set_display_format(config.clock.twelve_hour);

        Ok(Self {
            config,
            state: AppState::new(manager),
        })
    }

    /// Shared handler state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Assemble the route table
    pub fn build_router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Bind the configured address and serve until the task is cancelled
    pub async fn run(&self) -> Result<(), GatewayError> {
        let addr = self.config.http_addr();
        let router = self.build_router();

        info!(addr = %addr, "Starting countdown gateway");
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
