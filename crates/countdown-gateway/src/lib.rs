// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! Countdown Gateway - HTTP interface for the new-year countdown service.
//!
//! Thin axum layer over [`countdown_core::DatetimeManager`]: handlers read
//! or mutate the shared manager and serialize its outputs. All decision
//! logic lives in the core crate.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   COUNTDOWN GATEWAY                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  GET  /                                   index page     │
//! │  GET  /static/*                           assets         │
//! │  GET  /api/current_datetime_now           JSON           │
//! │  GET  /api/time_of_year_style             JSON           │
//! │  GET  /api/countdown_timer_until_new_year_data  JSON     │
//! │  GET  /api/is_new_year_arrived_state      JSON           │
//! │  POST /set_time_format                    form → /       │
//! │  POST /set_time_zone                      form → /       │
//! │  GET  /health, /metrics                   ops            │
//! │                      │                                   │
//! │        ┌─────────────┴──────────────┐                    │
//! │        │   CORS → Trace middleware  │                    │
//! │        └─────────────┬──────────────┘                    │
//! │                      │                                   │
//! │        AppState { RwLock<DatetimeManager>, metrics }     │
//! └──────────────────────┼───────────────────────────────────┘
//!                        │
//!                 countdown-core
//! ```
//!
//! # Wire contract
//!
//! The JSON field names are consumed by the bundled front-end scripts and
//! must stay bit-exact; see [`responses`]. `new_year` and
//! `is_new_year_arrived` are serialized as strings.
//!
//! # Usage
//!
//! ```ignore
//! use countdown_gateway::{GatewayConfig, GatewayService};
//!
//! let service = GatewayService::new(GatewayConfig::default())?;
//! service.run().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod service;

pub use config::{ClockConfig, ConfigError, CorsConfig, GatewayConfig, HttpConfig};
pub use error::GatewayError;
pub use metrics::GatewayMetrics;
pub use router::AppState;
pub use service::GatewayService;
