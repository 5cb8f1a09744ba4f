//! Gateway error types.
//!
//! The countdown endpoints themselves are total; errors arise only from
//! configuration and from binding/serving the listener.

use crate::config::ConfigError;

/// Top-level gateway error
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Listener bind or serve failure
    #[error("server i/o error: {0}")]
    Io(#[from] std::io::Error),
}
