//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Initial clock settings applied to the datetime manager
    pub clock: ClockConfig,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            cors: CorsConfig::default(),
            clock: ClockConfig::default(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.static_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyStaticDir);
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Listening port
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Whether to restrict cross-origin access
    pub enabled: bool,
    /// Allowed origins; `"*"` allows any
    pub allowed_origins: Vec<String>,
    /// Allowed HTTP methods
    pub allowed_methods: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string()],
        }
    }
}

/// Initial clock settings for the datetime manager
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Whole-hour UTC offset, unvalidated by design
    pub utc_offset_hours: i32,
    /// 12-hour display when true
    pub twelve_hour: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 0,
            twelve_hour: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("http port cannot be 0")]
    InvalidPort,

    #[error("static directory path cannot be empty")]
    EmptyStaticDir,
}
