//! Configuration management for comment-raffle
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. The resulting [`Config`] is built once at start-up
//! and passed by reference into every entry point; nothing reads it from
//! global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Default comment listing endpoint; the article ID is appended as a path segment
pub const DEFAULT_API_BASE: &str = "https://blog.csdn.net/phoenix/web/v1/comment/list";

/// Browser-like user agent; the endpoint rejects requests without one
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Referer identifying the platform's own site
pub const DEFAULT_REFERER: &str = "https://blog.csdn.net/";

/// Largest page size the endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Comment API configuration
    pub api: ApiConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Comment API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Listing endpoint base URL
    pub base_url: String,

    /// User agent header value
    pub user_agent: String,

    /// Referer header value
    pub referer: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Comments requested per page
    pub page_size: u32,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// Enable permissive CORS
    pub enable_cors: bool,

    /// Enable request logging
    pub enable_request_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_url = std::env::var("RAFFLE_API_BASE").unwrap_or(defaults.api.base_url);

        let user_agent = std::env::var("RAFFLE_USER_AGENT").unwrap_or(defaults.api.user_agent);

        let referer = std::env::var("RAFFLE_REFERER").unwrap_or(defaults.api.referer);

        let request_timeout_secs = std::env::var("RAFFLE_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.api.request_timeout_secs);

        let bind_address = match std::env::var("RAFFLE_BIND_ADDRESS") {
            Ok(addr) => addr
                .parse::<SocketAddr>()
                .with_context(|| format!("Invalid RAFFLE_BIND_ADDRESS: {addr}"))?,
            Err(_) => defaults.server.bind_address,
        };

        let log_level = std::env::var("RAFFLE_LOG_LEVEL").unwrap_or(defaults.logging.level);

        let log_format = std::env::var("RAFFLE_LOG_FORMAT").unwrap_or(defaults.logging.format);

        Ok(Self {
            api: ApiConfig {
                base_url,
                user_agent,
                referer,
                request_timeout_secs,
                page_size: defaults.api.page_size,
            },
            server: ServerConfig {
                bind_address,
                ..defaults.server
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("base_url is not a valid URL: {}", self.api.base_url))?;

        if self.api.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            anyhow::bail!("page_size must be between 1 and {MAX_PAGE_SIZE}");
        }

        if self.api.user_agent.trim().is_empty() {
            anyhow::bail!("user_agent must not be empty");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::from(DEFAULT_API_BASE),
                user_agent: String::from(DEFAULT_USER_AGENT),
                referer: String::from(DEFAULT_REFERER),
                request_timeout_secs: 15,
                page_size: MAX_PAGE_SIZE,
            },
            server: ServerConfig {
                bind_address: SocketAddr::from(([0, 0, 0, 0], 8100)),
                enable_cors: true,
                enable_request_logging: true,
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
