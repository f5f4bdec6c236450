//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `UPSTREAM_BASE_URL` - Breed API base URL (default: `https://catfact.ninja`)
//! - `RESPONSE_LOG_PATH` - File receiving raw upstream bodies (default: `response.txt`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export UPSTREAM_BASE_URL="http://localhost:9000"
//! export RESPONSE_LOG_PATH="/var/log/cat-breeds/response.txt"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://catfact.ninja";
pub const DEFAULT_RESPONSE_LOG_PATH: &str = "response.txt";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Base URL of the paginated breed API; `/breeds?page=N` is appended.
    pub upstream_base_url: String,
    /// Append-only file receiving every raw upstream response body.
    pub response_log_path: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            response_log_path: DEFAULT_RESPONSE_LOG_PATH.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or(defaults.upstream_base_url),
            response_log_path: env::var("RESPONSE_LOG_PATH")
                .unwrap_or(defaults.response_log_path),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `log_format` is not `text` or `json`
    /// - `upstream_base_url` is not an absolute http/https URL
    /// - `response_log_path` is empty
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let upstream = Url::parse(&self.upstream_base_url).with_context(|| {
            format!(
                "UPSTREAM_BASE_URL is not a valid URL: '{}'",
                self.upstream_base_url
            )
        })?;
        if !matches!(upstream.scheme(), "http" | "https") {
            anyhow::bail!(
                "UPSTREAM_BASE_URL must use http or https, got '{}'",
                self.upstream_base_url
            );
        }

        if self.response_log_path.trim().is_empty() {
            anyhow::bail!("RESPONSE_LOG_PATH must not be empty");
        }

        Ok(())
    }

    /// Parses the listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` is not in `host:port` form.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })
    }

    /// Returns whether logs are emitted as JSON.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_base_url);
        tracing::info!("  Response log: {}", self.response_log_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
