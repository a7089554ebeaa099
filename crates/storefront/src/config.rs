//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `LARA_HOST` - Bind address (default: 127.0.0.1)
//! - `LARA_PORT` - Listen port (default: 3000)
//! - `LARA_BASE_URL` - Public URL for the storefront (default: `http://localhost:3000`)
//! - `LARA_ADMIN_EMAIL` - Email address that signs in with the admin role
//!   (default: admin@lara.com)
//! - `LARA_STATIC_DIR` - Directory served under `/static`
//!   (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use lara_core::Email;
use thiserror::Error;
use url::Url;

/// Default address that receives the admin role at sign-in.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@lara.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: Url,
    /// Email address that signs in as an administrator
    pub admin_email: Email,
    /// Directory with the stylesheet and other static files
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production", "staging")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced in Sentry
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(get_optional_env)
    }

    /// Configuration with every default applied: loopback, default admin, no Sentry.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the defaults are valid values.
    pub fn local() -> Result<Self, ConfigError> {
        Self::from_lookup(|_| None)
    }

    /// Build configuration from a variable lookup function.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = parse_var("LARA_HOST", &var("LARA_HOST", "127.0.0.1"), str::parse::<IpAddr>)?;
        let port = parse_var("LARA_PORT", &var("LARA_PORT", "3000"), str::parse::<u16>)?;
        let base_url = parse_var(
            "LARA_BASE_URL",
            &var("LARA_BASE_URL", "http://localhost:3000"),
            Url::parse,
        )?;
        let admin_email = parse_var(
            "LARA_ADMIN_EMAIL",
            &var("LARA_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            Email::parse,
        )?;
        let static_dir = PathBuf::from(var("LARA_STATIC_DIR", "crates/storefront/static"));
        let sentry_sample_rate =
            parse_rate("SENTRY_SAMPLE_RATE", &var("SENTRY_SAMPLE_RATE", "1.0"))?;
        let sentry_traces_sample_rate = parse_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            &var("SENTRY_TRACES_SAMPLE_RATE", "0.0"),
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            admin_email,
            static_dir,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies must be marked `Secure`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a raw variable value with `parse`, naming the variable on failure.
fn parse_var<T, E: std::fmt::Display>(
    key: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, ConfigError> {
    parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate in `0.0..=1.0`.
fn parse_rate(key: &str, raw: &str) -> Result<f32, ConfigError> {
    let rate = parse_var(key, raw, str::parse::<f32>)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}
