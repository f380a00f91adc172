//! Configuration module for environment variable parsing.
//!
//! All settings are read once at startup and shared read-only afterwards.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use url::Url;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 1337;

/// Default forwarding target: the relay's own mock endpoint.
pub const DEFAULT_TARGET: &str = "http://localhost:1337/mock-target";

/// Default outbound request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Upstream URL that accepted events are relayed to
    pub target: Url,

    /// Outbound HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Shared secret for `X-Hub-Signature-256` verification
    pub webhook_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: parse_var("PORT", DEFAULT_PORT),

            target: parse_target("TARGET"),

            request_timeout_ms: parse_var("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS),

            webhook_secret: env::var("WEBHOOK_SECRET").ok(),
        }
    }

    /// Outbound request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            target: default_target(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            webhook_secret: None,
        }
    }
}

/// The built-in default target as a parsed URL.
pub fn default_target() -> Url {
    Url::parse(DEFAULT_TARGET).expect("DEFAULT_TARGET is a valid URL")
}

/// Parse an environment variable, falling back to `default` when unset or invalid.
fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid value, using default");
            default
        }
    }
}

/// Parse a URL-valued environment variable, falling back to [`DEFAULT_TARGET`].
fn parse_target(name: &str) -> Url {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default_target(),
    };

    match Url::parse(raw.trim()) {
        Ok(url) => url,
        Err(e) => {
            warn!(env_var = name, value = %raw, error = %e, "Invalid URL, using default");
            default_target()
        }
    }
}
