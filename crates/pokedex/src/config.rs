use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream pokemon API (default: "https://pokeapi.co/api/v2")
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds (default: 30)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `UPSTREAM_BASE_URL` - Base URL of the upstream API (default: "https://pokeapi.co/api/v2")
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Get the upstream timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
