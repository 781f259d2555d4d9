//! Where the client finds its API.
//!
//! # Design
//! Configuration comes from the environment. The base URL has no default:
//! without it the client refuses to start. Timeout and simulated delay fall
//! back to fixed defaults.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "INVENTORY_API_URL";
pub const TIMEOUT_VAR: &str = "INVENTORY_API_TIMEOUT_MS";
pub const DELAY_VAR: &str = "INVENTORY_API_DELAY_MS";

const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Transport configuration for the products API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Artificial latency added to every settled request. Development only.
    pub delay: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            delay: Duration::ZERO,
        }
    }

    /// Load client configuration from environment variables
    ///
    /// Environment variables:
    /// - INVENTORY_API_URL: API base URL (required)
    /// - INVENTORY_API_TIMEOUT_MS: request timeout (default: 2000)
    /// - INVENTORY_API_DELAY_MS: simulated network delay (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let timeout = millis(&lookup, TIMEOUT_VAR)?.unwrap_or(DEFAULT_TIMEOUT_MS);
        let delay = millis(&lookup, DELAY_VAR)?.unwrap_or(0);

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout),
            delay: Duration::from_millis(delay),
        })
    }
}

fn millis<F>(lookup: &F, name: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
