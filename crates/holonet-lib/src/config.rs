//! Client configuration and environment overrides.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{Error, Result};

/// Public catalog mirror queried when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi.py4e.com/api/";
/// Default upper bound on concurrent fetches within one resolve call.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;
/// Default per-request timeout for the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_ENV: &str = "HOLONET_BASE_URL";
pub const MAX_IN_FLIGHT_ENV: &str = "HOLONET_MAX_IN_FLIGHT";
pub const TIMEOUT_ENV: &str = "HOLONET_TIMEOUT_SECS";

/// Settings shared by the transport, the resolver, and the aggregators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the catalog API, always ending in `/`.
    pub base_url: String,
    /// Maximum number of outstanding fetches per resolve call (at least 1).
    pub max_in_flight: usize,
    /// Request timeout applied by [`crate::HttpTransport`].
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            timeout: DEFAULT_TIMEOUT,
            user_agent: user_agent(),
        }
    }
}

impl ClientConfig {
    /// Build a configuration from defaults layered with `HOLONET_*` variables.
    ///
    /// Unset or empty variables fall back to defaults; present but invalid
    /// values are reported as [`Error::InvalidConfig`] instead of being ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = non_empty_var(BASE_URL_ENV) {
            config = config.with_base_url(&base)?;
        }
        if let Some(raw) = non_empty_var(MAX_IN_FLIGHT_ENV) {
            config.max_in_flight = parse_positive(MAX_IN_FLIGHT_ENV, &raw)?;
        }
        if let Some(raw) = non_empty_var(TIMEOUT_ENV) {
            let secs = parse_positive(TIMEOUT_ENV, &raw)?;
            config.timeout = Duration::from_secs(secs as u64);
        }

        Ok(config)
    }

    /// Replace the base URL, validating it and normalizing the trailing slash.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the in-flight bound; zero is clamped to one.
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Validate `raw` as an absolute http(s) URL and make sure it ends with `/`
/// so that collection paths join underneath it.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|err| Error::InvalidBaseUrl {
        url: raw.to_string(),
        message: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_positive(key: &str, raw: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(Error::InvalidConfig {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn user_agent() -> String {
    format!(
        "holonet-lib/{version} ({repo})",
        version = env!("CARGO_PKG_VERSION"),
        repo = "https://github.com/holonet-rs/holonet"
    )
}
