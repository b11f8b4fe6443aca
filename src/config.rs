//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin that `/api/v1/*` is forwarded to, without a trailing slash.
    pub upstream_url: String,
    /// Path prefix proxied to the backend; always starts with `/`, never ends with one.
    pub api_prefix: String,
    pub upstream_timeout_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_API_UPSTREAM_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://127.0.0.1:5000`
    /// - `API_PREFIX`: default `/api/v1`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upstream_timeout_secs =
            parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        let upstream_url = non_empty(lookup("API_UPSTREAM_URL"))
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(upstream_url.starts_with("http://") || upstream_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "API_UPSTREAM_URL", value: upstream_url });
        }

        let api_prefix = normalize_prefix(non_empty(lookup("API_PREFIX")).as_deref().unwrap_or(DEFAULT_API_PREFIX));
        if api_prefix.is_empty() {
            return Err(ConfigError::Invalid { var: "API_PREFIX", value: "/".into() });
        }

        Ok(Self { port, upstream_url, api_prefix, upstream_timeout_secs })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match non_empty(raw) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

/// `api/v1/` and `/api/v1` both become `/api/v1`; `/` becomes empty.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
