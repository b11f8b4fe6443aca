//! API base URL resolution.
//!
//! The browser bundle has no runtime environment, so the override is read at
//! compile time from `CLOUDMIGRATE_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Relative API prefix used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "/api/v1";

/// Base URL every API path is appended to.
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("CLOUDMIGRATE_API_URL"))
}

fn resolve_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}
