//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed host config and one pooled HTTP client used to forward
//! API calls to the backend.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
#[error("http client build failed: {0}")]
pub struct HttpClientBuildError(String);

/// Clone is required by Axum; the config is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: HostConfig) -> Result<Self, HttpClientBuildError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HttpClientBuildError(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
