//! Reverse proxy for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under the configured API
//! prefix are forwarded verbatim (method, path, query, body) to the upstream
//! backend and its response is relayed back unchanged apart from hop-by-hop
//! headers. Upstream failures surface as a JSON `{"error": ...}` body so the
//! client decodes them the same way as backend errors.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::state::AppState;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "host",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream timed out")]
    Timeout,
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Unreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ProxyError::Timeout } else { ProxyError::Unreachable(err.to_string()) }
    }
}

/// Join the upstream origin with the incoming path and query.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Copy `headers`, dropping hop-by-hop and length headers plus any header
/// the `Connection` value lists.
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name_str = name.as_str();
        if name == header::CONTENT_LENGTH || HOP_BY_HOP.contains(&name_str) || listed.iter().any(|l| l == name_str) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.upstream_url, &uri);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "upstream returned server error");
    } else {
        tracing::debug!(%method, %url, %status, "proxied");
    }

    Ok((status, response_headers, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
