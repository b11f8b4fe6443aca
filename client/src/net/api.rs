//! REST API client for the migration backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable`, since
//! views only fetch once they are running in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, ApiError>`; callers store the error's
//! message in view state instead of panicking. Requests are never retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    CostEstimate, DashboardSummary, Migration, MigrationDraft, MigrationPatch, MigrationQuery, MigrationStats, Page,
    Resource, ResourceQuery, ResourceSummary, Strategy,
};

#[cfg(feature = "hydrate")]
const JSON_CONTENT_TYPE: &str = "application/json";
const MIGRATIONS_PATH: &str = "/migrations";
const MIGRATION_STATS_PATH: &str = "/migrations/stats";
const RESOURCES_PATH: &str = "/resources";
const RESOURCE_SUMMARY_PATH: &str = "/resources/summary";
const DASHBOARD_PATH: &str = "/analytics/dashboard";
const COST_ESTIMATE_PATH: &str = "/analytics/cost-estimate/all";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

// =============================================================================
// PATHS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let encoded = serde_urlencoded::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if encoded.is_empty() {
        Ok(path.to_owned())
    } else {
        Ok(format!("{path}?{encoded}"))
    }
}

fn migration_path(id: &str) -> String {
    format!("{MIGRATIONS_PATH}/{}", urlencoding::encode(id))
}

fn resource_path(id: &str) -> String {
    format!("{RESOURCES_PATH}/{}", urlencoding::encode(id))
}

fn cost_estimate_path(strategy: Strategy) -> String {
    format!("{COST_ESTIMATE_PATH}?strategy={}", strategy.as_str())
}

// =============================================================================
// BODIES
// =============================================================================

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Issue one request and return the raw body of a 2xx response.
async fn request_text(method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = send(method, path, body).await;
        if let Err(err) = &result {
            leptos::logging::warn!("{} {path} failed: {err}", method.as_str());
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method.as_str(), path, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send(method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let url = endpoint(&super::config::api_base_url(), path);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    }
    .header("Content-Type", JSON_CONTENT_TYPE);

    let sent = match body {
        Some(body) => builder.body(body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::from_status(resp.status(), &text));
    }
    Ok(text)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = request_text(Method::Get, path, None).await?;
    decode_body(&text)
}

async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    let payload = encode_body(body)?;
    let text = request_text(method, path, Some(payload)).await?;
    decode_body(&text)
}

// =============================================================================
// MIGRATIONS
// =============================================================================

/// List migrations via `GET /migrations`, with optional filters.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn list_migrations(query: &MigrationQuery) -> Result<Page<Migration>, ApiError> {
    get_json(&with_query(MIGRATIONS_PATH, query)?).await
}

/// Fetch one migration via `GET /migrations/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn get_migration(id: &str) -> Result<Migration, ApiError> {
    get_json(&migration_path(id)).await
}

/// Create a migration via `POST /migrations`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn create_migration(draft: &MigrationDraft) -> Result<Migration, ApiError> {
    send_json(Method::Post, MIGRATIONS_PATH, draft).await
}

/// Apply a partial update via `PATCH /migrations/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn update_migration(id: &str, patch: &MigrationPatch) -> Result<Migration, ApiError> {
    send_json(Method::Patch, &migration_path(id), patch).await
}

/// Delete a migration via `DELETE /migrations/{id}`. The response body is ignored.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or non-2xx status.
pub async fn delete_migration(id: &str) -> Result<(), ApiError> {
    request_text(Method::Delete, &migration_path(id), None).await.map(|_| ())
}

/// Fetch aggregate counts via `GET /migrations/stats`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn migration_stats() -> Result<MigrationStats, ApiError> {
    get_json(MIGRATION_STATS_PATH).await
}

// =============================================================================
// RESOURCES
// =============================================================================

/// List discovered resources via `GET /resources`, with optional filters.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn list_resources(query: &ResourceQuery) -> Result<Page<Resource>, ApiError> {
    get_json(&with_query(RESOURCES_PATH, query)?).await
}

/// Fetch one resource via `GET /resources/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn get_resource(id: &str) -> Result<Resource, ApiError> {
    get_json(&resource_path(id)).await
}

/// Fetch per-category counts via `GET /resources/summary`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn resource_summary() -> Result<ResourceSummary, ApiError> {
    get_json(RESOURCE_SUMMARY_PATH).await
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Fetch the combined migration + resource summary via `GET /analytics/dashboard`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn dashboard() -> Result<DashboardSummary, ApiError> {
    get_json(DASHBOARD_PATH).await
}

/// Fetch the cost estimate for one strategy via `GET /analytics/cost-estimate/all`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn cost_estimate(strategy: Strategy) -> Result<CostEstimate, ApiError> {
    get_json(&cost_estimate_path(strategy)).await
}
