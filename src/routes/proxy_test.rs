use axum::Router;
use axum::http::HeaderValue;
use axum::routing::any;

use super::*;
use crate::config::HostConfig;

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/v1/migrations?status=pending&limit=20".parse().unwrap();
    assert_eq!(
        upstream_url("http://127.0.0.1:5000/", &uri),
        "http://127.0.0.1:5000/api/v1/migrations?status=pending&limit=20"
    );
}

#[test]
fn upstream_url_without_query() {
    let uri: Uri = "/api/v1/migrations/abc".parse().unwrap();
    assert_eq!(upstream_url("http://backend", &uri), "http://backend/api/v1/migrations/abc");
}

#[test]
fn forwardable_headers_drops_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));

    let out = forwardable_headers(&headers);
    assert_eq!(out.len(), 1);
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn forwardable_headers_drops_keep_alive_and_connection_listed_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive, X-Session-Hint"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert("proxy-connection", HeaderValue::from_static("keep-alive"));
    headers.insert("x-session-hint", HeaderValue::from_static("abc"));
    headers.insert("x-request-id", HeaderValue::from_static("r-1"));

    let out = forwardable_headers(&headers);
    let mut names: Vec<&str> = out.keys().map(|name| name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["accept", "x-request-id"]);
}

#[test]
fn proxy_error_maps_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn proxy_error_renders_json_error_body() {
    let response = ProxyError::Unreachable("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "upstream unreachable: connection refused");
}

async fn echo(method: Method, uri: Uri, body: Bytes) -> (StatusCode, Json<serde_json::Value>) {
    let status = if uri.path().ends_with("/missing") { StatusCode::NOT_FOUND } else { StatusCode::OK };
    let body = serde_json::json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "body": String::from_utf8_lossy(&body),
    });
    (status, Json(body))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_proxy(upstream_url: String) -> String {
    let config = HostConfig { upstream_url, ..HostConfig::default() };
    let state = AppState::new(config).unwrap();
    serve(crate::routes::api_routes(state)).await
}

#[tokio::test]
async fn forward_relays_method_path_query_and_body() {
    let upstream = serve(Router::new().fallback(any(echo))).await;
    let proxy = spawn_proxy(upstream).await;

    let resp = reqwest::Client::new()
        .patch(format!("{proxy}/api/v1/migrations/m-1?limit=5"))
        .header("Content-Type", "application/json")
        .body(r#"{"status":"in_progress"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["method"], "PATCH");
    assert_eq!(json["uri"], "/api/v1/migrations/m-1?limit=5");
    assert_eq!(json["body"], r#"{"status":"in_progress"}"#);
}

#[tokio::test]
async fn forward_passes_upstream_error_status_through() {
    let upstream = serve(Router::new().fallback(any(echo))).await;
    let proxy = spawn_proxy(upstream).await;

    let resp = reqwest::get(format!("{proxy}/api/v1/migrations/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn forward_reports_unreachable_upstream_as_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let proxy = spawn_proxy(dead).await;
    let resp = reqwest::get(format!("{proxy}/api/v1/analytics/dashboard")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("upstream unreachable"));
}

#[tokio::test]
async fn healthz_reports_healthy_without_upstream() {
    let proxy = spawn_proxy("http://127.0.0.1:1".into()).await;
    let resp = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn readyz_tracks_upstream_reachability() {
    let upstream = serve(Router::new().fallback(any(echo))).await;
    let proxy = spawn_proxy(upstream).await;
    let resp = reqwest::get(format!("{proxy}/readyz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let proxy = spawn_proxy("http://127.0.0.1:1".into()).await;
    let resp = reqwest::get(format!("{proxy}/readyz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
