//! Error type shared by every API call.
//!
//! Transport failures, non-2xx responses, and undecodable bodies stay distinct
//! variants for logging, but views only ever show the `Display` message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed ({status}){}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The request body or query could not be encoded.
    #[error("invalid request: {0}")]
    Encode(String),
    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling a detail message out of the body when it
    /// uses the backend's `{"error": ...}` or `{"errors": {...}}` shape.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status { status, detail: error_detail(body) }
    }
}

#[allow(clippy::ref_option)]
fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map_or_else(String::new, |detail| format!(": {detail}"))
}

fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
        return Some(message.to_owned());
    }
    // Validation failures: {"errors": {"field": ["msg", ...]}}
    let fields = value.get("errors")?.as_object()?;
    let parts: Vec<String> = fields
        .iter()
        .map(|(field, messages)| {
            let text = match messages {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{field}: {text}")
        })
        .collect();
    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}
