//! Error classification logic

use crate::error_kind::{is_server_error_status, ErrorKind};
use crate::{Error, ErrorContext};
use reqwest::StatusCode;

/// Pull the detail text out of an error body shaped like
/// `{"message": "..."}` or `{"error": "..."}`.
///
/// `message` wins over `error`. Only truthy scalars count: non-empty strings,
/// non-zero numbers and `true` (rendered as text). Empty strings, `0`, `false`,
/// `null`, objects and arrays are treated as absent.
pub fn extract_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(scalar_text))
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        serde_json::Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn fallback_message(status: u16) -> String {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("");
    format!("HTTP {}: {}", status, reason)
}

/// Turn a non-success response into the most specific error.
///
/// Pure function of the status code and the raw body.
pub fn classify_error(status: u16, body: &str) -> Error {
    let message = extract_error_message(body).unwrap_or_else(|| fallback_message(status));
    let message = if is_server_error_status(status) {
        format!("Server error: {}", message)
    } else {
        message
    };
    Error::from_kind(
        ErrorKind::from_http_status(status),
        message,
        ErrorContext::new().with_status(status).with_source("response"),
    )
}
