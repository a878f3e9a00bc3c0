//! API Errors

use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::JsValue;

/// Status text shown when the server gives no usable reason.
pub const FALLBACK_STATUS: &str = "Failed";

/// Error type produced by the archive API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No browser `window` (e.g. executed outside of a browser).
    #[error("browser window is not available")]
    Unavailable,
    /// `fetch` rejected or a JavaScript exception was thrown.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a rejected response body.
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            detail: failure_detail(body),
        }
    }

    /// Short text for the submission status indicator.
    pub fn status_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_STATUS.to_string(),
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Network(format!("{value:?}")), Self::Network)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Extracts the `detail` of an error body.
///
/// Plain string details are returned as-is. Validation failures come back as a
/// list of `{"msg": ...}` objects, whose messages are joined with `; `.
pub fn failure_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
