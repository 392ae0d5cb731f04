//! Response interpreter: classifies a transport result as success or error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{HubSpotError, Result};
use crate::transport::RawResponse;

pub fn is_status_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a successful body, or build the structured error for any other status.
///
/// An empty 2xx body (e.g. `204 No Content`) decodes to `Value::Null`.
pub fn interpret(response: RawResponse) -> Result<Value> {
    let RawResponse { status, body } = response;
    let trimmed = body.trim();

    if is_status_ok(status) {
        if trimmed.is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(trimmed).map_err(|e| {
            tracing::warn!(status, error = %e, "response body is not valid JSON");
            HubSpotError::MalformedResponse {
                status,
                message: e.to_string(),
                body,
            }
        });
    }

    let decoded = if trimmed.is_empty() {
        None
    } else {
        Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(body.clone())))
    };
    Err(HubSpotError::http(status, decoded))
}

/// Map a decoded payload onto a typed model.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| HubSpotError::Deserialization(e.to_string()))
}
