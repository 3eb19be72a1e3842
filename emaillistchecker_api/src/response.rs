//! Classification of completed HTTP exchanges into parsed data or typed errors.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Error;

/// Used when a 429 response has no usable `Retry-After` header.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Interprets a status code and raw body.
///
/// Success statuses return the parsed body as-is. Failure statuses are
/// checked most-specific first, with everything else falling through to
/// [`Error::Api`].
pub fn interpret(status: u16, retry_after: Option<&str>, body: &str) -> Result<Value, Error> {
    if (200..300).contains(&status) {
        return parse_body(body);
    }

    let data = parse_error_body(body);
    match status {
        401 => Err(Error::Authentication {
            message: field_or(&data, "error", "Invalid API key"),
            response_data: data,
        }),
        402 => Err(Error::InsufficientCredits {
            message: field_or(&data, "error", "Insufficient credits"),
            response_data: data,
        }),
        422 => Err(Error::Validation {
            message: field_or(&data, "message", "Validation error"),
            response_data: data,
        }),
        429 => {
            let retry_after = parse_retry_after(retry_after);
            Err(Error::RateLimit {
                message: format!("Rate limit exceeded. Retry after {} seconds", retry_after),
                retry_after,
                response_data: data,
            })
        }
        _ => Err(Error::Api {
            message: field_or(&data, "error", &format!("API error: {}", status)),
            status,
            response_data: data,
        }),
    }
}

/// Parses a success body. An empty body is treated as an empty object.
pub fn parse_body(body: &str) -> Result<Value, Error> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|e| Error::RequestFailed {
        message: e.to_string(),
    })
}

/// Error bodies are often HTML from a proxy; keep them as a string rather
/// than losing the status classification.
fn parse_error_body(body: &str) -> Value {
    parse_body(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Only an absent, `null` or `false` field falls back to `default`. An
/// empty string is kept and other JSON values are rendered as text.
fn field_or(data: &Value, field: &str, default: &str) -> String {
    match data.get(field) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Reads `Retry-After` as whole seconds, falling back to 60.
pub fn parse_retry_after(header: Option<&str>) -> u64 {
    header
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Strips the `{"data": ...}` envelope when present.
///
/// A missing or `null` `data` key leaves the body untouched.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) if !inner.is_null() => inner,
            Some(inner) => {
                map.insert("data".to_string(), inner);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Unwraps the envelope and deserializes the payload into `T`.
pub fn from_envelope<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(unwrap_envelope(value)).map_err(|e| Error::Decode {
        message: e.to_string(),
    })
}
