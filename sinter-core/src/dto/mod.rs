//! Data Transfer Objects
//!
//! The Sinter API wraps some payloads in a `{"data": ...}` object and returns
//! others bare. [`decode_payload`] accepts both shapes.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a response body that is either `{"data": T}` or a bare `T`
///
/// A top-level `data` field is always taken as the payload. Decoding errors
/// are those of the payload itself.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    let mut value: Value = serde_json::from_str(body)?;
    let data = value.as_object_mut().and_then(|o| o.remove("data"));
    serde_json::from_value(data.unwrap_or(value))
}
