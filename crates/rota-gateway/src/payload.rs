//! Flat-map bridge for rendering layers.
//!
//! Templating surfaces want one uniform shape: a record map on success, a
//! single-key `error` map on failure, a single-key `message` map for plain
//! confirmations. These helpers collapse tagged results into that contract;
//! code that can branch on [`ServiceError`] itself never needs them.

use rota_core::{JsonMap, fields};
use serde_json::Value;

use crate::ServiceError;

/// The single-key error map for a classified failure. The value is the
/// error's `Display` text, which is already the user-facing message.
#[must_use]
pub fn error_map(error: &ServiceError) -> JsonMap {
    let mut map = JsonMap::new();
    map.insert(fields::ERROR.to_string(), Value::String(error.to_string()));
    map
}

/// The single-key confirmation map for a plain-text outcome.
#[must_use]
pub fn message_map(text: impl Into<String>) -> JsonMap {
    let mut map = JsonMap::new();
    map.insert(fields::MESSAGE.to_string(), Value::String(text.into()));
    map
}

/// Collapse a record result: the record itself, or an error map.
#[must_use]
pub fn record(result: Result<JsonMap, ServiceError>) -> JsonMap {
    result.unwrap_or_else(|error| error_map(&error))
}

/// Collapse a confirmation result: a message map, or an error map.
#[must_use]
pub fn confirmation(result: Result<String, ServiceError>) -> JsonMap {
    match result {
        Ok(text) => message_map(text),
        Err(error) => error_map(&error),
    }
}

/// Collapse a listing result: the rows themselves, or a one-element list
/// holding an error map. An empty list always means "genuinely nothing".
#[must_use]
pub fn listing(result: Result<Vec<JsonMap>, ServiceError>) -> Vec<JsonMap> {
    result.unwrap_or_else(|error| vec![error_map(&error)])
}
