//! Timestamp display rules.
//!
//! The scheduling service emits ISO-8601 local date-times (seconds and
//! sub-seconds included when present); callers read `yyyy-mm-dd hh:mm`.
//! Records are rewritten in place before they leave the gateway, and a
//! time field that is absent or null stays null rather than disappearing.

use chrono::NaiveDateTime;
use serde_json::Value;
use thiserror::Error;

use crate::{JsonMap, fields};

/// Display pattern for every timestamp callers see.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wire patterns accepted from the service, tried in order.
const PARSE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A time field the service sent could not be rewritten for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// String value that matches none of the accepted wire patterns.
    #[error("unparseable date-time: {0}")]
    Unparseable(String),

    /// Non-string, non-null value in a time field.
    #[error("unsupported date-time value of type {0}")]
    UnsupportedType(&'static str),
}

/// Render a date-time in the display pattern, discarding seconds.
#[must_use]
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

fn parse_wire(text: &str) -> Result<NaiveDateTime, TimeError> {
    PARSE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .ok_or_else(|| TimeError::Unparseable(text.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Rewrite one wire value for display.
///
/// Null maps to null, a wire-format string maps to the display pattern,
/// and anything else is a contract breach.
///
/// # Errors
///
/// Returns [`TimeError`] for strings outside the wire patterns and for
/// values that are neither string nor null.
pub fn normalize_value(value: &Value) -> Result<Option<String>, TimeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(format_datetime(parse_wire(text)?))),
        other => Err(TimeError::UnsupportedType(json_type_name(other))),
    }
}

/// Rewrite `field` of `record` in place. A missing field is materialized
/// as an explicit null so callers always find the key.
///
/// # Errors
///
/// Returns [`TimeError`] when the present value cannot be rewritten.
pub fn normalize_field(record: &mut JsonMap, field: &str) -> Result<(), TimeError> {
    let display = match record.get(field) {
        None => None,
        Some(value) => normalize_value(value)?,
    };
    record.insert(field.to_string(), display.map_or(Value::Null, Value::String));
    Ok(())
}

/// Rewrite both time fields of a task record.
///
/// # Errors
///
/// Returns [`TimeError`] when either field cannot be rewritten.
pub fn normalize_task(task: &mut JsonMap) -> Result<(), TimeError> {
    normalize_field(task, fields::START_TIME)?;
    normalize_field(task, fields::END_TIME)
}

/// Rewrite the nested task and assigned-resource timestamps of a schedule
/// entry. Slots that do not hold the expected shape are left untouched.
///
/// # Errors
///
/// Returns [`TimeError`] when a nested time field cannot be rewritten.
pub fn normalize_schedule_entry(entry: &mut JsonMap) -> Result<(), TimeError> {
    if let Some(Value::Object(task)) = entry.get_mut(fields::TASK) {
        normalize_task(task)?;
    }
    if let Some(Value::Array(resources)) = entry.get_mut(fields::ASSIGNED_RESOURCES) {
        for resource in resources {
            if let Value::Object(resource) = resource {
                normalize_field(resource, fields::AVAILABLE_FROM)?;
            }
        }
    }
    Ok(())
}
