//! Request/response envelopes and loose value checks
//!
//! Bodies travel as `{"data": ...}` in both directions. Validation stages do
//! not work on typed structs: they inspect the raw `data` object so that a
//! missing field, a field of the wrong type and a falsy field can each be
//! reported with their own message.

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `{"data": ...}` wrapper used by every request and response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// The `data` object of a mutation request
pub type Payload = Map<String, Value>;

/// Pull the `data` object out of a request body.
///
/// A body without an object under `data` reads as an empty payload, so every
/// presence check fails with its own message instead of a framing error.
pub fn payload_from_body(body: Value) -> Payload {
    match body {
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Object(data)) => data,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}

/// Loose truthiness: null, false, zero, and the empty string are falsy.
/// Arrays and objects are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether `payload` holds `field` with a truthy value
pub fn has_truthy(payload: &Payload, field: &str) -> bool {
    payload.get(field).is_some_and(is_truthy)
}

/// Numeric reading under loose comparison rules.
///
/// Numbers read as themselves, numeric strings are parsed (blank reads as 0),
/// booleans and null read as 1/0. Anything else has no numeric value.
pub fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|f| !f.is_nan())
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// A non-empty string field, for payloads that passed their presence checks
pub fn text_field(payload: &Payload, field: &str) -> Result<String, ValidationError> {
    match payload.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(_) => Err(ValidationError::rule(format!(
            "{} must be of type string",
            field
        ))),
        None => Err(ValidationError::missing(field)),
    }
}

/// Render a submitted value for an error message: strings bare, everything else as JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
