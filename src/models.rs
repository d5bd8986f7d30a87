use serde_json::{Map, Value};

use crate::error::DeserializationError;

pub mod match_turn;

/// Flat key-value record as exchanged with the game service
pub type JsonRecord = Map<String, Value>;

// Every model is converted from and into a JsonRecord before it crosses the network layer
pub trait JsonSerialisable: Sized {
    /// Builds the model from a record, failing without a partial value if any key is absent or mistyped
    fn from_json(record: &JsonRecord) -> Result<Self, DeserializationError>;

    /// Returns a fresh record holding every field of the model
    fn to_json(&self) -> JsonRecord;
}

pub(crate) fn required<'r>(
    record: &'r JsonRecord,
    key: &'static str,
) -> Result<&'r Value, DeserializationError> {
    record
        .get(key)
        .ok_or(DeserializationError::MissingField(key))
}

pub(crate) fn required_str(
    record: &JsonRecord,
    key: &'static str,
) -> Result<String, DeserializationError> {
    match required(record, key)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(DeserializationError::InvalidType {
            field: key,
            expected: "a string",
        }),
    }
}

pub(crate) fn required_i64(
    record: &JsonRecord,
    key: &'static str,
) -> Result<i64, DeserializationError> {
    integer(required(record, key)?).ok_or(DeserializationError::InvalidType {
        field: key,
        expected: "an integer",
    })
}

// Whole-valued floats are accepted, digit strings are not
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}
