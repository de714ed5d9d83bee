use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// A scalar property value. Objects, arrays and nulls have no representation and are
/// skipped when decoding.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    String(String),
    Integer(i64),
    Float(f64),
}

/// Feature properties in wire order.
pub type Properties = IndexMap<String, PropertyValue>;

impl PropertyValue {
    /// Interpret `value` as a bool, then a string, then an integer, then a float.
    ///
    /// Any number that is exactly an `i64` is an integer, including `5.0`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(PropertyValue::Bool(*b)),
            Value::String(s) => Some(PropertyValue::String(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(whole_i64))
                .map(PropertyValue::Integer)
                .or_else(|| n.as_f64().map(PropertyValue::Float)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The float value. Integers are not widened, matching what
    /// `Feature::update_title_from_property` accepts.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

// 2^63 is exact in f64; anything at or above it does not fit an i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn whole_i64(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value >= -I64_BOUND && value < I64_BOUND {
        Some(value as i64)
    } else {
        None
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Decode every scalar member of `object`. Members that are objects, arrays or null are
/// left out of the result.
pub fn decode_properties(object: &Map<String, Value>) -> Properties {
    let mut properties = Properties::with_capacity(object.len());
    for (key, value) in object {
        match PropertyValue::from_json(value) {
            Some(property) => {
                properties.insert(key.clone(), property);
            }
            None => debug!(key = %key, "skipping non-scalar property"),
        }
    }
    properties
}

/// Decode the properties object stored under `key` in `container`.
///
/// Returns `None` when `key` is absent or does not hold an object, so a malformed bag
/// never fails the enclosing decode.
pub fn decode_properties_if_present(container: &Map<String, Value>, key: &str) -> Option<Properties> {
    match container.get(key)? {
        Value::Object(object) => Some(decode_properties(object)),
        Value::Null => None,
        other => {
            debug!(key = %key, kind = json_kind(other), "ignoring malformed properties");
            None
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
