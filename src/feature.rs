use crate::errors::{GeoJsonError, Result};
use crate::properties::{decode_properties_if_present, json_kind, Properties, PropertyValue};
use crate::Geometry;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub properties: Properties,
    pub geometry: Geometry,
    /// Display title handed to renderers. Starts out as the `id`.
    #[serde(skip)]
    pub title: Option<String>,
}

impl Feature {
    pub fn new(id: Option<String>, properties: Properties, geometry: Geometry) -> Self {
        Feature {
            title: id.clone(),
            id,
            properties,
            geometry,
        }
    }

    /// Decode a Feature object.
    ///
    /// Only the geometry can fail the decode: a missing or unusable `id` becomes `None`
    /// and missing or malformed `properties` become an empty map.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| GeoJsonError::InvalidObjectType {
            expected: "Feature",
            found: json_kind(value).to_string(),
        })?;
        match object.get("type") {
            None => {}
            Some(Value::String(tag)) if tag == "Feature" => {}
            Some(other) => {
                return Err(GeoJsonError::InvalidObjectType {
                    expected: "Feature",
                    found: type_name(other),
                })
            }
        }

        let id = object.get("id").and_then(normalize_id);
        let properties = decode_properties_if_present(object, "properties").unwrap_or_default();
        let geometry = object.get("geometry").ok_or(GeoJsonError::MissingMember {
            object: "feature",
            member: "geometry",
        })?;
        let geometry = Geometry::from_json(geometry)?;

        Ok(Feature::new(id, properties, geometry))
    }

    /// Replace the title with the value of the property `key` and return it.
    ///
    /// Only string and float properties can be used; anything else, or a missing key,
    /// leaves the title untouched.
    pub fn update_title_from_property(&mut self, key: &str) -> Result<String> {
        let title = match self.properties.get(key) {
            Some(PropertyValue::Float(value)) => format_float(*value),
            Some(PropertyValue::String(value)) => value.clone(),
            Some(PropertyValue::Bool(_)) | Some(PropertyValue::Integer(_)) | None => {
                return Err(GeoJsonError::PropertyKeyMissingOrWrongType {
                    key: key.to_string(),
                })
            }
        };
        self.title = Some(title.clone());
        Ok(title)
    }
}

impl FromStr for Feature {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Feature::from_json(&value)
    }
}

/// Canonical string form of a Feature `id`: floats print without a trailing `.0`,
/// integers print exactly and strings are kept as is. Other JSON values give no id.
///
/// Numbers written without a fraction or exponent skip the float step on purpose, so an
/// id such as `9007199254740993` keeps every digit instead of rounding to the nearest f64.
fn normalize_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) if number.is_f64() => number.as_f64().map(format_float),
        Value::Number(number) => Some(number.to_string()),
        Value::String(id) => Some(id.clone()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn format_float(value: f64) -> String {
    value.to_string()
}

/// The value of a `type` member, for error messages.
pub(crate) fn type_name(value: &Value) -> String {
    match value {
        Value::String(tag) => tag.clone(),
        other => json_kind(other).to_string(),
    }
}
