//! Byte-level entry points.
//!
//! Every function parses the whole buffer as JSON first, so malformed JSON is reported
//! as `GeoJsonError::MalformedJson` before any GeoJSON structure is looked at.

use crate::errors::{GeoJsonError, Result};
use crate::feature::type_name;
use crate::properties::json_kind;
use crate::{Feature, FeatureCollection, Geometry, GeometryType};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Any top-level GeoJSON document this crate understands.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    /// Decode a document, dispatching on its top-level `type`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let tag = match value.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(other) => {
                return Err(GeoJsonError::InvalidObjectType {
                    expected: "GeoJSON object",
                    found: type_name(other),
                })
            }
            None if value.is_object() => {
                return Err(GeoJsonError::MissingMember {
                    object: "GeoJSON object",
                    member: "type",
                })
            }
            None => {
                return Err(GeoJsonError::InvalidObjectType {
                    expected: "GeoJSON object",
                    found: json_kind(value).to_string(),
                })
            }
        };
        match tag {
            "Feature" => Feature::from_json(value).map(GeoJson::Feature),
            "FeatureCollection" => {
                FeatureCollection::from_json(value).map(GeoJson::FeatureCollection)
            }
            _ => Geometry::from_json(value).map(GeoJson::Geometry),
        }
    }
}

fn parse(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

#[instrument(skip_all, fields(len = bytes.len()))]
pub fn decode_feature_collection(bytes: &[u8]) -> Result<FeatureCollection> {
    FeatureCollection::from_json(&parse(bytes)?)
}

pub fn decode_feature(bytes: &[u8]) -> Result<Feature> {
    Feature::from_json(&parse(bytes)?)
}

pub fn decode_geometry(bytes: &[u8]) -> Result<Geometry> {
    Geometry::from_json(&parse(bytes)?)
}

/// Decode a standalone geometry document, such as a lone Polygon file, at the
/// coordinate depth of `geometry_type`.
pub fn decode_geometry_of_known_type(bytes: &[u8], geometry_type: GeometryType) -> Result<Geometry> {
    Geometry::from_json_of_type(&parse(bytes)?, geometry_type)
}

pub fn decode_geojson(bytes: &[u8]) -> Result<GeoJson> {
    GeoJson::from_json(&parse(bytes)?)
}
