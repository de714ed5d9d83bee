use crate::errors::{GeoJsonError, Result};
use crate::failable::decode_failable_array;
use crate::feature::type_name;
use crate::properties::json_kind;
use crate::Feature;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, instrument};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { features }
    }

    /// Decode a FeatureCollection object.
    ///
    /// Features that fail to decode are dropped; the collection itself fails only when
    /// it is not a FeatureCollection object or `features` is not an array.
    #[instrument(skip_all)]
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| GeoJsonError::InvalidObjectType {
            expected: "FeatureCollection",
            found: json_kind(value).to_string(),
        })?;
        match object.get("type") {
            Some(Value::String(tag)) if tag == "FeatureCollection" => {}
            Some(other) => {
                return Err(GeoJsonError::InvalidObjectType {
                    expected: "FeatureCollection",
                    found: type_name(other),
                })
            }
            None => {
                return Err(GeoJsonError::MissingMember {
                    object: "feature collection",
                    member: "type",
                })
            }
        }

        let elements = match object.get("features") {
            Some(Value::Array(elements)) => elements,
            Some(_) => {
                return Err(GeoJsonError::InvalidMember {
                    object: "feature collection",
                    member: "features",
                    expected: "an array",
                })
            }
            None => {
                return Err(GeoJsonError::MissingMember {
                    object: "feature collection",
                    member: "features",
                })
            }
        };

        let features = decode_failable_array(elements, Feature::from_json);
        debug!(
            decoded = features.len(),
            dropped = elements.len() - features.len(),
            "decoded feature collection"
        );
        Ok(FeatureCollection { features })
    }

    /// Read and decode a FeatureCollection document from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let value: Value = serde_json::from_slice(&bytes)?;
        FeatureCollection::from_json(&value)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }
}

impl FromStr for FeatureCollection {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        FeatureCollection::from_json(&value)
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
