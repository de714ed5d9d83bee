use crate::GeometryType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoJsonError>;

#[derive(Error, Debug)]
pub enum GeoJsonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Missing member `{member}` in {object}")]
    MissingMember {
        object: &'static str,
        member: &'static str,
    },

    #[error("Member `{member}` of {object} should be {expected}")]
    InvalidMember {
        object: &'static str,
        member: &'static str,
        expected: &'static str,
    },

    #[error("Expected object type `{expected}`, but found `{found}`")]
    InvalidObjectType {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid geometry type `{0}`")]
    UnknownGeometryType(String),

    #[error("Expected geometry type `{expected}`, but found `{found}`")]
    GeometryTypeMismatch {
        expected: GeometryType,
        found: GeometryType,
    },

    #[error("Coordinates do not have the shape of a {geometry_type}: {source}")]
    CoordinateShapeMismatch {
        geometry_type: GeometryType,
        source: serde_json::Error,
    },

    #[error("Property `{key}` is missing or is neither a string nor a float")]
    PropertyKeyMissingOrWrongType { key: String },
}
