use crate::errors::{GeoJsonError, Result};
use crate::properties::json_kind;
use crate::{
    Coordinate, GeometryType, HasEnvelope, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Rectangle,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    /// Decode a geometry object, dispatching on its `type` member.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = as_geometry_object(value)?;
        let geometry_type = read_geometry_type(object)?.ok_or(GeoJsonError::MissingMember {
            object: "geometry",
            member: "type",
        })?;
        decode_coordinates(object, geometry_type)
    }

    /// Decode a geometry object whose type is already known to the caller.
    ///
    /// A `type` member may be omitted, but if present it has to name `geometry_type`.
    pub fn from_json_of_type(value: &Value, geometry_type: GeometryType) -> Result<Self> {
        let object = as_geometry_object(value)?;
        match read_geometry_type(object)? {
            Some(found) if found != geometry_type => Err(GeoJsonError::GeometryTypeMismatch {
                expected: geometry_type,
                found,
            }),
            _ => decode_coordinates(object, geometry_type),
        }
    }

    /// True for polygonal geometries containing `point`; always false otherwise.
    pub fn contains_point(&self, point: Coordinate) -> bool {
        match self {
            Geometry::Polygon(polygon) => polygon.contains_point(point),
            Geometry::MultiPolygon(multi) => multi.contains_point(point),
            Geometry::Point(_)
            | Geometry::MultiPoint(_)
            | Geometry::LineString(_)
            | Geometry::MultiLineString(_) => false,
        }
    }
}

impl HasEnvelope for Geometry {
    fn envelope(&self) -> Rectangle {
        match self {
            Geometry::Point(g) => g.envelope(),
            Geometry::MultiPoint(g) => g.envelope(),
            Geometry::LineString(g) => g.envelope(),
            Geometry::MultiLineString(g) => g.envelope(),
            Geometry::Polygon(g) => g.envelope(),
            Geometry::MultiPolygon(g) => g.envelope(),
        }
    }
}

impl FromStr for Geometry {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Geometry::from_json(&value)
    }
}

fn as_geometry_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| GeoJsonError::InvalidObjectType {
            expected: "geometry object",
            found: json_kind(value).to_string(),
        })
}

/// Read the `type` discriminator without touching `coordinates`.
fn read_geometry_type(object: &Map<String, Value>) -> Result<Option<GeometryType>> {
    match object.get("type") {
        None => Ok(None),
        Some(Value::String(tag)) => tag.parse().map(Some),
        Some(other) => Err(GeoJsonError::UnknownGeometryType(json_kind(other).to_string())),
    }
}

fn decode_coordinates(object: &Map<String, Value>, geometry_type: GeometryType) -> Result<Geometry> {
    let coordinates = object.get("coordinates").ok_or(GeoJsonError::MissingMember {
        object: "geometry",
        member: "coordinates",
    })?;
    let shape_error = |source: serde_json::Error| GeoJsonError::CoordinateShapeMismatch {
        geometry_type,
        source,
    };

    let geometry = match geometry_type {
        GeometryType::Point => Geometry::Point(Point::deserialize(coordinates).map_err(shape_error)?),
        GeometryType::MultiPoint => {
            Geometry::MultiPoint(MultiPoint::deserialize(coordinates).map_err(shape_error)?)
        }
        GeometryType::LineString => {
            Geometry::LineString(LineString::deserialize(coordinates).map_err(shape_error)?)
        }
        GeometryType::MultiLineString => Geometry::MultiLineString(
            MultiLineString::deserialize(coordinates).map_err(shape_error)?,
        ),
        GeometryType::Polygon => {
            Geometry::Polygon(Polygon::deserialize(coordinates).map_err(shape_error)?)
        }
        GeometryType::MultiPolygon => {
            Geometry::MultiPolygon(MultiPolygon::deserialize(coordinates).map_err(shape_error)?)
        }
    };
    Ok(geometry)
}
