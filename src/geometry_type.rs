use crate::errors::GeoJsonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The `type` discriminator of a GeoJSON geometry object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
        }
    }

    /// Nesting depth of the `coordinates` array for this type.
    pub fn coordinate_depth(&self) -> usize {
        match self {
            GeometryType::Point => 1,
            GeometryType::LineString | GeometryType::MultiPoint => 2,
            GeometryType::Polygon | GeometryType::MultiLineString => 3,
            GeometryType::MultiPolygon => 4,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(GeometryType::Point),
            "LineString" => Ok(GeometryType::LineString),
            "Polygon" => Ok(GeometryType::Polygon),
            "MultiPoint" => Ok(GeometryType::MultiPoint),
            "MultiLineString" => Ok(GeometryType::MultiLineString),
            "MultiPolygon" => Ok(GeometryType::MultiPolygon),
            _ => Err(GeoJsonError::UnknownGeometryType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_exact_tags() {
        for tag in &[
            "Point",
            "LineString",
            "Polygon",
            "MultiPoint",
            "MultiLineString",
            "MultiPolygon",
        ] {
            let geometry_type: GeometryType = tag.parse().expect("Known tag should parse");
            assert_eq!(geometry_type.to_string(), *tag);
        }
    }

    #[test]
    fn check_unknown_tags() {
        for tag in &["point", "POLYGON", "GeometryCollection", "Feature", ""] {
            match tag.parse::<GeometryType>() {
                Err(GeoJsonError::UnknownGeometryType(found)) => assert_eq!(found, *tag),
                other => panic!("Expected UnknownGeometryType, got {:?}", other),
            }
        }
    }

    #[test]
    fn check_depths() {
        assert_eq!(GeometryType::Point.coordinate_depth(), 1);
        assert_eq!(GeometryType::MultiPoint.coordinate_depth(), 2);
        assert_eq!(GeometryType::MultiLineString.coordinate_depth(), 3);
        assert_eq!(GeometryType::MultiPolygon.coordinate_depth(), 4);
    }
}
