mod coordinate;
mod feature;
mod feature_collection;
mod geometry;
mod geometry_type;
mod line_string;
mod point;
mod polygon;
mod rectangle;
mod utils;

pub mod algorithms;
pub mod decode;
pub mod errors;
pub mod failable;
pub mod properties;

pub use coordinate::Coordinate;
pub use decode::{
    decode_feature, decode_feature_collection, decode_geojson, decode_geometry,
    decode_geometry_of_known_type, GeoJson,
};
pub use errors::{GeoJsonError, Result};
pub use feature::Feature;
pub use feature_collection::FeatureCollection;
pub use geometry::Geometry;
pub use geometry_type::GeometryType;
pub use line_string::{LineString, MultiLineString};
pub use point::{MultiPoint, Point};
pub use polygon::{MultiPolygon, Polygon};
pub use properties::{Properties, PropertyValue};
pub use rectangle::{HasEnvelope, Rectangle};
