mod measure;
mod point_in_polygon;

pub use measure::{distance, is_closed, length};
pub use point_in_polygon::{contains_point, point_in_ring};
