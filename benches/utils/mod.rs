#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use std::f64::consts::PI;

use geojson_utils::{Coordinate, LineString, Polygon, Rectangle};

//// Utility functions

/// A closed ring of `n` positions around `center`, with a radius wobbling between
/// `0.5 * radius` and `radius` so the ring is not convex.
pub(crate) fn make_star_ring(center: Coordinate, radius: f64, n: usize) -> Vec<Coordinate> {
    let mut coords: Vec<Coordinate> = (0..n)
        .map(|i| {
            let angle = 2. * PI * (i as f64) / (n as f64);
            let r = if i % 2 == 0 { radius } else { radius * 0.5 };
            Coordinate::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect();
    coords.push(coords[0]);
    coords
}

pub(crate) fn make_polygon(n: usize) -> Polygon {
    let shell = make_star_ring(Coordinate::new(0., 0.), 10., n);
    let hole = make_star_ring(Coordinate::new(0., 0.), 2., n / 4);
    Polygon::new(LineString::new(shell), vec![LineString::new(hole)])
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}

/// A FeatureCollection document with `n` polygon features, every tenth of which has an
/// unknown geometry type.
pub(crate) fn make_feature_collection(n: usize, vertices: usize, seed: u64) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    let features: Vec<Value> = (0..n)
        .map(|i| {
            let center = Coordinate::new(rng.gen_range(-170., 170.), rng.gen_range(-80., 80.));
            let ring = make_star_ring(center, 1., vertices);
            let geometry_type = if i % 10 == 9 { "Hexagon" } else { "Polygon" };
            json!({
                "type": "Feature",
                "id": i,
                "properties": {
                    "ntaname": format!("area-{}", i),
                    "shape_area": rng.gen_range(0., 1e7),
                    "boro_code": (i % 5) as i64,
                    "tags": ["ignored"],
                },
                "geometry": {"type": geometry_type, "coordinates": [ring]}
            })
        })
        .collect();
    json!({"type": "FeatureCollection", "features": features}).to_string()
}
