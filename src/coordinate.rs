use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A planar position. By GeoJSON convention `x` is the longitude and `y` the latitude.
///
/// On the wire a coordinate is an array of exactly two numbers.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from(coord: (f64, f64)) -> Self {
        Coordinate {
            x: coord.0,
            y: coord.1,
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(coord: [f64; 2]) -> Self {
        Coordinate {
            x: coord[0],
            y: coord[1],
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.x, coord.y]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Dot product of the vector self . rhs
    pub fn dot(&self, rhs: Coordinate) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Euclidean distance to `other`, in coordinate units.
    ///
    /// This is not a distance on the sphere: it is meaningless across the antimeridian
    /// and increasingly wrong as the points get further apart.
    pub fn distance(&self, other: Coordinate) -> f64 {
        let delta = *self - other;
        delta.dot(delta).sqrt()
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Coordinate {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Coordinate {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
