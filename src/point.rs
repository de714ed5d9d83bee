use crate::{Coordinate, HasEnvelope, Rectangle};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coord: Coordinate,
}

impl Point {
    pub fn new(coord: Coordinate) -> Self {
        Point { coord }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x
    }

    pub fn y(&self) -> f64 {
        self.coord.y
    }
}

impl From<Coordinate> for Point {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord)
    }
}

impl From<(f64, f64)> for Point {
    fn from(coord: (f64, f64)) -> Self {
        Point::new(coord.into())
    }
}

impl From<[f64; 2]> for Point {
    fn from(coord: [f64; 2]) -> Self {
        Point::new(coord.into())
    }
}

impl HasEnvelope for Point {
    fn envelope(&self) -> Rectangle {
        Rectangle::new(self.coord, self.coord)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPoint {
    coords: Vec<Coordinate>,
}

impl MultiPoint {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        MultiPoint { coords }
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Each position as its own `Point`.
    pub fn points(&self) -> Vec<Point> {
        self.coords.iter().copied().map(Point::new).collect()
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(points: Vec<Point>) -> Self {
        MultiPoint::new(points.into_iter().map(|p| p.coord).collect())
    }
}

impl HasEnvelope for MultiPoint {
    fn envelope(&self) -> Rectangle {
        Rectangle::of_coords(&self.coords)
    }
}
