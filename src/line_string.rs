use crate::algorithms;
use crate::{Coordinate, HasEnvelope, Point, Rectangle};
use serde::{Deserialize, Serialize};

/// An ordered sequence of positions.
///
/// No minimum length is enforced, and polygon rings are stored as line strings whether
/// or not they are closed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineString {
    coords: Vec<Coordinate>,
}

impl LineString {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        LineString { coords }
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

    pub fn points(&self) -> Vec<Point> {
        self.coords.iter().copied().map(Point::new).collect()
    }

    pub fn is_closed(&self) -> bool {
        algorithms::is_closed(self)
    }

    pub fn length(&self) -> f64 {
        algorithms::length(self)
    }
}

impl<IP: Into<Coordinate>> From<Vec<IP>> for LineString {
    fn from(coords: Vec<IP>) -> Self {
        LineString::new(coords.into_iter().map(|ip| ip.into()).collect())
    }
}

impl HasEnvelope for LineString {
    fn envelope(&self) -> Rectangle {
        Rectangle::of_coords(&self.coords)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        MultiLineString { lines }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of the lengths of every line.
    pub fn length(&self) -> f64 {
        self.lines.iter().map(LineString::length).sum()
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(lines: Vec<LineString>) -> Self {
        MultiLineString::new(lines)
    }
}

impl HasEnvelope for MultiLineString {
    fn envelope(&self) -> Rectangle {
        let rects: Vec<Rectangle> = self.lines.iter().map(HasEnvelope::envelope).collect();
        Rectangle::of(&rects)
    }
}
