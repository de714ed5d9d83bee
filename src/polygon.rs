use crate::algorithms;
use crate::{Coordinate, HasEnvelope, LineString, Rectangle};
use serde::{Deserialize, Serialize};

/// A polygon as a list of rings. Ring 0 is the shell and every later ring is a hole,
/// whatever their winding direction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    pub fn new(shell: LineString, holes: Vec<LineString>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(shell);
        rings.extend(holes);
        Polygon { rings }
    }

    pub fn from_rings(rings: Vec<LineString>) -> Self {
        Polygon { rings }
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The outer boundary, or `None` for a polygon decoded from an empty ring list.
    pub fn outer_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn contains_point(&self, point: Coordinate) -> bool {
        algorithms::contains_point(self, point)
    }
}

impl From<Vec<LineString>> for Polygon {
    fn from(rings: Vec<LineString>) -> Self {
        Polygon::from_rings(rings)
    }
}

impl HasEnvelope for Polygon {
    fn envelope(&self) -> Rectangle {
        self.outer_ring()
            .map(HasEnvelope::envelope)
            .unwrap_or_else(Rectangle::new_empty)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// True if any of the sub-polygons contains `point`.
    pub fn contains_point(&self, point: Coordinate) -> bool {
        self.polygons.iter().any(|p| p.contains_point(point))
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        MultiPolygon::new(polygons)
    }
}

impl HasEnvelope for MultiPolygon {
    fn envelope(&self) -> Rectangle {
        let rects: Vec<Rectangle> = self.polygons.iter().map(HasEnvelope::envelope).collect();
        Rectangle::of(&rects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> LineString {
        LineString::from(vec![(min, min), (min, max), (max, max), (max, min), (min, min)])
    }

    #[test]
    fn check_ring_split() {
        let polygon = Polygon::new(square(-5., 5.), vec![square(0., 3.), square(-4., -2.)]);
        assert_eq!(polygon.outer_ring(), Some(&square(-5., 5.)));
        assert_eq!(polygon.holes(), &[square(0., 3.), square(-4., -2.)][..]);
        assert_eq!(polygon.rings().len(), 3);
    }

    #[test]
    fn check_shell_only() {
        let polygon = Polygon::from_rings(vec![square(0., 1.)]);
        assert!(polygon.holes().is_empty());
        assert_eq!(polygon.envelope(), Rectangle::new((0., 0.).into(), (1., 1.).into()));
    }

    #[test]
    fn check_no_rings() {
        let polygon = Polygon::default();
        assert_eq!(polygon.outer_ring(), None);
        assert!(polygon.holes().is_empty());
        assert!(polygon.envelope().is_empty());
        assert!(!polygon.contains_point((0., 0.).into()));
    }

    #[test]
    fn check_multi_polygon() {
        let multi = MultiPolygon::from(vec![
            Polygon::from_rings(vec![square(-1., 1.)]),
            Polygon::from_rings(vec![square(1., 3.)]),
        ]);
        assert_eq!(multi.len(), 2);
        assert!(multi.contains_point((2., 2.).into()));
        assert!(multi.contains_point((-0.5, 0.5).into()));
        assert!(!multi.contains_point((5., 5.).into()));
        assert_eq!(multi.envelope(), Rectangle::new((-1., -1.).into(), (3., 3.).into()));
    }
}
