use crate::utils::{ring_segments, winding_number};
use crate::{Coordinate, HasEnvelope, LineString, Polygon};

/// Non-zero winding test of `point` against a single ring.
///
/// Unclosed rings are closed implicitly. Rings with fewer than 3 positions enclose
/// nothing.
pub fn point_in_ring(point: Coordinate, ring: &LineString) -> bool {
    if ring.len() < 3 || !ring.envelope().contains(point) {
        return false;
    }

    let wn: i32 = ring_segments(ring.coords())
        .map(|(start, end)| winding_number(point, start, end))
        .sum();

    wn != 0
}

/// True if `point` is inside the outer ring of `polygon` and outside all of its holes.
///
/// Points exactly on a boundary may land on either side.
pub fn contains_point(polygon: &Polygon, point: Coordinate) -> bool {
    match polygon.outer_ring() {
        None => false,
        Some(shell) => {
            point_in_ring(point, shell)
                && !polygon.holes().iter().any(|hole| point_in_ring(point, hole))
        }
    }
}
