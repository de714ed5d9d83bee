use crate::{Coordinate, LineString};

/// Planar distance between two positions; see [`Coordinate::distance`].
pub fn distance(start: Coordinate, end: Coordinate) -> f64 {
    start.distance(end)
}

/// True iff the first and last positions are exactly equal. An empty line is not closed.
pub fn is_closed(line: &LineString) -> bool {
    match (line.coords().first(), line.coords().last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// Sum of the planar distances between consecutive positions, in traversal order.
pub fn length(line: &LineString) -> f64 {
    line.coords()
        .windows(2)
        .map(|c| distance(c[0], c[1]))
        .sum()
}
