use crate::Coordinate;

pub(crate) fn winding_number(point: Coordinate, start: Coordinate, end: Coordinate) -> i32 {
    // Calculate the two halves of the cross-product (= lx - rx)
    let lx = (end.x - start.x) * (point.y - start.y);
    let rx = (end.y - start.y) * (point.x - start.x);

    if start.y <= point.y {
        // Upward crossing
        if end.y > point.y && lx > rx {
            return 1;
        }
    } else {
        // Downward crossing
        if end.y <= point.y && lx < rx {
            return -1;
        }
    }
    0
}

/// Segments of `coords` taken as a ring: an unclosed ring gets an extra segment from its
/// last position back to its first.
pub(crate) fn ring_segments(
    coords: &[Coordinate],
) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
    let closing = match (coords.first(), coords.last()) {
        (Some(&first), Some(&last)) if first != last => Some((last, first)),
        _ => None,
    };
    coords
        .windows(2)
        .map(|c| (c[0], c[1]))
        .chain(closing)
}
