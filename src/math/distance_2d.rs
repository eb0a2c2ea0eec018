use super::{Point2, TOLERANCE};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Snaps `point` onto the horizontal or vertical line through `anchor`,
/// whichever axis the offset is dominated by.
///
/// Ties snap onto the vertical line (X is taken from `anchor`).
#[must_use]
pub fn orthogonal_snap(anchor: &Point2, point: &Point2) -> Point2 {
    let dx = (point.x - anchor.x).abs();
    let dy = (point.y - anchor.y).abs();
    if dx > dy {
        Point2::new(point.x, anchor.y)
    } else {
        Point2::new(anchor.x, point.y)
    }
}

/// Point at `length` from `from` in the direction of `toward`.
///
/// When both points coincide the direction is undefined and +X is used, the
/// same heading `atan2(0, 0)` gives.
#[must_use]
pub fn point_at_distance(from: &Point2, toward: &Point2, length: f64) -> Point2 {
    let d = toward - from;
    let len = d.norm();
    if len < TOLERANCE {
        return Point2::new(from.x + length, from.y);
    }
    from + d * (length / len)
}
