use super::Point2;

/// Bounded segment-segment intersection test in 2D.
///
/// Solves `a1 + t * (a2 - a1) = b1 + u * (b2 - b1)` and reports a hit when
/// both `t` and `u` lie in `[0, 1]`, so touching endpoints count.
///
/// When the determinant is exactly zero (parallel or collinear segments) the
/// result is always `false`, even for overlapping collinear segments. Tile
/// classification relies on this: a tile edge lying along a wall is not a
/// crossing.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segments_intersect(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> bool {
    let denom = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if denom == 0.0 {
        return false;
    }
    let t = ((a1.x - b1.x) * (b1.y - b2.y) - (a1.y - b1.y) * (b1.x - b2.x)) / denom;
    let u = -((a1.x - a2.x) * (a1.y - b1.y) - (a1.y - a2.y) * (a1.x - b1.x)) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Whether segment `a1 → a2` intersects any edge of the closed polygon.
#[must_use]
pub fn segment_crosses_polygon(a1: &Point2, a2: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    (0..n).any(|j| segments_intersect(a1, a2, &polygon[j], &polygon[(j + 1) % n]))
}
