use super::{Aabb2, Point2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (Y up).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + n - 1) % n;
        sum += points[j].x * points[i].y - points[i].x * points[j].y;
    }
    sum * 0.5
}

/// Unsigned polygon area; identical for either winding.
///
/// Returns 0 for fewer than 3 vertices.
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Ray-casting parity test.
///
/// A horizontal ray from `point` towards +X toggles membership at every edge
/// it crosses. An edge counts when exactly one endpoint lies strictly above
/// `point.y`, so horizontal edges never count. Points exactly on the boundary
/// get a fixed but arbitrary answer: for an axis-aligned rectangle the
/// min-x/min-y sides test inside and the max-x/max-y sides outside.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Axis-aligned bounding box of a point set, or `None` when empty.
#[must_use]
pub fn bounding_box(points: &[Point2]) -> Option<Aabb2> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some(Aabb2::new(min, max))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    #[test]
    fn triangle_area() {
        let tri = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)];
        assert!((polygon_area(&tri) - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_follows_winding() {
        let ccw = square();
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert!((signed_area_2d(&ccw) - 100.0).abs() < TOLERANCE);
        assert!((signed_area_2d(&cw) + 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn area_invariant_under_rotation_and_reversal() {
        let pts = vec![
            p(0.0, 0.0),
            p(7.0, 1.0),
            p(9.0, 6.0),
            p(4.0, 9.0),
            p(-2.0, 5.0),
        ];
        let expected = polygon_area(&pts);
        for k in 0..pts.len() {
            let mut rotated = pts.clone();
            rotated.rotate_left(k);
            assert!((polygon_area(&rotated) - expected).abs() < 1e-9);
            rotated.reverse();
            assert!((polygon_area(&rotated) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn area_degenerate() {
        assert!(polygon_area(&[]).abs() < TOLERANCE);
        assert!(polygon_area(&[p(1.0, 1.0), p(2.0, 2.0)]).abs() < TOLERANCE);
        // Collinear points enclose nothing.
        assert!(polygon_area(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]).abs() < TOLERANCE);
    }

    #[test]
    fn point_inside_and_outside_square() {
        let sq = square();
        assert!(point_in_polygon(&p(5.0, 5.0), &sq));
        assert!(!point_in_polygon(&p(15.0, 15.0), &sq));
        assert!(!point_in_polygon(&p(-1.0, 5.0), &sq));
    }

    #[test]
    fn point_in_polygon_ignores_winding() {
        let mut sq = square();
        sq.reverse();
        assert!(point_in_polygon(&p(5.0, 5.0), &sq));
        assert!(!point_in_polygon(&p(15.0, 15.0), &sq));
    }

    #[test]
    fn point_in_concave_polygon() {
        // L-shape: notch in the top-right quadrant.
        let l = vec![
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 5.0),
            p(5.0, 5.0),
            p(5.0, 10.0),
            p(0.0, 10.0),
        ];
        assert!(point_in_polygon(&p(2.0, 8.0), &l));
        assert!(point_in_polygon(&p(8.0, 2.0), &l));
        assert!(!point_in_polygon(&p(8.0, 8.0), &l));
    }

    #[test]
    fn boundary_membership_is_consistent() {
        let sq = square();
        // Min sides test inside, max sides outside; repeated calls agree.
        for _ in 0..3 {
            assert!(point_in_polygon(&p(0.0, 5.0), &sq));
            assert!(point_in_polygon(&p(5.0, 0.0), &sq));
            assert!(!point_in_polygon(&p(10.0, 5.0), &sq));
            assert!(!point_in_polygon(&p(5.0, 10.0), &sq));
        }
    }

    #[test]
    fn bounding_box_of_points() {
        let bb = bounding_box(&[p(3.0, -1.0), p(-2.0, 4.0), p(1.0, 1.0)]).unwrap();
        assert!((bb.min.x + 2.0).abs() < TOLERANCE);
        assert!((bb.min.y + 1.0).abs() < TOLERANCE);
        assert!((bb.max.x - 3.0).abs() < TOLERANCE);
        assert!((bb.max.y - 4.0).abs() < TOLERANCE);
        assert!((bb.width() - 5.0).abs() < TOLERANCE);
        assert!(bounding_box(&[]).is_none());
    }
}
