use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// An axis-aligned tile rectangle in linear units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileRect {
    /// Corner with the smallest coordinates.
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
}

impl TileRect {
    /// Creates a new tile rectangle.
    #[must_use]
    pub fn new(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// The four corners in fixed winding order:
    /// `(x, y) → (x + w, y) → (x + w, y + h) → (x, y + h)`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let (x, y) = (self.origin.x, self.origin.y);
        [
            Point2::new(x, y),
            Point2::new(x + self.width, y),
            Point2::new(x + self.width, y + self.height),
            Point2::new(x, y + self.height),
        ]
    }

    /// The rectangle shrunk by `amount` on every side.
    ///
    /// Never inverts: each side shrinks by at most half the dimension.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        let dx = amount.min(self.width * 0.5);
        let dy = amount.min(self.height * 0.5);
        Self {
            origin: Point2::new(self.origin.x + dx, self.origin.y + dy),
            width: self.width - 2.0 * dx,
            height: self.height - 2.0 * dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn corners_winding() {
        let t = TileRect::new(Point2::new(1.0, 2.0), 3.0, 4.0);
        let c = t.corners();
        assert_eq!(c[0], Point2::new(1.0, 2.0));
        assert_eq!(c[1], Point2::new(4.0, 2.0));
        assert_eq!(c[2], Point2::new(4.0, 6.0));
        assert_eq!(c[3], Point2::new(1.0, 6.0));
    }

    #[test]
    fn inset_shrinks_all_sides() {
        let t = TileRect::new(Point2::new(0.0, 0.0), 10.0, 4.0).inset(1.0);
        assert!((t.origin.x - 1.0).abs() < TOL);
        assert!((t.origin.y - 1.0).abs() < TOL);
        assert!((t.width - 8.0).abs() < TOL);
        assert!((t.height - 2.0).abs() < TOL);
    }

    #[test]
    fn inset_never_inverts() {
        let t = TileRect::new(Point2::new(0.0, 0.0), 1.0, 1.0).inset(5.0);
        assert!(t.width >= 0.0 && t.height >= 0.0);
        assert!((t.origin.x - 0.5).abs() < TOL);
    }
}
