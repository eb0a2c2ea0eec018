use serde::{Deserialize, Serialize};

use crate::geometry::RoomOutline;
use crate::math::distance_2d::distance;
use crate::math::{Point2, Vector2};

/// Length annotation for one wall of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabel {
    pub start: Point2,
    pub end: Point2,
    /// Wall length in whole centimetres.
    pub length_cm: f64,
}

impl EdgeLabel {
    /// Midpoint of the wall, where a renderer anchors the label.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// `start → end` turned by -90° and normalized; on a Y-down screen this
    /// is the wall's left-hand side. Zero for a zero-length wall.
    #[must_use]
    pub fn label_normal(&self) -> Vector2 {
        let d = self.end - self.start;
        let len = d.norm();
        if len < f64::EPSILON {
            return Vector2::zeros();
        }
        Vector2::new(d.y / len, -d.x / len)
    }
}

/// Rounded length of a segment in whole centimetres.
#[must_use]
pub fn length_cm(a: &Point2, b: &Point2, scale: f64) -> f64 {
    (distance(a, b) / scale).round()
}

/// Computes the wall length labels of an outline.
///
/// Open outlines get one label per drawn segment; closed outlines also get
/// the closing wall from the last vertex back to the first.
pub struct EdgeLengths<'a> {
    room: &'a RoomOutline,
    scale: f64,
}

impl<'a> EdgeLengths<'a> {
    /// Creates a new `EdgeLengths` query. `scale` is in linear units per cm.
    #[must_use]
    pub fn new(room: &'a RoomOutline, scale: f64) -> Self {
        Self { room, scale }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<EdgeLabel> {
        let v = self.room.vertices();
        let n = v.len();
        let edges = if self.room.is_closed() {
            n
        } else {
            n.saturating_sub(1)
        };
        (0..edges)
            .map(|i| {
                let (start, end) = (v[i], v[(i + 1) % n]);
                EdgeLabel {
                    start,
                    end,
                    length_cm: length_cm(&start, &end, self.scale),
                }
            })
            .collect()
    }
}
