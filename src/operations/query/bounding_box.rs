use crate::geometry::RoomOutline;
use crate::math::polygon_2d::bounding_box;
use crate::math::Aabb2;

/// Computes the axis-aligned bounding box of a room outline.
pub struct BoundingBox<'a> {
    room: &'a RoomOutline,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(room: &'a RoomOutline) -> Self {
        Self { room }
    }

    /// Executes the query, returning `None` for an outline without vertices.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb2> {
        bounding_box(self.room.vertices())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn bounds_of_drawn_outline() {
        let room = RoomOutline::closed_from(vec![
            Point2::new(10.0, 40.0),
            Point2::new(90.0, 20.0),
            Point2::new(50.0, 80.0),
        ]);
        let bb = BoundingBox::new(&room).execute().unwrap();
        assert_eq!(bb.min, Point2::new(10.0, 20.0));
        assert_eq!(bb.max, Point2::new(90.0, 80.0));
    }

    #[test]
    fn empty_outline_has_no_bounds() {
        assert!(BoundingBox::new(&RoomOutline::new()).execute().is_none());
    }
}
