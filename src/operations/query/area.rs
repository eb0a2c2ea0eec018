use crate::geometry::RoomOutline;
use crate::math::polygon_2d::polygon_area;

/// Square centimetres per square metre.
pub const CM2_PER_M2: f64 = 10_000.0;

/// Computes the floor area of a room outline in square metres.
///
/// The shoelace area in squared linear units is divided by `scale²` to get
/// cm² and then by [`CM2_PER_M2`]. Open outlines have no area.
pub struct RoomArea<'a> {
    room: &'a RoomOutline,
    scale: f64,
}

impl<'a> RoomArea<'a> {
    /// Creates a new `RoomArea` query. `scale` is in linear units per cm.
    #[must_use]
    pub fn new(room: &'a RoomOutline, scale: f64) -> Self {
        Self { room, scale }
    }

    /// Executes the query, returning the area in m².
    #[must_use]
    pub fn execute(&self) -> f64 {
        if !self.room.is_tileable() {
            return 0.0;
        }
        polygon_area(self.room.vertices()) / (self.scale * self.scale) / CM2_PER_M2
    }
}
