mod area;
mod bounding_box;
mod length;
mod stats;

pub use area::{RoomArea, CM2_PER_M2};
pub use bounding_box::BoundingBox;
pub use length::{length_cm, EdgeLabel, EdgeLengths};
pub use stats::{ComputeStats, Stats, TilePlan, WASTE_MARGIN};
