mod room;
mod tile;

pub use room::{AppendOutcome, RoomOutline, SNAP_DISTANCE};
pub use tile::TileRect;
