//! Floor tiling estimates for hand-drawn room outlines.
//!
//! A room is drawn as a polygon in screen units, a rectangular tile grid with
//! joints and an offset is laid over its bounding box, and every tile that
//! touches the room is classified as FULL or CUT. [`session::Session`] wraps
//! the whole pipeline behind a command interface for interactive front ends.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;

pub use config::{GridConfig, GridInputs};
pub use error::{Result, TileplanError};
pub use geometry::{RoomOutline, TileRect};
pub use operations::query::{Stats, TilePlan};
pub use session::{Command, Layout, Mode, Session};
