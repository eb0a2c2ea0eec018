use serde::{Deserialize, Serialize};

use crate::config::{GridConfig, GridInputs};
use crate::math::Point2;

/// Interaction mode of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Clicks place outline vertices.
    #[default]
    Draw,
    /// Dragging the empty floor shifts the tile grid.
    Edit,
}

/// Everything a front end can ask a [`Session`](super::Session) to do.
///
/// Points are in linear (screen) units. Pointer commands carry an
/// `orthogonal` flag (a held modifier) that snaps the drawn wall onto the
/// horizontal or vertical through the previous vertex.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Adds a vertex, or closes the outline when it lands on the first one.
    AppendVertex(Point2),
    /// Appends a wall of exact length (cm) from the last vertex toward the pointer.
    AppendWall { length_cm: f64 },
    /// Moves a vertex of a closed outline.
    ReplaceVertex { index: usize, point: Point2 },
    /// Empties the outline and resets the grid offset.
    Clear,
    SetConfig(GridConfig),
    /// Raw form values; unusable fields fall back to defaults.
    SetInputs(GridInputs),
    SetMode(Mode),
    PointerMove { point: Point2, orthogonal: bool },
    PointerDown(Point2),
    PointerUp { point: Point2, orthogonal: bool },
    /// The pointer left the drawing surface; cancels any drag.
    PointerLeave,
}
