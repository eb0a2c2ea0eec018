use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::TileRect;
use crate::math::intersect_2d::segments_intersect;
use crate::math::polygon_2d::point_in_polygon;
use crate::math::Point2;
use crate::operations::layout::TileGrid;

/// Inset (linear units) applied to a tile before testing it against the room.
///
/// A tile that only shares a boundary line with the room is then neither
/// inside nor crossing it, so grid-aligned rooms come out as whole tiles.
pub const CONTACT_TOLERANCE: f64 = 1e-6;

/// How a tile relates to the room.
///
/// Tiles that do not touch the room at all have no status and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TileStatus {
    /// Entirely inside the room, laid without cutting.
    Full,
    /// Straddles the room boundary and must be trimmed.
    Cut,
}

/// A tile kept for display together with its status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedTile {
    pub rect: TileRect,
    pub status: TileStatus,
}

/// Containment and crossing facts about one tile, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileProbe {
    /// Every tile corner is inside the room.
    pub all_inside: bool,
    /// At least one tile corner is inside the room.
    pub any_inside: bool,
    /// At least one room vertex is inside the tile.
    pub any_room_corner_inside: bool,
    /// Some tile edge intersects some room edge.
    pub lines_intersect: bool,
}

impl TileProbe {
    /// Tests `tile` against the closed polygon `room`.
    #[must_use]
    pub fn measure(tile: &TileRect, room: &[Point2]) -> Self {
        let corners = tile.inset(CONTACT_TOLERANCE).corners();

        let mut all_inside = true;
        let mut any_inside = false;
        for c in &corners {
            if point_in_polygon(c, room) {
                any_inside = true;
            } else {
                all_inside = false;
            }
        }

        let any_room_corner_inside = room.iter().any(|v| point_in_polygon(v, &corners));

        let n = room.len();
        let lines_intersect = (0..4).any(|i| {
            let (t1, t2) = (&corners[i], &corners[(i + 1) % 4]);
            (0..n).any(|j| segments_intersect(t1, t2, &room[j], &room[(j + 1) % n]))
        });

        Self {
            all_inside,
            any_inside,
            any_room_corner_inside,
            lines_intersect,
        }
    }

    /// Status implied by the probe, `None` when the tile misses the room.
    #[must_use]
    pub fn status(&self) -> Option<TileStatus> {
        let intersects = self.any_inside || self.any_room_corner_inside || self.lines_intersect;
        if !intersects {
            None
        } else if self.all_inside && !self.lines_intersect {
            Some(TileStatus::Full)
        } else {
            Some(TileStatus::Cut)
        }
    }
}

/// Classifies a single tile against the room outline.
#[must_use]
pub fn classify_tile(tile: &TileRect, room: &[Point2]) -> Option<TileStatus> {
    TileProbe::measure(tile, room).status()
}

/// Result of classifying a whole grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileClassification {
    /// Tiles touching the room, in grid enumeration order.
    pub tiles: Vec<ClassifiedTile>,
    pub full: usize,
    pub cut: usize,
}

/// Classifies every candidate tile of a grid against the room.
///
/// Cost is `4 * N` segment tests plus `4 + N` point tests per tile, where
/// `N` is the number of room vertices.
#[derive(Debug)]
pub struct ClassifyTiles<'a> {
    grid: &'a TileGrid,
    room: &'a [Point2],
}

impl<'a> ClassifyTiles<'a> {
    /// Creates a new classification operation.
    #[must_use]
    pub fn new(grid: &'a TileGrid, room: &'a [Point2]) -> Self {
        Self { grid, room }
    }

    /// Executes the classification.
    #[must_use]
    pub fn execute(&self) -> TileClassification {
        let mut out = TileClassification::default();
        if self.room.len() < 3 {
            return out;
        }
        for rect in self.grid {
            let Some(status) = classify_tile(&rect, self.room) else {
                continue;
            };
            match status {
                TileStatus::Full => out.full += 1,
                TileStatus::Cut => out.cut += 1,
            }
            out.tiles.push(ClassifiedTile { rect, status });
        }
        debug!(
            candidates = self.grid.len(),
            full = out.full,
            cut = out.cut,
            "tiles classified"
        );
        out
    }
}
